//! Regional and national summary of the 2016 EU referendum count.
//!
//! Works on the records produced by parse-xml (not cleaned). Area results come
//! from `EU_result_<area>_<seq>.xml` files and national totals from the latest
//! `EU_running_totals_<seq>.xml`.

use super::referendum_areas::{self, AREAS, REGIONS};
use crate::constants::TRANSFORM_2016_UK_REFERENDUM;
use crate::error::{FerretError, Result};
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::Payload;
use futures::future::FutureExt;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

pub const LEAVE: &str = "Leave the EU";
pub const REMAIN: &str = "Remain a member of the EU";

const RESULT_FILE: &str = "EU_result";
const TOTALS_FILE: &str = "EU_running_totals";

pub struct Transform2016UkReferendum;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Transform, Transform2016UkReferendum)
}

impl Stage for Transform2016UkReferendum {
    fn call(&self, input: Option<StageValue>, _ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        Ok(async move {
            let payload = upstream(TRANSFORM_2016_UK_REFERENDUM, input).await?;
            let records = payload
                .into_value()
                .ok_or_else(|| plugin_error("expected parsed XML records, got unread streams"))?;
            let summary = summarise(&records, chrono::Utc::now().timestamp_millis())?;
            Ok(Payload::Value(serde_json::to_value(summary)?))
        }
        .boxed())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    pub id: String,
    pub name: String,
    pub winning_answer_text: String,
    pub remain_votes: u64,
    pub leave_votes: u64,
    pub region_id: String,
    pub turnout: u64,
    pub electorate: u64,
    pub called: bool,
}

impl AreaResult {
    /// An area nothing has been declared for yet.
    fn uncalled(area: &referendum_areas::CountingArea) -> Self {
        Self {
            id: area.number.to_string(),
            name: area.name.to_string(),
            winning_answer_text: String::new(),
            remain_votes: 0,
            leave_votes: 0,
            region_id: area.region_id.to_string(),
            turnout: 0,
            electorate: 0,
            called: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResult {
    pub name: String,
    pub id: String,
    pub remain_votes: u64,
    pub leave_votes: u64,
    pub areas_reported: usize,
    pub reported_percent: f64,
    pub called: bool,
    pub winning_answer_text: String,
    pub turnout: u64,
    pub electorate: u64,
    pub areas: BTreeMap<String, AreaResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferendumSummary {
    pub number_of_results: u64,
    pub total_voting_areas: u64,
    pub answers: Vec<Map<String, Value>>,
    pub regions: BTreeMap<String, RegionResult>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// One parse-xml record.
struct Record<'a> {
    file: &'a str,
    data: &'a Value,
}

pub fn summarise(records: &Value, timestamp: i64) -> Result<ReferendumSummary> {
    let records = read_records(records)?;

    let mut areas: BTreeMap<String, AreaResult> = BTreeMap::new();
    for record in latest_copies(records.iter().filter(|r| r.file.contains(RESULT_FILE)).collect()) {
        let area = area_result(record)?;
        areas.insert(area.id.clone(), area);
    }
    debug!("{} of {} areas declared", areas.len(), AREAS.len());
    for area in AREAS.iter() {
        areas
            .entry(area.number.to_string())
            .or_insert_with(|| AreaResult::uncalled(area));
    }

    let regions: BTreeMap<String, RegionResult> = REGIONS
        .iter()
        .map(|region| {
            let members = areas
                .values()
                .filter(|a| a.region_id == region.id)
                .map(|a| (a.id.clone(), a.clone()))
                .collect();
            (region.id.to_string(), region_result(region, members))
        })
        .collect();

    let totals = latest_totals(&records)?;
    let summary = ReferendumSummary {
        number_of_results: first_integer(totals.data, "numberOfResults", totals.file)?,
        total_voting_areas: first_integer(totals.data, "totalVotingAreas", totals.file)?,
        answers: national_answers(totals)?,
        regions,
        timestamp,
    };
    info!(
        "Summarised {} declared areas from {}",
        summary.regions.values().map(|r| r.areas_reported).sum::<usize>(),
        totals.file
    );
    Ok(summary)
}

fn read_records(value: &Value) -> Result<Vec<Record<'_>>> {
    let items = value
        .as_array()
        .ok_or_else(|| plugin_error("expected a list of parsed XML records"))?;
    items
        .iter()
        .map(|item| {
            let file = item.get("file").and_then(Value::as_str);
            let data = item.get("xmlData");
            match (file, data) {
                (Some(file), Some(data)) => Ok(Record { file, data }),
                _ => Err(plugin_error("each record needs `file` and `xmlData`")),
            }
        })
        .collect()
}

/// Keeps only the highest-numbered copy of each result file.
fn latest_copies<'r, 'a>(records: Vec<&'r Record<'a>>) -> Vec<&'r Record<'a>> {
    let mut newest: HashMap<&str, Option<u64>> = HashMap::new();
    for record in &records {
        let (base, seq) = split_sequence(record.file);
        let entry = newest.entry(base).or_insert(seq);
        if seq > *entry {
            *entry = seq;
        }
    }
    records
        .into_iter()
        .filter(|r| {
            let (base, seq) = split_sequence(r.file);
            newest.get(base) == Some(&seq)
        })
        .collect()
}

/// `EU_result_130_2.xml` splits into `("EU_result_130", Some(2))`.
fn split_sequence(file: &str) -> (&str, Option<u64>) {
    static SEQUENCE: OnceLock<Regex> = OnceLock::new();
    let pattern = SEQUENCE.get_or_init(|| Regex::new(r"_(\d+)\.xml").expect("sequence pattern is valid"));
    match pattern.captures(file) {
        Some(caps) => {
            let whole = caps.get(0).map_or(file.len(), |m| m.start());
            (&file[..whole], caps[1].parse().ok())
        }
        None => (file, None),
    }
}

fn area_result(record: &Record<'_>) -> Result<AreaResult> {
    let raw_number = first_text(record.data, "number")
        .ok_or_else(|| plugin_error(format!("{}: no area number", record.file)))?;
    let id = format!("{raw_number:0>3}");
    let area = referendum_areas::area(&id)
        .ok_or_else(|| plugin_error(format!("{}: unknown counting area '{id}'", record.file)))?;

    let answers = first_answers(record.data, record.file)?;
    let votes = |index: usize, side: &str| -> Result<u64> {
        answers
            .get(index)
            .and_then(|a| a.get(ATTRS))
            .and_then(|attrs| attrs.get("votes"))
            .and_then(integer)
            .ok_or_else(|| plugin_error(format!("{}: no {side} votes", record.file)))
    };

    Ok(AreaResult {
        name: descendants(record.data, "name")
            .get(1)
            .copied()
            .and_then(Value::as_str)
            .unwrap_or(area.name)
            .to_string(),
        winning_answer_text: first_text(record.data, "winningAnswerText").unwrap_or_default().to_string(),
        remain_votes: votes(0, "remain")?,
        leave_votes: votes(1, "leave")?,
        region_id: area.region_id.to_string(),
        turnout: first_integer(record.data, "turnout", record.file)?,
        electorate: first_integer(record.data, "electorate", record.file)?,
        called: true,
        id,
    })
}

fn region_result(region: &referendum_areas::Region, areas: BTreeMap<String, AreaResult>) -> RegionResult {
    let sum = |field: fn(&AreaResult) -> u64| areas.values().map(field).sum::<u64>();
    let remain_votes = sum(|a| a.remain_votes);
    let leave_votes = sum(|a| a.leave_votes);
    let areas_reported = areas.values().filter(|a| a.called).count();

    RegionResult {
        name: region.name.to_string(),
        id: region.id.to_string(),
        remain_votes,
        leave_votes,
        areas_reported,
        reported_percent: (areas_reported as f64 / region.areas as f64) * 100.0,
        called: areas_reported == region.areas,
        winning_answer_text: winner(remain_votes, leave_votes).to_string(),
        turnout: sum(|a| a.turnout),
        electorate: sum(|a| a.electorate),
        areas,
    }
}

fn winner(remain: u64, leave: u64) -> &'static str {
    match leave.cmp(&remain) {
        std::cmp::Ordering::Greater => LEAVE,
        std::cmp::Ordering::Less => REMAIN,
        std::cmp::Ordering::Equal => "",
    }
}

fn latest_totals<'r, 'a>(records: &'r [Record<'a>]) -> Result<&'r Record<'a>> {
    records
        .iter()
        .filter(|r| r.file.contains(TOTALS_FILE))
        .max_by_key(|r| split_sequence(r.file).1)
        .ok_or_else(|| plugin_error(format!("no {TOTALS_FILE} file among the records")))
}

/// Attributes of each national answer, with counts as numbers.
fn national_answers(totals: &Record<'_>) -> Result<Vec<Map<String, Value>>> {
    let answers = first_answers(totals.data, totals.file)?;
    Ok(answers
        .iter()
        .filter_map(|answer| answer.get(ATTRS).and_then(Value::as_object))
        .map(|attrs| {
            attrs
                .iter()
                .map(|(key, value)| {
                    let value = if key == "percentageShare" {
                        share(value)
                    } else {
                        integer(value).map(Value::from).unwrap_or_else(|| value.clone())
                    };
                    (key.clone(), value)
                })
                .collect()
        })
        .collect())
}

const ATTRS: &str = super::parse_xml::ATTRIBUTES_KEY;

fn first_answers<'a>(data: &'a Value, file: &str) -> Result<&'a Vec<Value>> {
    descendants(data, "Answer")
        .first()
        .copied()
        .and_then(Value::as_array)
        .ok_or_else(|| plugin_error(format!("{file}: no Answer elements")))
}

fn first_text<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    descendants(data, key).first().copied().and_then(Value::as_str)
}

fn first_integer(data: &Value, key: &str, file: &str) -> Result<u64> {
    descendants(data, key)
        .first()
        .copied()
        .and_then(integer)
        .ok_or_else(|| plugin_error(format!("{file}: no numeric {key}")))
}

/// Every value stored under `key`, in document order.
///
/// A node's own `key` member comes before matches further down its subtree.
pub fn descendants<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    fn walk<'a>(value: &'a Value, key: &str, found: &mut Vec<&'a Value>) {
        match value {
            Value::Object(map) => {
                if let Some(hit) = map.get(key) {
                    found.push(hit);
                }
                for child in map.values() {
                    walk(child, key, found);
                }
            }
            Value::Array(items) => {
                for item in items {
                    walk(item, key, found);
                }
            }
            _ => {}
        }
    }

    let mut found = Vec::new();
    walk(value, key, &mut found);
    found
}

/// Whole part of a numeric attribute such as `"70.6"`.
fn integer(value: &Value) -> Option<u64> {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.trunc() as u64)),
        Value::String(s) => {
            let numeric = NUMERIC.get_or_init(|| Regex::new(r"^\d+\.*\d*$").expect("numeric pattern is valid"));
            if !numeric.is_match(s) {
                return None;
            }
            let digits = s.split('.').next().unwrap_or_default();
            digits.parse().ok()
        }
        _ => None,
    }
}

fn share(value: &Value) -> Value {
    value
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| value.clone())
}

fn plugin_error(message: impl Into<String>) -> FerretError {
    FerretError::plugin(TRANSFORM_2016_UK_REFERENDUM, message)
}
