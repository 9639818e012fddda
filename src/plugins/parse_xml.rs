use super::expect_streams;
use crate::constants::PARSE_XML;
use crate::error::{FerretError, Result};
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::{Payload, SourceStream};
use futures::future::{try_join_all, FutureExt};
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Key holding an element's attributes.
pub const ATTRIBUTES_KEY: &str = "$";
/// Key holding an element's text when it also has attributes or children.
pub const TEXT_KEY: &str = "_";

/// Parses each acquired stream as an XML document.
///
/// Every stream becomes `{"file": <base name>, "xmlData": <document>}`. The
/// document is `{root: element}`, where an element is:
///
/// * a string, when it has neither attributes nor child elements (`""` when empty);
/// * otherwise an object with attributes under `$`, non-blank text under `_`,
///   and each child element name mapped to an array of its occurrences.
pub struct ParseXml;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Parse, ParseXml)
}

impl Stage for ParseXml {
    fn call(&self, input: Option<StageValue>, _ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        Ok(parse(input).boxed())
    }
}

async fn parse(input: Option<StageValue>) -> Result<Payload> {
    let streams = expect_streams(PARSE_XML, upstream(PARSE_XML, input).await?)?;
    let records = try_join_all(streams.into_iter().map(parse_stream)).await?;
    info!("Parsed {} XML documents", records.len());
    Ok(Payload::Value(Value::Array(records)))
}

async fn parse_stream(stream: SourceStream) -> Result<Value> {
    let file = stream.file_name();
    let text = stream.read_to_string().await?;
    let data = xml_to_json(&text).map_err(|e| FerretError::plugin(PARSE_XML, format!("{file}: {e}")))?;
    debug!(file = %file, "Parsed XML document");
    Ok(json!({ "file": file, "xmlData": data }))
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Map<String, Value>,
    children: IndexMap<String, Vec<Value>>,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Element {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Default::default()
        };
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.insert(key, Value::String(value));
        }
        Ok(element)
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }
        let mut obj = Map::new();
        if !self.attributes.is_empty() {
            obj.insert(ATTRIBUTES_KEY.to_string(), Value::Object(self.attributes));
        }
        if !self.text.trim().is_empty() {
            obj.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        for (name, occurrences) in self.children {
            obj.insert(name, Value::Array(occurrences));
        }
        Value::Object(obj)
    }
}

/// Convert an XML document to its JSON form.
pub fn xml_to_json(text: &str) -> Result<Value> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(Element::open(&start)?),
            Event::Empty(start) => {
                let element = Element::open(&start)?;
                close(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| FerretError::MalformedXml("unexpected closing tag".to_string()))?;
                close(element, &mut open, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(FerretError::MalformedXml(format!("unclosed element <{}>", unclosed.name)));
    }
    root.ok_or_else(|| FerretError::MalformedXml("document has no root element".to_string()))
}

fn close(element: Element, open: &mut [Element], root: &mut Option<Value>) -> Result<()> {
    let name = element.name.clone();
    let value = element.into_value();
    match open.last_mut() {
        Some(parent) => {
            parent.children.entry(name).or_default().push(value);
            Ok(())
        }
        None if root.is_some() => Err(FerretError::MalformedXml(format!(
            "second root element <{name}> after the document element"
        ))),
        None => {
            let mut document = Map::new();
            document.insert(name, value);
            *root = Some(Value::Object(document));
            Ok(())
        }
    }
}
