use super::parse_xml::ATTRIBUTES_KEY;
use crate::constants::TRANSFORM_CLEAN_XML;
use crate::error::{FerretError, Result};
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::Payload;
use futures::future::FutureExt;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Flattens parsed XML.
///
/// Single-element arrays collapse to their element and attribute maps are
/// merged into their owning object wherever no key collides. The top-level
/// list of records is left as a list.
pub struct TransformCleanXml;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Transform, TransformCleanXml)
}

impl Stage for TransformCleanXml {
    fn call(&self, input: Option<StageValue>, _ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        Ok(async move {
            let payload = upstream(TRANSFORM_CLEAN_XML, input).await?;
            let value = payload.into_value().ok_or_else(|| {
                FerretError::plugin(TRANSFORM_CLEAN_XML, "expected parsed data, got unread streams")
            })?;
            Ok(Payload::Value(clean_records(value)))
        }
        .boxed())
    }
}

pub fn clean_records(value: Value) -> Value {
    match value {
        Value::Array(records) => Value::Array(records.into_iter().map(clean).collect()),
        other => clean(other),
    }
}

pub fn clean(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut items: Vec<Value> = items.into_iter().map(clean).collect();
            if items.len() == 1 {
                items.swap_remove(0)
            } else {
                Value::Array(items)
            }
        }
        Value::Object(map) => {
            let mut map: Map<String, Value> = map.into_iter().map(|(k, v)| (k, clean(v))).collect();
            hoist_attributes(&mut map);
            Value::Object(map)
        }
        other => other,
    }
}

fn hoist_attributes(map: &mut Map<String, Value>) {
    let Some(Value::Object(attributes)) = map.remove(ATTRIBUTES_KEY) else {
        return;
    };
    let mut kept = Map::new();
    for (key, value) in attributes {
        if map.contains_key(&key) {
            kept.insert(key, value);
        } else {
            map.insert(key, value);
        }
    }
    if !kept.is_empty() {
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(kept));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future;
    use serde_json::json;

    #[test]
    fn test_collapses_singletons_and_hoists_attributes() {
        let parsed = json!([{
            "file": "nominations.xml",
            "xmlData": {
                "ElectionNominations": {
                    "Election": [{
                        "$": { "name": "European Parliament" },
                        "Constituency": [{ "$": { "seats": "6" }, "Candidate": ["A", "B"] }]
                    }]
                }
            }
        }]);
        let cleaned = clean_records(parsed);
        assert!(cleaned.is_array());

        let election = &cleaned[0]["xmlData"]["ElectionNominations"]["Election"];
        assert_eq!(election["name"], "European Parliament");
        assert!(election.get("$").is_none());
        assert_eq!(election["Constituency"]["seats"], "6");
        assert_eq!(election["Constituency"]["Candidate"], json!(["A", "B"]));
    }

    #[test]
    fn test_colliding_attributes_stay_put() {
        let cleaned = clean(json!({ "$": { "name": "attr", "id": "1" }, "name": ["child"] }));
        assert_eq!(cleaned, json!({ "$": { "name": "attr" }, "id": "1", "name": "child" }));
    }

    #[test]
    fn test_single_record_list_is_kept() {
        assert_eq!(clean_records(json!(["only"])), json!(["only"]));
        assert_eq!(clean(json!(["only"])), json!("only"));
    }

    #[tokio::test]
    async fn test_rejects_streams() {
        let input = future::ready(Ok(Payload::Streams(Vec::new()))).boxed();
        let ctx = Arc::new(ExecutionContext::default());
        let err = TransformCleanXml.call(Some(input), &ctx).unwrap().await.unwrap_err();
        assert_eq!(err.to_string(), "transform-clean-xml: expected parsed data, got unread streams");
    }
}
