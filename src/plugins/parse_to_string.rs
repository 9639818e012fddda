use super::expect_streams;
use crate::constants::PARSE_TO_STRING;
use crate::error::Result;
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::{Payload, SourceStream};
use futures::future::{try_join_all, FutureExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Reads each acquired stream to a UTF-8 string.
pub struct ParseToString;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Parse, ParseToString)
}

impl Stage for ParseToString {
    fn call(&self, input: Option<StageValue>, _ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        Ok(parse(input).boxed())
    }
}

async fn parse(input: Option<StageValue>) -> Result<Payload> {
    let streams = expect_streams(PARSE_TO_STRING, upstream(PARSE_TO_STRING, input).await?)?;
    let texts = try_join_all(streams.into_iter().map(SourceStream::read_to_string)).await?;
    debug!("Read {} streams to strings", texts.len());
    Ok(Payload::Value(Value::Array(texts.into_iter().map(Value::String).collect())))
}
