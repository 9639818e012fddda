use crate::constants::{LOCAL_SAVE_FLAG, OUTPUT_SAVE_LOCAL};
use crate::error::{FerretError, Result};
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::Payload;
use futures::future::FutureExt;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// Writes each item of the upstream payload to a file in the `local-save` directory.
///
/// Objects and arrays go to `<index>.json`, strings to `<index>.txt`. A payload
/// that is not a list is written as item `0`.
pub struct OutputSaveLocal;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Output, OutputSaveLocal).with_flag_alias('s', LOCAL_SAVE_FLAG)
}

impl Stage for OutputSaveLocal {
    fn call(&self, input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        let dir = ctx.flags().get_path(LOCAL_SAVE_FLAG);
        Ok(save(dir, input).boxed())
    }
}

async fn save(dir: Option<PathBuf>, input: Option<StageValue>) -> Result<Payload> {
    let payload = upstream(OUTPUT_SAVE_LOCAL, input).await?;
    let dir = dir.ok_or_else(|| {
        FerretError::plugin(
            OUTPUT_SAVE_LOCAL,
            "must pass a local directory path via the `local-save` flag",
        )
    })?;

    let files = render_files(&payload)?;
    fs::create_dir_all(&dir).await?;
    for (name, contents) in &files {
        fs::write(dir.join(name), contents).await?;
    }
    info!("Saved {} files to {}", files.len(), dir.display());
    Ok(payload)
}

/// File name and contents for every item of `payload`.
pub fn render_files(payload: &Payload) -> Result<Vec<(String, String)>> {
    let value = payload.as_value().ok_or_else(|| {
        FerretError::plugin(
            OUTPUT_SAVE_LOCAL,
            "data appears to be a stream and cannot be saved to disk",
        )
    })?;
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| render_item(index, item))
            .collect(),
        other => Ok(vec![render_item(0, other)?]),
    }
}

fn render_item(index: usize, item: &Value) -> Result<(String, String)> {
    match item {
        Value::Object(_) | Value::Array(_) => Ok((format!("{index}.json"), serde_json::to_string(item)?)),
        Value::String(text) => Ok((format!("{index}.txt"), text.clone())),
        _ => Err(FerretError::plugin(
            OUTPUT_SAVE_LOCAL,
            "data is neither an object nor a string",
        )),
    }
}
