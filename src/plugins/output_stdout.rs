use crate::constants::OUTPUT_STDOUT;
use crate::error::Result;
use crate::pipeline::{upstream, ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::Payload;
use futures::future::FutureExt;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Prints the upstream payload to stdout as one line of JSON.
pub struct OutputStdout;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Output, OutputStdout).with_priority(10)
}

impl Stage for OutputStdout {
    fn call(&self, input: Option<StageValue>, _ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        Ok(async move {
            let payload = upstream(OUTPUT_STDOUT, input).await?;
            let rendered = payload.to_json();
            write_json_line(&rendered, &mut tokio::io::stdout()).await?;
            Ok(payload)
        }
        .boxed())
    }
}

pub async fn write_json_line<W>(value: &Value, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    out.write_all(&line).await?;
    out.flush().await?;
    Ok(())
}
