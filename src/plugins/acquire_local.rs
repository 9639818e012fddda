use crate::constants::{ACQUIRE_LOCAL, LOCAL_PATH_FLAG};
use crate::error::{FerretError, Result};
use crate::pipeline::{ExecutionContext, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::{Payload, SourceStream};
use futures::future::{try_join_all, FutureExt};
use regex::Regex;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument};

/// Opens every file matching the `local-path` file name or glob.
pub struct AcquireLocal;

pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Acquire, AcquireLocal).with_flag_alias('p', LOCAL_PATH_FLAG)
}

impl Stage for AcquireLocal {
    fn call(&self, _input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        let pattern = ctx.flags().get_str(LOCAL_PATH_FLAG).map(str::to_string);
        Ok(acquire(pattern).boxed())
    }
}

#[instrument]
async fn acquire(pattern: Option<String>) -> Result<Payload> {
    let pattern = pattern.ok_or_else(|| FerretError::plugin(ACQUIRE_LOCAL, "No `local-path` specified."))?;

    if !is_glob(&pattern) && !is_file(&pattern).await {
        return Err(FerretError::plugin(
            ACQUIRE_LOCAL,
            format!("'{pattern}' is a directory. Must specify a file or a glob."),
        ));
    }

    let paths = matching_files(&pattern)?;
    if paths.is_empty() {
        return Err(FerretError::plugin(ACQUIRE_LOCAL, "No files matched."));
    }
    debug!("Matched {} files", paths.len());

    let streams = try_join_all(paths.into_iter().map(SourceStream::open)).await?;
    info!("Acquired {} local files", streams.len());
    Ok(Payload::Streams(streams))
}

fn is_glob(pattern: &str) -> bool {
    static GLOB_SYNTAX: OnceLock<Regex> = OnceLock::new();
    GLOB_SYNTAX
        .get_or_init(|| Regex::new(r"[*?\[\]{}]|[!@+]\(").expect("glob syntax pattern is valid"))
        .is_match(pattern)
}

async fn is_file(path: &str) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Regular files matching `pattern`, in the order the glob yields them.
fn matching_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
