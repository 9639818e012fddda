use crate::error::Result;
use serde_json::{json, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncReadExt};

/// An opened, not yet consumed byte source produced by an acquisition stage.
pub struct SourceStream {
    pub path: PathBuf,
    reader: Pin<Box<dyn AsyncRead + Send>>,
}

impl SourceStream {
    /// Open a file on disk as a stream.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = tokio::fs::File::open(&path).await?;
        Ok(Self::from_reader(path, file))
    }

    pub fn from_reader(path: impl Into<PathBuf>, reader: impl AsyncRead + Send + 'static) -> Self {
        Self {
            path: path.into(),
            reader: Box::pin(reader),
        }
    }

    /// Final path component, as reported in parsed records.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub async fn read_to_end(mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    pub async fn read_to_string(mut self) -> Result<String> {
        let mut buf = String::new();
        self.reader.read_to_string(&mut buf).await?;
        Ok(buf)
    }
}

impl fmt::Debug for SourceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceStream")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Data threaded from stage to stage.
#[derive(Debug)]
pub enum Payload {
    /// Raw sources straight out of acquisition.
    Streams(Vec<SourceStream>),
    /// Structured data produced by parsing or transformation.
    Value(Value),
}

impl Payload {
    pub fn is_streams(&self) -> bool {
        matches!(self, Payload::Streams(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Payload::Value(v) => Some(v),
            Payload::Streams(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Payload::Value(v) => Some(v),
            Payload::Streams(_) => None,
        }
    }

    /// JSON rendering; streams are listed by path since their content is unread.
    pub fn to_json(&self) -> Value {
        match self {
            Payload::Value(v) => v.clone(),
            Payload::Streams(streams) => Value::Array(
                streams
                    .iter()
                    .map(|s| json!({ "file": s.path.display().to_string() }))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}
