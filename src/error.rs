use crate::pipeline::StageRole;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FerretError {
    #[error("No plugins with \"{0}\" type loaded.")]
    MissingRole(StageRole),

    #[error("plugin '{plugin}' has no callable stage function")]
    Uncallable { plugin: String },

    #[error("stage '{stage}' failed")]
    StageFailed {
        stage: String,
        #[source]
        source: Box<FerretError>,
    },

    #[error("stage '{stage}' panicked: {message}")]
    StagePanicked { stage: String, message: String },

    #[error("run panicked while settling: {message}")]
    RunPanicked { message: String },

    #[error("{stage}: no input value from an upstream stage")]
    MissingInput { stage: String },

    #[error("{plugin}: {message}")]
    Plugin { plugin: String, message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML document: {0}")]
    MalformedXml(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Glob traversal failed: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("FTP transfer failed: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FerretError {
    /// Failure reported by a named plugin through its returned value.
    pub fn plugin(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        FerretError::Plugin {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// True for failures detected before any stage executed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FerretError::MissingRole(_) | FerretError::Uncallable { .. } | FerretError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FerretError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_role_messages() {
        assert_eq!(
            FerretError::MissingRole(StageRole::Acquire).to_string(),
            "No plugins with \"acquire\" type loaded."
        );
        assert_eq!(
            FerretError::MissingRole(StageRole::Output).to_string(),
            "No plugins with \"output\" type loaded."
        );
    }

    #[test]
    fn test_stage_failed_keeps_cause() {
        let err = FerretError::StageFailed {
            stage: "acquire-local".to_string(),
            source: Box::new(FerretError::plugin("acquire-local", "boom")),
        };
        assert_eq!(err.to_string(), "stage 'acquire-local' failed");
        assert_eq!(err.source().unwrap().to_string(), "acquire-local: boom");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(FerretError::MissingRole(StageRole::Output).is_configuration());
        assert!(FerretError::Uncallable { plugin: "x".into() }.is_configuration());
        assert!(!FerretError::plugin("x", "y").is_configuration());
    }
}
