use crate::constants::{
    DEFAULT_CONFIG_FILE, FTP_HOSTNAME_ENV, FTP_HOSTNAME_FLAG, FTP_PASSWORD_ENV, FTP_PASSWORD_FLAG, FTP_USER_ENV,
    FTP_USER_FLAG, LOCAL_PATH_ENV, LOCAL_PATH_FLAG, LOCAL_SAVE_ENV, LOCAL_SAVE_FLAG,
};
use crate::error::{FerretError, Result};
use crate::pipeline::Flags;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A run file: which plugins to load and the options to hand them.
///
/// ```toml
/// plugins = ["acquire-local", "parse-xml", "output-stdout"]
///
/// [flags]
/// local-path = "data/*.xml"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub plugins: Vec<String>,
    pub flags: Flags,
}

impl RunConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| FerretError::Config(format!("Failed to read config file '{}': {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| FerretError::Config(format!("Invalid config file '{}': {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `explicit` if given, else `ferret.toml` in the working directory
    /// when present, else an empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

const ENV_DEFAULTS: [(&str, &str); 5] = [
    (LOCAL_PATH_FLAG, LOCAL_PATH_ENV),
    (LOCAL_SAVE_FLAG, LOCAL_SAVE_ENV),
    (FTP_USER_FLAG, FTP_USER_ENV),
    (FTP_PASSWORD_FLAG, FTP_PASSWORD_ENV),
    (FTP_HOSTNAME_FLAG, FTP_HOSTNAME_ENV),
];

/// Fill path and FTP options from the environment when nothing else set them.
pub fn apply_env_defaults(flags: &mut Flags) {
    for (flag, var) in ENV_DEFAULTS {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                flags.set_default(flag, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_run_file() {
        let config = RunConfig::parse(
            r#"
            plugins = ["acquire-local", "output-stdout"]

            [flags]
            local-path = "data/*.xml"
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.plugins, vec!["acquire-local", "output-stdout"]);
        assert_eq!(config.flags.get_str("local-path"), Some("data/*.xml"));
        assert!(config.flags.get_bool("verbose"));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(RunConfig::parse("").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(matches!(RunConfig::parse("plugin = []"), Err(FerretError::Toml(_))));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = RunConfig::load(&missing).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("absent.toml"));

        let file = dir.path().join("run.toml");
        fs::write(&file, "plugins = [\"parse-xml\"]").unwrap();
        assert_eq!(RunConfig::discover(Some(&file)).unwrap().plugins, vec!["parse-xml"]);
    }

    #[test]
    fn test_env_defaults_do_not_override() {
        std::env::set_var(LOCAL_SAVE_ENV, "/tmp/from-env");
        let mut flags = Flags::new().with(LOCAL_PATH_FLAG, "given.xml");
        apply_env_defaults(&mut flags);
        assert_eq!(flags.get_str(LOCAL_PATH_FLAG), Some("given.xml"));
        assert_eq!(flags.get_str(LOCAL_SAVE_FLAG), Some("/tmp/from-env"));
        std::env::remove_var(LOCAL_SAVE_ENV);
    }

    #[test]
    fn test_ftp_credentials_from_env() {
        std::env::set_var(FTP_HOSTNAME_ENV, "ftp.example.net");
        std::env::set_var(FTP_USER_ENV, "results");
        let mut flags = Flags::new().with(FTP_USER_FLAG, "given");
        apply_env_defaults(&mut flags);
        assert_eq!(flags.get_str(FTP_HOSTNAME_FLAG), Some("ftp.example.net"));
        assert_eq!(flags.get_str(FTP_USER_FLAG), Some("given"));
        std::env::remove_var(FTP_HOSTNAME_ENV);
        std::env::remove_var(FTP_USER_ENV);
    }
}
