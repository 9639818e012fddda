/// Plugin and flag name constants shared by the catalog, the plugins and the CLI.

// Built-in plugin names (also the CLI switch names)
pub const ACQUIRE_FTP: &str = "acquire-ftp";
pub const ACQUIRE_LOCAL: &str = "acquire-local";
pub const PARSE_TO_STRING: &str = "parse-to-string";
pub const PARSE_XML: &str = "parse-xml";
pub const TRANSFORM_CLEAN_XML: &str = "transform-clean-xml";
pub const TRANSFORM_2016_UK_REFERENDUM: &str = "transform-2016-uk-referendum";
pub const OUTPUT_SAVE_LOCAL: &str = "output-save-local";
pub const OUTPUT_STDOUT: &str = "output-stdout";

// Option names read by plugins from the execution context
pub const LOCAL_PATH_FLAG: &str = "local-path";
pub const LOCAL_SAVE_FLAG: &str = "local-save";
pub const FTP_USER_FLAG: &str = "ftp-user";
pub const FTP_PASSWORD_FLAG: &str = "ftp-password";
pub const FTP_HOSTNAME_FLAG: &str = "ftp-hostname";

// Environment fallbacks for the options above
pub const LOCAL_PATH_ENV: &str = "FERRET_LOCAL_PATH";
pub const LOCAL_SAVE_ENV: &str = "FERRET_LOCAL_SAVE";
pub const FTP_USER_ENV: &str = "FTP_USERNAME";
pub const FTP_PASSWORD_ENV: &str = "FTP_PASSWORD";
pub const FTP_HOSTNAME_ENV: &str = "FTP_HOSTNAME";

// FTP connection defaults
pub const DEFAULT_FTP_HOSTNAME: &str = "ftpout.pa.press.net";
pub const DEFAULT_FTP_PORT: u16 = 21;
pub const DEFAULT_FTP_USER: &str = "anonymous";
pub const DEFAULT_FTP_PASSWORD: &str = "anonymous@";

// Logging
pub const LOG_DIR_ENV: &str = "FERRET_LOG_DIR";
pub const DEFAULT_LOG_DIRECTIVE: &str = "ferret=info";

/// Run file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ferret.toml";

/// Names of every built-in plugin, in catalog order.
pub fn get_builtin_plugins() -> Vec<&'static str> {
    vec![
        ACQUIRE_FTP,
        ACQUIRE_LOCAL,
        PARSE_TO_STRING,
        PARSE_XML,
        TRANSFORM_CLEAN_XML,
        TRANSFORM_2016_UK_REFERENDUM,
        OUTPUT_SAVE_LOCAL,
        OUTPUT_STDOUT,
    ]
}
