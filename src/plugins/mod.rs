//! Built-in plugins.
//!
//! Each module exposes a `descriptor()` for its plugin; [`catalog`] registers
//! them all under their CLI names.

pub mod acquire_ftp;
pub mod acquire_local;
pub mod output_save_local;
pub mod output_stdout;
pub mod parse_to_string;
pub mod parse_xml;
pub mod referendum_areas;
pub mod transform_2016_uk_referendum;
pub mod transform_clean_xml;

use crate::constants::{
    ACQUIRE_FTP, ACQUIRE_LOCAL, OUTPUT_SAVE_LOCAL, OUTPUT_STDOUT, PARSE_TO_STRING, PARSE_XML,
    TRANSFORM_2016_UK_REFERENDUM, TRANSFORM_CLEAN_XML,
};
use crate::error::{FerretError, Result};
use crate::pipeline::PluginRegistry;
use crate::types::{Payload, SourceStream};

/// Every built-in plugin, keyed by name.
pub fn catalog() -> PluginRegistry {
    PluginRegistry::new()
        .with(ACQUIRE_FTP, acquire_ftp::descriptor())
        .with(ACQUIRE_LOCAL, acquire_local::descriptor())
        .with(PARSE_TO_STRING, parse_to_string::descriptor())
        .with(PARSE_XML, parse_xml::descriptor())
        .with(TRANSFORM_CLEAN_XML, transform_clean_xml::descriptor())
        .with(TRANSFORM_2016_UK_REFERENDUM, transform_2016_uk_referendum::descriptor())
        .with(OUTPUT_SAVE_LOCAL, output_save_local::descriptor())
        .with(OUTPUT_STDOUT, output_stdout::descriptor())
}

pub(crate) fn expect_streams(plugin: &str, payload: Payload) -> Result<Vec<SourceStream>> {
    match payload {
        Payload::Streams(streams) => Ok(streams),
        Payload::Value(_) => Err(FerretError::plugin(
            plugin,
            "expected a list of streams from an acquisition stage",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::get_builtin_plugins;
    use crate::pipeline::StageRole;

    #[test]
    fn test_catalog_matches_builtin_names() {
        let catalog = catalog();
        assert_eq!(catalog.names().collect::<Vec<_>>(), get_builtin_plugins());
    }

    #[test]
    fn test_catalog_roles_and_aliases() {
        let catalog = catalog();
        let role = |name: &str| catalog.get(name).and_then(|d| d.role());
        assert_eq!(role(ACQUIRE_LOCAL), Some(StageRole::Acquire));
        assert_eq!(role(PARSE_XML), Some(StageRole::Parse));
        assert_eq!(role(TRANSFORM_CLEAN_XML), Some(StageRole::Transform));
        assert_eq!(role(TRANSFORM_2016_UK_REFERENDUM), Some(StageRole::Transform));
        assert_eq!(role(ACQUIRE_FTP), Some(StageRole::Acquire));
        assert_eq!(role(OUTPUT_STDOUT), Some(StageRole::Output));

        let aliases = catalog.get(OUTPUT_SAVE_LOCAL).unwrap().flag_aliases();
        assert_eq!(aliases.get(&'s').map(String::as_str), Some("local-save"));

        let ftp = catalog.get(ACQUIRE_FTP).unwrap().flag_aliases();
        assert_eq!(ftp.get(&'u').map(String::as_str), Some("ftp-user"));
        assert_eq!(ftp.get(&'p').map(String::as_str), Some("ftp-password"));
        assert_eq!(ftp.get(&'h').map(String::as_str), Some("ftp-hostname"));
    }
}
