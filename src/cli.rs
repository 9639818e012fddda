use crate::config::RunConfig;
use crate::constants::{
    ACQUIRE_FTP, ACQUIRE_LOCAL, FTP_HOSTNAME_FLAG, FTP_PASSWORD_FLAG, FTP_USER_FLAG, LOCAL_PATH_FLAG,
    LOCAL_SAVE_FLAG, OUTPUT_SAVE_LOCAL, OUTPUT_STDOUT, PARSE_TO_STRING, PARSE_XML, TRANSFORM_2016_UK_REFERENDUM,
    TRANSFORM_CLEAN_XML,
};
use crate::error::{FerretError, Result};
use crate::pipeline::{Flags, PluginRegistry};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "ferret")]
#[command(about = "Run a pipeline of acquire, parse, transform and output plugins")]
#[command(version)]
pub struct Cli {
    /// Run file listing plugins and flags (defaults to ./ferret.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load the acquire-ftp plugin
    #[arg(long)]
    pub acquire_ftp: bool,

    /// FTP user for acquire-ftp
    #[arg(short = 'u', long)]
    pub ftp_user: Option<String>,

    /// FTP password for acquire-ftp
    #[arg(long)]
    pub ftp_password: Option<String>,

    /// FTP host (and optional port) for acquire-ftp
    #[arg(long)]
    pub ftp_hostname: Option<String>,

    /// Load the acquire-local plugin
    #[arg(long)]
    pub acquire_local: bool,

    /// File name or glob for acquire-local
    #[arg(short = 'p', long)]
    pub local_path: Option<String>,

    /// Load the parse-to-string plugin
    #[arg(long)]
    pub parse_to_string: bool,

    /// Load the parse-xml plugin
    #[arg(long)]
    pub parse_xml: bool,

    /// Load the transform-clean-xml plugin
    #[arg(long)]
    pub transform_clean_xml: bool,

    /// Load the transform-2016-uk-referendum plugin
    #[arg(long)]
    pub transform_2016_uk_referendum: bool,

    /// Load the output-stdout plugin
    #[arg(long)]
    pub output_stdout: bool,

    /// Load the output-save-local plugin
    #[arg(long)]
    pub output_save_local: bool,

    /// Target directory for output-save-local
    #[arg(short = 's', long)]
    pub local_save: Option<String>,

    /// List the built-in plugins and exit
    #[arg(long)]
    pub list_plugins: bool,

    /// Print the stage order without running anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Plugins switched on from the command line.
    pub fn selected_plugins(&self) -> Vec<&'static str> {
        [
            (self.acquire_ftp, ACQUIRE_FTP),
            (self.acquire_local, ACQUIRE_LOCAL),
            (self.parse_to_string, PARSE_TO_STRING),
            (self.parse_xml, PARSE_XML),
            (self.transform_clean_xml, TRANSFORM_CLEAN_XML),
            (self.transform_2016_uk_referendum, TRANSFORM_2016_UK_REFERENDUM),
            (self.output_save_local, OUTPUT_SAVE_LOCAL),
            (self.output_stdout, OUTPUT_STDOUT),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    /// Options given on the command line, including the plugin switches.
    pub fn flags(&self) -> Flags {
        let mut flags: Flags = self.selected_plugins().into_iter().map(|name| (name, true)).collect();
        let options = [
            (LOCAL_PATH_FLAG, &self.local_path),
            (LOCAL_SAVE_FLAG, &self.local_save),
            (FTP_USER_FLAG, &self.ftp_user),
            (FTP_PASSWORD_FLAG, &self.ftp_password),
            (FTP_HOSTNAME_FLAG, &self.ftp_hostname),
        ];
        for (name, value) in options {
            if let Some(value) = value {
                flags.set(name, value.clone());
            }
        }
        flags
    }
}

/// What a run loads and the options it runs with.
#[derive(Debug)]
pub struct Invocation {
    pub registry: PluginRegistry,
    pub flags: Flags,
}

/// Combine the run file and the command line.
///
/// Plugins are the union of both sources, kept in catalog order; command line
/// options override run file options.
pub fn resolve(cli: &Cli, config: RunConfig, catalog: &PluginRegistry) -> Result<Invocation> {
    let mut names = config.plugins;
    names.extend(cli.selected_plugins().into_iter().map(String::from));

    if let Some(unknown) = names.iter().find(|name| !catalog.contains(name)) {
        return Err(FerretError::Config(format!(
            "Unknown plugin '{unknown}'; see --list-plugins"
        )));
    }

    let mut flags = config.flags;
    flags.merge(cli.flags());

    Ok(Invocation {
        registry: catalog.select(&names),
        flags,
    })
}

/// One line per catalog entry: name, role, priority and option aliases.
pub fn describe_catalog(catalog: &PluginRegistry) -> Vec<String> {
    catalog
        .iter()
        .map(|(name, descriptor)| {
            let role = descriptor.role().map(|r| r.as_str()).unwrap_or("-");
            let aliases = descriptor
                .flag_aliases()
                .iter()
                .map(|(short, long)| format!("-{short}/--{long}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{:<20} {:<9} {:>4}  {}", name, role, descriptor.priority(), aliases)
                .trim_end()
                .to_string()
        })
        .collect()
}
