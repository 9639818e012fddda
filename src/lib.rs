//! Ferret: a plugin pipeline orchestrator.
//!
//! Plugins are grouped into acquire, parse, transform and output stages and
//! chained into a single run; see [`pipeline`] for the core and [`plugins`] for
//! the built-in stages.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod plugins;
pub mod types;

pub use error::{FerretError, Result};
pub use pipeline::{ExecutionContext, Flags, Orchestrator, PluginDescriptor, PluginRegistry, Stage, StageRole, StageValue};
pub use types::{Payload, SourceStream};
