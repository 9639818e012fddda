//! Plugin pipeline core.
//!
//! Plugins declare a [`StageRole`] and a priority. For each run the
//! [`Orchestrator`] buckets them by role, orders each bucket by priority,
//! concatenates the buckets (acquire → parse → transform → output) and calls
//! every stage once, handing each the pending [`StageValue`] of the one before.
//!
//! ```ignore
//! let registry = PluginRegistry::new()
//!     .with("acquire-local", plugins::acquire_local::descriptor())
//!     .with("output-stdout", plugins::output_stdout::descriptor());
//!
//! let ctx = ExecutionContext::new(Flags::new().with("local-path", "data/*.xml"));
//! let payload = Orchestrator::new(registry).run(ctx).await?;
//! ```

pub mod classify;
pub mod compose;
pub mod context;
pub mod descriptor;
pub mod orchestrator;
pub mod registry;

pub use classify::{classify, sequence, OrderedStageList, PlannedStage, RoleBuckets, StageEntry};
pub use compose::{compose, ComposedChain};
pub use context::{ExecutionContext, Flags};
pub use descriptor::{upstream, PluginDescriptor, Stage, StageRole, StageValue};
pub use orchestrator::{validate, Orchestrator};
pub use registry::PluginRegistry;
