use super::classify::{OrderedStageList, PlannedStage};
use super::compose::{compose, panic_message, ComposedChain};
use super::context::ExecutionContext;
use super::descriptor::{StageRole, StageValue};
use super::registry::PluginRegistry;
use crate::error::{FerretError, Result};
use futures::future::{self, FutureExt};
use metrics::counter;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Runs a registry of plugins as a single chain.
pub struct Orchestrator {
    registry: PluginRegistry,
}

impl Orchestrator {
    pub fn new(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Classify, sequence, validate and bind the registry for one run.
    pub fn chain(&self) -> Result<ComposedChain> {
        let ordered = OrderedStageList::from_registry(&self.registry);
        validate(&ordered)?;
        compose(&ordered)
    }

    /// The stage order a run would use, without invoking anything.
    pub fn plan(&self) -> Result<Vec<PlannedStage>> {
        self.chain().map(|chain| chain.plan())
    }

    /// Start a run.
    ///
    /// Composition and every stage invocation happen before this returns; the
    /// returned value settles once, to the last output stage's payload or to
    /// the first failure anywhere in the chain. Errors never escape as anything
    /// but that settled failure, including panics raised while polling a stage.
    #[instrument(skip_all, fields(run_id = tracing::field::Empty))]
    pub fn run(&self, ctx: impl Into<Arc<ExecutionContext>>) -> StageValue {
        let ctx: Arc<ExecutionContext> = ctx.into();
        let run_id = ctx.run_id();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));
        info!("Starting run with {} registered plugins", self.registry.len());

        match self.chain().and_then(|chain| chain.invoke(&ctx)) {
            Ok(value) => async move {
                let result = match AssertUnwindSafe(value).catch_unwind().await {
                    Ok(result) => result,
                    Err(payload) => Err(FerretError::RunPanicked {
                        message: panic_message(payload.as_ref()),
                    }),
                };
                match &result {
                    Ok(_) => {
                        info!(%run_id, "Run completed");
                        counter!("ferret_runs_total", "outcome" => "success").increment(1);
                    }
                    Err(e) => {
                        error!(%run_id, "Run failed: {}", e);
                        counter!("ferret_runs_total", "outcome" => "failure").increment(1);
                    }
                }
                result
            }
            .boxed(),
            Err(e) => {
                error!(%run_id, "Run aborted before completion: {}", e);
                counter!("ferret_runs_total", "outcome" => "aborted").increment(1);
                future::ready(Err(e)).boxed()
            }
        }
    }
}

/// A run needs at least one acquisition and one output stage.
pub fn validate(ordered: &OrderedStageList<'_>) -> Result<()> {
    for role in [StageRole::Acquire, StageRole::Output] {
        if ordered.count(role) == 0 {
            return Err(FerretError::MissingRole(role));
        }
    }
    Ok(())
}
