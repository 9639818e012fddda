use super::classify::{OrderedStageList, PlannedStage};
use super::context::ExecutionContext;
use super::descriptor::{Stage, StageRole, StageValue};
use crate::error::{FerretError, Result};
use metrics::counter;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::debug;

struct ChainLink {
    name: String,
    role: StageRole,
    priority: i32,
    stage: Arc<dyn Stage>,
}

/// An ordered stage list bound to its stage bodies.
///
/// Invoking the chain calls every stage immediately, one after another, each
/// receiving the unsettled value returned by its predecessor. Nothing is
/// awaited here; the stages attach their own continuations.
pub struct ComposedChain {
    links: Vec<ChainLink>,
}

/// Bind each entry of `ordered` to its stage body.
///
/// Fails on the first descriptor that has no callable body.
pub fn compose(ordered: &OrderedStageList<'_>) -> Result<ComposedChain> {
    let mut links = Vec::with_capacity(ordered.len());
    for entry in ordered.entries() {
        let (Some(role), Some(stage)) = (entry.descriptor.role(), entry.descriptor.stage()) else {
            return Err(FerretError::Uncallable {
                plugin: entry.name.to_string(),
            });
        };
        links.push(ChainLink {
            name: entry.name.to_string(),
            role,
            priority: entry.priority(),
            stage: Arc::clone(stage),
        });
    }
    Ok(ComposedChain { links })
}

impl ComposedChain {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn plan(&self) -> Vec<PlannedStage> {
        self.links
            .iter()
            .map(|link| PlannedStage {
                name: link.name.clone(),
                role: link.role,
                priority: link.priority,
            })
            .collect()
    }

    /// Thread one run through the chain and return the last stage's value.
    ///
    /// A stage that errors or panics while being called stops the fold; the
    /// stages after it are not called.
    pub fn invoke(&self, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        let mut value: Option<StageValue> = None;
        for (position, link) in self.links.iter().enumerate() {
            debug!(
                run_id = %ctx.run_id(),
                stage = %link.name,
                role = %link.role,
                priority = link.priority,
                "Invoking stage {}/{}",
                position + 1,
                self.links.len()
            );
            counter!("ferret_stage_invocations_total", "role" => link.role.as_str()).increment(1);
            value = Some(call_link(link, value.take(), ctx)?);
        }
        value.ok_or_else(|| FerretError::Config("cannot invoke an empty stage chain".to_string()))
    }
}

fn call_link(link: &ChainLink, input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
    match panic::catch_unwind(AssertUnwindSafe(|| link.stage.call(input, ctx))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(FerretError::StageFailed {
            stage: link.name.clone(),
            source: Box::new(source),
        }),
        Err(payload) => Err(FerretError::StagePanicked {
            stage: link.name.clone(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{upstream, PluginDescriptor, PluginRegistry};
    use crate::types::Payload;
    use futures::FutureExt;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    fn recording(log: &Arc<Mutex<Vec<String>>>, name: &'static str, role: StageRole) -> PluginDescriptor {
        let log = Arc::clone(log);
        PluginDescriptor::from_fn(role, move |input, _ctx| {
            log.lock().unwrap().push(format!("{name}:{}", input.is_some()));
            Ok(async move {
                let mut seen = match input {
                    Some(input) => input.await?.into_value().unwrap_or(Value::Null),
                    None => json!([]),
                };
                if let Some(arr) = seen.as_array_mut() {
                    arr.push(json!(name));
                }
                Ok::<_, FerretError>(Payload::from(seen))
            }
            .boxed())
        })
    }

    #[tokio::test]
    async fn test_invoke_threads_values_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = PluginRegistry::new()
            .with("out", recording(&log, "out", StageRole::Output))
            .with("acq", recording(&log, "acq", StageRole::Acquire))
            .with("xf", recording(&log, "xf", StageRole::Transform));
        let ordered = OrderedStageList::from_registry(&registry);
        let chain = compose(&ordered).unwrap();
        let ctx = Arc::new(ExecutionContext::default());

        let value = chain.invoke(&ctx).unwrap();
        // every stage is called before anything settles
        assert_eq!(*log.lock().unwrap(), vec!["acq:false", "xf:true", "out:true"]);

        let payload = value.await.unwrap();
        assert_eq!(payload.into_value().unwrap(), json!(["acq", "xf", "out"]));
    }

    #[test]
    fn test_compose_rejects_uncallable_descriptor() {
        let registry = PluginRegistry::new()
            .with("acq", PluginDescriptor::from_parts(Some("acquire"), None))
            .with("out", PluginDescriptor::from_parts(Some("output"), None));
        let ordered = OrderedStageList::from_registry(&registry);
        let err = compose(&ordered).err().unwrap();
        assert!(matches!(err, FerretError::Uncallable { ref plugin } if plugin == "acq"));
    }

    #[test]
    fn test_sync_error_stops_the_fold() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = PluginRegistry::new()
            .with(
                "acq",
                PluginDescriptor::from_fn(StageRole::Acquire, |_input, _ctx| {
                    Err(FerretError::plugin("acq", "refused"))
                }),
            )
            .with("out", recording(&log, "out", StageRole::Output));
        let chain = compose(&OrderedStageList::from_registry(&registry)).unwrap();

        let err = chain.invoke(&Arc::new(ExecutionContext::default())).err().unwrap();
        assert_eq!(err.to_string(), "stage 'acq' failed");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "acq: refused");
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_panicking_stage_becomes_error() {
        let registry = PluginRegistry::new().with(
            "acq",
            PluginDescriptor::from_fn(StageRole::Acquire, |_input, _ctx| panic!("no disk")),
        );
        let chain = compose(&OrderedStageList::from_registry(&registry)).unwrap();

        let err = chain.invoke(&Arc::new(ExecutionContext::default())).err().unwrap();
        assert!(matches!(
            err,
            FerretError::StagePanicked { ref stage, ref message } if stage == "acq" && message == "no disk"
        ));
    }

    #[tokio::test]
    async fn test_plan_lists_links() {
        let registry = PluginRegistry::new().with(
            "acq",
            PluginDescriptor::from_fn(StageRole::Acquire, |input, _ctx| {
                Ok(async move { upstream("acq", input).await }.boxed())
            })
            .with_priority(3),
        );
        let chain = compose(&OrderedStageList::from_registry(&registry)).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(
            chain.plan(),
            vec![PlannedStage { name: "acq".into(), role: StageRole::Acquire, priority: 3 }]
        );

        let err = chain.invoke(&Arc::new(ExecutionContext::default())).unwrap().await.unwrap_err();
        assert!(matches!(err, FerretError::MissingInput { .. }));
    }
}
