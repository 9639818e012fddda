use ferret::pipeline::{upstream, ExecutionContext, Flags, Orchestrator, PluginDescriptor, PluginRegistry, StageRole, StageValue};
use ferret::{FerretError, Payload};
use futures::future::{self, FutureExt};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type CallLog = Arc<Mutex<Vec<String>>>;

/// Address of the boxed future, stable across moves of the box.
fn address(value: &StageValue) -> usize {
    &**value as *const _ as *const () as usize
}

fn constant(value: Value) -> PluginDescriptor {
    let value = Arc::new(value);
    PluginDescriptor::from_fn(StageRole::Acquire, move |_input, _ctx| {
        Ok(future::ready(Ok(Payload::from((*value).clone()))).boxed())
    })
}

fn identity(role: StageRole) -> PluginDescriptor {
    PluginDescriptor::from_fn(role, |input, _ctx| Ok(async move { upstream("identity", input).await }.boxed()))
}

/// Records its name, whether it got an input, and the address of that input and its own output.
fn tracer(log: &CallLog, name: &'static str, role: StageRole, priority: i32) -> PluginDescriptor {
    let log = Arc::clone(log);
    PluginDescriptor::from_fn(role, move |input, _ctx| {
        let received = input.as_ref().map(address);
        let output: StageValue = async move {
            let mut seen = match input {
                Some(input) => input.await?.into_value().unwrap_or(Value::Null),
                None => json!([]),
            };
            if let Some(items) = seen.as_array_mut() {
                items.push(json!(name));
            }
            Ok::<_, FerretError>(Payload::from(seen))
        }
        .boxed();
        log.lock().unwrap().push(format!(
            "{name} in={} out={}",
            received.map(|a| a.to_string()).unwrap_or_else(|| "none".to_string()),
            address(&output)
        ));
        Ok(output)
    })
    .with_priority(priority)
}

fn entries(log: &CallLog) -> Vec<(String, String, String)> {
    log.lock()
        .unwrap()
        .iter()
        .map(|line| {
            let mut parts = line.split(' ');
            let name = parts.next().unwrap().to_string();
            let input = parts.next().unwrap().trim_start_matches("in=").to_string();
            let output = parts.next().unwrap().trim_start_matches("out=").to_string();
            (name, input, output)
        })
        .collect()
}

#[tokio::test]
async fn run_without_acquire_names_acquire() {
    let registry = PluginRegistry::new()
        .with("out-a", identity(StageRole::Output))
        .with("out-b", identity(StageRole::Output))
        .with("parse", identity(StageRole::Parse));
    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert!(matches!(err, FerretError::MissingRole(StageRole::Acquire)));
    assert_eq!(err.to_string(), "No plugins with \"acquire\" type loaded.");
}

#[tokio::test]
async fn run_without_output_names_output() {
    let registry = PluginRegistry::new()
        .with("acq-a", constant(json!(1)))
        .with("acq-b", constant(json!(2)));
    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "No plugins with \"output\" type loaded.");
}

#[tokio::test]
async fn lower_priority_runs_first_and_hands_over_its_value() {
    let log: CallLog = Arc::default();
    let registry = PluginRegistry::new()
        .with("five", tracer(&log, "five", StageRole::Acquire, 5))
        .with("zero", tracer(&log, "zero", StageRole::Acquire, 0))
        .with("out", identity(StageRole::Output));

    let payload = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap();
    assert_eq!(payload.into_value().unwrap(), json!(["zero", "five"]));

    let calls = entries(&log);
    assert_eq!(calls[0].0, "zero");
    assert_eq!(calls[0].1, "none");
    assert_eq!(calls[1].0, "five");
    assert_eq!(calls[1].1, calls[0].2);
}

#[tokio::test]
async fn equal_priorities_keep_registration_order() {
    let log: CallLog = Arc::default();
    let registry = PluginRegistry::new()
        .with("out", identity(StageRole::Output))
        .with("A", tracer(&log, "A", StageRole::Transform, 0))
        .with("acq", constant(json!([])))
        .with("B", tracer(&log, "B", StageRole::Transform, 0));

    let payload = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap();
    assert_eq!(payload.into_value().unwrap(), json!(["A", "B"]));

    let calls = entries(&log);
    assert_eq!(calls[0].0, "A");
    assert_eq!(calls[1].0, "B");
    assert_eq!(calls[1].1, calls[0].2);
}

#[tokio::test]
async fn identity_output_settles_with_acquired_payload() {
    let registry = PluginRegistry::new()
        .with("acq", constant(json!({ "x": [1, 2, 3] })))
        .with("out", identity(StageRole::Output));
    let payload = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap();
    assert_eq!(payload.into_value().unwrap(), json!({ "x": [1, 2, 3] }));
}

#[tokio::test]
async fn rejected_parse_fails_the_run_after_every_stage_is_called() {
    let log: CallLog = Arc::default();
    let registry = PluginRegistry::new()
        .with("acq", constant(json!([])))
        .with(
            "parse",
            PluginDescriptor::from_fn(StageRole::Parse, |_input, _ctx| {
                Ok(future::ready(Err(FerretError::plugin("parse", "bad document"))).boxed())
            }),
        )
        .with("xf", tracer(&log, "xf", StageRole::Transform, 0))
        .with("out", tracer(&log, "out", StageRole::Output, 0));

    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "parse: bad document");

    let names: Vec<_> = entries(&log).into_iter().map(|(name, _, _)| name).collect();
    assert_eq!(names, vec!["xf", "out"]);
}

#[tokio::test]
async fn throwing_stage_settles_as_failure() {
    let registry = PluginRegistry::new()
        .with("acq", constant(json!([])))
        .with(
            "parse",
            PluginDescriptor::from_fn(StageRole::Parse, |_input, _ctx| {
                Err(FerretError::plugin("parse", "refused synchronously"))
            }),
        )
        .with("out", identity(StageRole::Output));
    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "stage 'parse' failed");
    assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "parse: refused synchronously");

    let registry = PluginRegistry::new()
        .with("acq", PluginDescriptor::from_fn(StageRole::Acquire, |_input, _ctx| panic!("disk on fire")))
        .with("out", identity(StageRole::Output));
    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert!(matches!(err, FerretError::StagePanicked { ref message, .. } if message == "disk on fire"));
}

async fn unreadable() -> ferret::Result<Payload> {
    panic!("source went away")
}

#[tokio::test]
async fn panic_inside_a_pending_stage_settles_the_run() {
    let log: CallLog = Arc::default();
    let registry = PluginRegistry::new()
        .with("acq", PluginDescriptor::from_fn(StageRole::Acquire, |_input, _ctx| Ok(unreadable().boxed())))
        .with("xf", tracer(&log, "xf", StageRole::Transform, 0))
        .with("out", identity(StageRole::Output));

    let run = Orchestrator::new(registry).run(ExecutionContext::default());
    let settled = tokio::spawn(run).await.expect("run future must not panic");
    let err = settled.unwrap_err();
    assert!(matches!(err, FerretError::RunPanicked { ref message } if message == "source went away"));
    assert_eq!(entries(&log).len(), 1);
}

#[tokio::test]
async fn every_stage_sees_the_same_context() {
    let seen: Arc<Mutex<Vec<Arc<ExecutionContext>>>> = Arc::default();
    let capture = |role: StageRole| {
        let seen = Arc::clone(&seen);
        PluginDescriptor::from_fn(role, move |input, ctx| {
            seen.lock().unwrap().push(Arc::clone(ctx));
            Ok(async move {
                match input {
                    Some(input) => input.await,
                    None => Ok(Payload::from(json!(null))),
                }
            }
            .boxed())
        })
    };
    let registry = PluginRegistry::new()
        .with("acq", capture(StageRole::Acquire))
        .with("parse", capture(StageRole::Parse))
        .with("out", capture(StageRole::Output));

    let ctx = Arc::new(ExecutionContext::new(Flags::new().with("local-path", "a.xml")));
    Orchestrator::new(registry).run(Arc::clone(&ctx)).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|c| Arc::ptr_eq(c, &ctx)));
}

#[tokio::test]
async fn repeated_runs_use_their_own_context() {
    let reader = PluginDescriptor::from_fn(StageRole::Acquire, |_input, ctx| {
        let path = ctx.flags().get_str("local-path").map(str::to_string);
        Ok(future::ready(Ok(Payload::from(json!(path)))).boxed())
    });
    let registry = PluginRegistry::new()
        .with("acq", reader)
        .with("out", identity(StageRole::Output));
    let orchestrator = Orchestrator::new(registry);

    let first = orchestrator
        .run(ExecutionContext::new(Flags::new().with("local-path", "first.xml")))
        .await
        .unwrap();
    let second = orchestrator.run(ExecutionContext::new(Flags::new())).await.unwrap();

    assert_eq!(first.into_value().unwrap(), json!("first.xml"));
    assert_eq!(second.into_value().unwrap(), json!(null));
}

#[tokio::test]
async fn uncallable_descriptor_fails_before_any_stage_runs() {
    let log: CallLog = Arc::default();
    let registry = PluginRegistry::new()
        .with("acq", tracer(&log, "acq", StageRole::Acquire, 0))
        .with("broken", PluginDescriptor::from_parts(Some("transform"), None))
        .with("out", identity(StageRole::Output));
    let err = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap_err();
    assert!(matches!(err, FerretError::Uncallable { ref plugin } if plugin == "broken"));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn descriptors_without_a_role_are_ignored() {
    let registry = PluginRegistry::new()
        .with("acq", constant(json!("kept")))
        .with("mystery", PluginDescriptor::from_parts(Some("publish"), None))
        .with("untagged", PluginDescriptor::from_parts(None, None))
        .with("out", identity(StageRole::Output));
    let payload = Orchestrator::new(registry).run(ExecutionContext::default()).await.unwrap();
    assert_eq!(payload.into_value().unwrap(), json!("kept"));
}
