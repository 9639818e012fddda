use super::context::ExecutionContext;
use crate::error::{FerretError, Result};
use crate::types::Payload;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Fixed pipeline position a plugin participates in.
///
/// Declaration order is chain order: every acquisition stage runs before any
/// parsing stage, and so on down to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageRole {
    Acquire,
    Parse,
    Transform,
    Output,
}

impl StageRole {
    pub const ALL: [StageRole; 4] = [
        StageRole::Acquire,
        StageRole::Parse,
        StageRole::Transform,
        StageRole::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageRole::Acquire => "acquire",
            StageRole::Parse => "parse",
            StageRole::Transform => "transform",
            StageRole::Output => "output",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StageRole {
    type Err = FerretError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "acquire" => Ok(StageRole::Acquire),
            "parse" => Ok(StageRole::Parse),
            "transform" => Ok(StageRole::Transform),
            "output" => Ok(StageRole::Output),
            other => Err(FerretError::Config(format!("unknown stage role '{other}'"))),
        }
    }
}

/// A single-settlement value handed from one stage to the next.
pub type StageValue = BoxFuture<'static, Result<Payload>>;

/// The body of a plugin.
///
/// `call` runs synchronously while the chain is being built: it receives the
/// still-pending value of the previous stage (`None` for the first acquisition
/// stage) and must hand back its own pending value without awaiting anything.
/// Returning `Err` here aborts the whole run before later stages are invoked.
pub trait Stage: Send + Sync {
    fn call(&self, input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue>;
}

impl<F> Stage for F
where
    F: Fn(Option<StageValue>, &Arc<ExecutionContext>) -> Result<StageValue> + Send + Sync,
{
    fn call(&self, input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        self(input, ctx)
    }
}

/// Await the value handed in by the previous stage.
///
/// An upstream failure comes back untouched so downstream stages propagate it
/// with `?` and skip their own work.
pub async fn upstream(stage: &str, input: Option<StageValue>) -> Result<Payload> {
    match input {
        Some(value) => value.await,
        None => Err(FerretError::MissingInput {
            stage: stage.to_string(),
        }),
    }
}

/// Static declaration of a stage: role, intra-role priority and body.
#[derive(Clone)]
pub struct PluginDescriptor {
    role: Option<StageRole>,
    priority: i32,
    stage: Option<Arc<dyn Stage>>,
    flag_aliases: BTreeMap<char, String>,
}

impl PluginDescriptor {
    pub fn new(role: StageRole, stage: impl Stage + 'static) -> Self {
        Self {
            role: Some(role),
            priority: 0,
            stage: Some(Arc::new(stage)),
            flag_aliases: BTreeMap::new(),
        }
    }

    /// Build a descriptor from a closure; pins down the closure signature.
    pub fn from_fn<F>(role: StageRole, f: F) -> Self
    where
        F: Fn(Option<StageValue>, &Arc<ExecutionContext>) -> Result<StageValue>
            + Send
            + Sync
            + 'static,
    {
        Self::new(role, f)
    }

    /// Loader form: the role arrives as a raw tag and the body may be absent.
    ///
    /// Unknown or missing tags produce a descriptor with no role, which the
    /// classifier drops.
    pub fn from_parts(role_tag: Option<&str>, stage: Option<Arc<dyn Stage>>) -> Self {
        Self {
            role: role_tag.and_then(|tag| tag.parse().ok()),
            priority: 0,
            stage,
            flag_aliases: BTreeMap::new(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_flag_alias(mut self, short: char, long: impl Into<String>) -> Self {
        self.flag_aliases.insert(short, long.into());
        self
    }

    pub fn role(&self) -> Option<StageRole> {
        self.role
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn stage(&self) -> Option<&Arc<dyn Stage>> {
        self.stage.as_ref()
    }

    /// Short→long option aliases. Only the CLI reads these.
    pub fn flag_aliases(&self) -> &BTreeMap<char, String> {
        &self.flag_aliases
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("role", &self.role)
            .field("priority", &self.priority)
            .field("callable", &self.stage.is_some())
            .field("flag_aliases", &self.flag_aliases)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use serde_json::json;

    fn noop() -> impl Stage {
        |_input: Option<StageValue>, _ctx: &Arc<ExecutionContext>| -> Result<StageValue> {
            Ok(futures::future::ready(Ok(Payload::from(json!(null)))).boxed())
        }
    }

    #[test]
    fn test_role_round_trips_through_tags() {
        for role in StageRole::ALL {
            assert_eq!(role.as_str().parse::<StageRole>().unwrap(), role);
        }
        assert!("filter".parse::<StageRole>().is_err());
        assert!(" output ".parse::<StageRole>().is_err());
        assert!("Output".parse::<StageRole>().is_err());
    }

    #[test]
    fn test_role_order_matches_chain_order() {
        let mut roles = vec![StageRole::Output, StageRole::Acquire, StageRole::Transform, StageRole::Parse];
        roles.sort();
        assert_eq!(roles, StageRole::ALL.to_vec());
    }

    #[test]
    fn test_descriptor_defaults() {
        let d = PluginDescriptor::new(StageRole::Parse, noop());
        assert_eq!(d.role(), Some(StageRole::Parse));
        assert_eq!(d.priority(), 0);
        assert!(d.stage().is_some());
        assert!(d.flag_aliases().is_empty());
    }

    #[test]
    fn test_descriptor_from_unknown_tag_has_no_role() {
        let d = PluginDescriptor::from_parts(Some("filter"), None);
        assert_eq!(d.role(), None);
        let d = PluginDescriptor::from_parts(Some("OUTPUT"), None);
        assert_eq!(d.role(), None);
        let d = PluginDescriptor::from_parts(None, None);
        assert_eq!(d.role(), None);
        assert!(d.stage().is_none());
    }

    #[test]
    fn test_descriptor_builder() {
        let d = PluginDescriptor::new(StageRole::Acquire, noop())
            .with_priority(-3)
            .with_flag_alias('p', "local-path");
        assert_eq!(d.priority(), -3);
        assert_eq!(d.flag_aliases().get(&'p').map(String::as_str), Some("local-path"));
    }

    #[tokio::test]
    async fn test_upstream_without_input_fails() {
        let err = upstream("parse-xml", None).await.unwrap_err();
        assert_eq!(err.to_string(), "parse-xml: no input value from an upstream stage");
    }
}
