//! Role classification and intra-role sequencing.
//!
//! A registry is split into four role buckets, each bucket is sorted by
//! ascending priority (stable, so registration order breaks ties), and the
//! buckets are concatenated in fixed role order into an [`OrderedStageList`].

use super::descriptor::{PluginDescriptor, StageRole};
use super::registry::PluginRegistry;
use serde::Serialize;
use std::fmt;

/// One registered plugin, borrowed from the registry.
#[derive(Debug, Clone, Copy)]
pub struct StageEntry<'a> {
    pub name: &'a str,
    pub descriptor: &'a PluginDescriptor,
}

impl StageEntry<'_> {
    pub fn priority(&self) -> i32 {
        self.descriptor.priority()
    }
}

/// Descriptors grouped by role, in fixed role order.
#[derive(Debug, Default)]
pub struct RoleBuckets<'a> {
    buckets: [Vec<StageEntry<'a>>; 4],
}

impl<'a> RoleBuckets<'a> {
    pub fn bucket(&self, role: StageRole) -> &[StageEntry<'a>] {
        &self.buckets[role.index()]
    }

    /// Sort every bucket by ascending priority.
    pub fn sequenced(mut self) -> Self {
        for bucket in self.buckets.iter_mut() {
            sequence(bucket);
        }
        self
    }

    /// Concatenate the buckets: acquire, parse, transform, output.
    pub fn into_ordered(self) -> OrderedStageList<'a> {
        let mut counts = [0usize; 4];
        let mut entries = Vec::new();
        for (index, bucket) in self.buckets.into_iter().enumerate() {
            counts[index] = bucket.len();
            entries.extend(bucket);
        }
        OrderedStageList { entries, counts }
    }
}

/// Partition a registry into role buckets.
///
/// Descriptors without a recognised role are left out.
pub fn classify(registry: &PluginRegistry) -> RoleBuckets<'_> {
    let mut buckets = RoleBuckets::default();
    for (name, descriptor) in registry.iter() {
        if let Some(role) = descriptor.role() {
            buckets.buckets[role.index()].push(StageEntry { name, descriptor });
        }
    }
    buckets
}

/// Stable ascending sort on priority.
pub fn sequence(bucket: &mut [StageEntry<'_>]) {
    bucket.sort_by_key(StageEntry::priority);
}

/// The per-run sequence of stages, derived from a registry and never stored.
#[derive(Debug)]
pub struct OrderedStageList<'a> {
    entries: Vec<StageEntry<'a>>,
    counts: [usize; 4],
}

impl<'a> OrderedStageList<'a> {
    pub fn from_registry(registry: &'a PluginRegistry) -> Self {
        classify(registry).sequenced().into_ordered()
    }

    pub fn count(&self, role: StageRole) -> usize {
        self.counts[role.index()]
    }

    pub fn entries(&self) -> &[StageEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn plan(&self) -> Vec<PlannedStage> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.descriptor.role().map(|role| PlannedStage {
                    name: e.name.to_string(),
                    role,
                    priority: e.priority(),
                })
            })
            .collect()
    }
}

/// Owned summary of one position in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStage {
    pub name: String,
    pub role: StageRole,
    pub priority: i32,
}

impl fmt::Display for PlannedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9} {:>4}  {}", self.role, self.priority, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbound(role: Option<&str>, priority: i32) -> PluginDescriptor {
        PluginDescriptor::from_parts(role, None).with_priority(priority)
    }

    fn names(list: &OrderedStageList<'_>) -> Vec<String> {
        list.entries().iter().map(|e| e.name.to_string()).collect()
    }

    #[test]
    fn test_classify_buckets_by_role() {
        let registry = PluginRegistry::new()
            .with("out", unbound(Some("output"), 0))
            .with("acq", unbound(Some("acquire"), 0))
            .with("xf", unbound(Some("transform"), 0))
            .with("p", unbound(Some("parse"), 0));
        let buckets = classify(&registry);
        for role in StageRole::ALL {
            assert_eq!(buckets.bucket(role).len(), 1);
        }
        assert_eq!(buckets.bucket(StageRole::Acquire)[0].name, "acq");
    }

    #[test]
    fn test_classify_skips_unknown_and_missing_roles() {
        let registry = PluginRegistry::new()
            .with("mystery", unbound(Some("filter"), 0))
            .with("blank", unbound(None, 0))
            .with("acq", unbound(Some("acquire"), 0));
        let list = OrderedStageList::from_registry(&registry);
        assert_eq!(names(&list), vec!["acq"]);
    }

    #[test]
    fn test_sequence_is_stable_with_negative_and_sparse_priorities() {
        let registry = PluginRegistry::new()
            .with("a", unbound(Some("parse"), 10))
            .with("b", unbound(Some("parse"), -5))
            .with("c", unbound(Some("parse"), 10))
            .with("d", unbound(Some("parse"), 0))
            .with("e", unbound(Some("parse"), -5));
        let list = OrderedStageList::from_registry(&registry);
        assert_eq!(names(&list), vec!["b", "e", "d", "a", "c"]);
    }

    #[test]
    fn test_roles_concatenate_in_fixed_order() {
        let registry = PluginRegistry::new()
            .with("out-late", unbound(Some("output"), 10))
            .with("xf", unbound(Some("transform"), -100))
            .with("out-early", unbound(Some("output"), 0))
            .with("acq-late", unbound(Some("acquire"), 5))
            .with("parse", unbound(Some("parse"), 99))
            .with("acq-early", unbound(Some("acquire"), 0));
        let list = OrderedStageList::from_registry(&registry);

        assert_eq!(
            names(&list),
            vec!["acq-early", "acq-late", "parse", "xf", "out-early", "out-late"]
        );
        assert_eq!(list.count(StageRole::Acquire), 2);
        assert_eq!(list.count(StageRole::Parse), 1);
        assert_eq!(list.count(StageRole::Output), 2);
    }

    #[test]
    fn test_plan_display() {
        let registry = PluginRegistry::new().with("output-stdout", unbound(Some("output"), 10));
        let plan = OrderedStageList::from_registry(&registry).plan();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].role, StageRole::Output);
        assert_eq!(plan[0].to_string(), "output      10  output-stdout");
    }
}
