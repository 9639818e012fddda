use super::descriptor::PluginDescriptor;
use indexmap::IndexMap;

/// Name→descriptor mapping handed to the orchestrator.
///
/// Insertion order is registration order, which breaks priority ties.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: IndexMap<String, PluginDescriptor>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Re-registering a name replaces the descriptor but
    /// keeps its original position.
    pub fn register(&mut self, name: impl Into<String>, descriptor: PluginDescriptor) -> Option<PluginDescriptor> {
        self.plugins.insert(name.into(), descriptor)
    }

    pub fn with(mut self, name: impl Into<String>, descriptor: PluginDescriptor) -> Self {
        self.register(name, descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PluginDescriptor> {
        self.plugins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Keep only the named plugins, preserving registration order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let plugins = self
            .plugins
            .iter()
            .filter(|(name, _)| names.iter().any(|n| n.as_ref() == name.as_str()))
            .map(|(name, d)| (name.clone(), d.clone()))
            .collect();
        Self { plugins }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PluginDescriptor)> {
        self.plugins.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PluginDescriptor)> for PluginRegistry {
    fn from_iter<I: IntoIterator<Item = (K, PluginDescriptor)>>(iter: I) -> Self {
        let mut registry = PluginRegistry::new();
        for (name, descriptor) in iter {
            registry.register(name, descriptor);
        }
        registry
    }
}
