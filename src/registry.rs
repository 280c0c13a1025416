use indexmap::IndexMap;
use serde_json::Value;

/// A filter callback: receives the accumulator and returns the (possibly
/// extended) accumulator.
pub type FilterFn = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Explicit extension-point registry: hook name to ordered callback list.
///
/// [`HookRegistry::apply_filters`] threads the accumulator through every
/// callback registered under a hook, in registration order. The registry is
/// owned by the hosting application; nothing here is global.
#[derive(Default)]
pub struct HookRegistry {
    filters: IndexMap<String, Vec<FilterFn>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` at the end of `hook`'s callback list.
    pub fn add_filter(
        &mut self,
        hook: impl Into<String>,
        callback: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) {
        self.filters
            .entry(hook.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Run every callback registered for `hook` over `initial`, in
    /// registration order. Unknown hooks return `initial` unchanged.
    pub fn apply_filters(&self, hook: &str, initial: Value) -> Value {
        match self.filters.get(hook) {
            Some(callbacks) => callbacks.iter().fold(initial, |acc, callback| callback(acc)),
            None => initial,
        }
    }

    pub fn has_filter(&self, hook: &str) -> bool {
        self.filter_count(hook) > 0
    }

    /// Number of callbacks registered for `hook`.
    pub fn filter_count(&self, hook: &str) -> usize {
        self.filters.get(hook).map(Vec::len).unwrap_or(0)
    }

    /// Hook names with at least one callback, in first-registration order.
    pub fn hooks(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}
