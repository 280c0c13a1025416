use std::sync::Arc;

use serde_json::Value;

use crate::{
    model::{GroupEntry, NormalizedSetting},
    normalize::normalize_page_settings,
    page::SettingsPage,
    registry::HookRegistry,
};

/// Namespace prefixing every extension point this crate registers.
pub const SETTINGS_NAMESPACE: &str = "storefront";

/// Extension point carrying the list of registered settings groups.
pub fn groups_hook() -> String {
    format!("{SETTINGS_NAMESPACE}_settings_groups")
}

/// Extension point carrying the normalized settings of one page.
pub fn page_hook(page_id: &str) -> String {
    format!("{SETTINGS_NAMESPACE}_settings-{page_id}")
}

/// Exposes one admin settings page to the REST surface.
///
/// The adapter binds two callbacks to the host's [`HookRegistry`]: one that
/// appends the page's group entry to the global groups list, and one that
/// appends the page's normalized settings under its per-page hook.
pub struct RestSettingsAdapter {
    page: Arc<dyn SettingsPage>,
}

impl RestSettingsAdapter {
    pub fn new(page: Arc<dyn SettingsPage>) -> Self {
        Self { page }
    }

    /// Install the group and per-page settings callbacks on `registry`.
    pub fn register(&self, registry: &mut HookRegistry) {
        tracing::debug!(page_id = self.page.id(), "registering settings page");
        let page = Arc::clone(&self.page);
        registry.add_filter(groups_hook(), move |groups| {
            append_group(page.as_ref(), groups)
        });
        let page = Arc::clone(&self.page);
        registry.add_filter(page_hook(self.page.id()), move |settings| {
            append_page_settings(page.as_ref(), settings)
        });
    }

    /// Append this page's `{id, label}` group entry to `groups`.
    pub fn register_group(&self, mut groups: Vec<GroupEntry>) -> Vec<GroupEntry> {
        groups.push(GroupEntry::new(self.page.id(), self.page.label()));
        groups
    }

    /// Append this page's normalized settings to `settings`.
    pub fn register_settings(
        &self,
        settings: Vec<NormalizedSetting>,
    ) -> Vec<NormalizedSetting> {
        normalize_page_settings(self.page.as_ref(), settings)
    }
}

fn append_group(page: &dyn SettingsPage, groups: Value) -> Value {
    let mut entries = into_array(groups);
    entries.push(serde_json::json!({ "id": page.id(), "label": page.label() }));
    Value::Array(entries)
}

fn append_page_settings(page: &dyn SettingsPage, settings: Value) -> Value {
    let mut entries = into_array(settings);
    entries.extend(
        normalize_page_settings(page, Vec::new())
            .iter()
            .filter_map(|setting| serde_json::to_value(setting).ok()),
    );
    Value::Array(entries)
}

fn into_array(accumulator: Value) -> Vec<Value> {
    match accumulator {
        Value::Array(entries) => entries,
        Value::Null => Vec::new(),
        other => {
            tracing::trace!(?other, "replacing non-array accumulator");
            Vec::new()
        }
    }
}
