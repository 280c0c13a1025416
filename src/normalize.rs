use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    model::{DescTip, NormalizedSetting},
    page::SettingsPage,
};

/// Reshape one raw setting definition for the REST surface.
///
/// Returns `None` when the entry carries no usable `id`; callers skip such
/// entries. Malformed fields never error: an unusable `desc_tip` degrades to
/// an omitted tip, missing `title`/`desc` default to empty strings.
pub fn normalize_setting(raw: &Value) -> Option<NormalizedSetting> {
    let map = match raw.as_object() {
        Some(map) => map,
        None => {
            tracing::trace!("skipping non-object setting entry");
            return None;
        }
    };
    let id = match map.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            tracing::trace!("skipping setting without an id");
            return None;
        }
    };

    let label = map
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let description = map
        .get("desc")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let tip = match DescTip::from_value(map.get("desc_tip")) {
        DescTip::InheritDescription => Some(description.clone()),
        DescTip::Text(text) => Some(text),
        DescTip::Absent | DescTip::Disabled => None,
    };

    let mut setting_type = None;
    let mut extra = IndexMap::new();
    for (key, value) in map {
        match key.as_str() {
            "id" | "title" | "desc" | "desc_tip" => {}
            // A non-string `type` is not lifted; it passes through untouched.
            "type" => match value.as_str() {
                Some(t) => setting_type = Some(t.to_string()),
                None => {
                    extra.insert(key.clone(), value.clone());
                }
            },
            _ => {
                extra.insert(key.clone(), value.clone());
            }
        }
    }

    Some(NormalizedSetting {
        id,
        setting_type,
        label,
        description,
        tip,
        extra,
    })
}

/// Append every normalized setting from `page` to `settings`, section by
/// section in declared order. A page reporting zero sections is read as
/// having one implicit section at index 0. Entries already in `settings`
/// stay in place ahead of the appended ones.
pub fn normalize_page_settings(
    page: &dyn SettingsPage,
    mut settings: Vec<NormalizedSetting>,
) -> Vec<NormalizedSetting> {
    let section_count = page.sections().len().max(1);
    for section in 0..section_count {
        settings.extend(page.settings(section).iter().filter_map(normalize_setting));
    }
    settings
}
