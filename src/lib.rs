//! Exposes admin-defined settings pages to an external REST surface.
//!
//! Raw setting definitions (as shaped by the page-oriented admin UI) are
//! reshaped into REST-ready records, and each page is bound to a host-owned
//! [`HookRegistry`] under the `storefront_settings_groups` and
//! `storefront_settings-<page_id>` extension points.
#![forbid(unsafe_code)]

pub mod adapter;
pub mod error;
pub mod model;
pub mod normalize;
pub mod page;
pub mod registry;

pub use adapter::{RestSettingsAdapter, SETTINGS_NAMESPACE, groups_hook, page_hook};
pub use model::{DescTip, GroupEntry, NormalizedSetting};
pub use normalize::{normalize_page_settings, normalize_setting};
pub use page::{SettingsPage, StaticPage};
pub use registry::HookRegistry;

use std::sync::Arc;

/// Bind `page` to `registry` and return the adapter that owns the binding.
pub fn register_page(
    registry: &mut HookRegistry,
    page: Arc<dyn SettingsPage>,
) -> RestSettingsAdapter {
    let adapter = RestSettingsAdapter::new(page);
    adapter.register(registry);
    adapter
}
