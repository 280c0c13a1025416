use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SettingsError};

/// An admin-defined settings page as seen by the REST adapter.
pub trait SettingsPage: Send + Sync {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
    /// Ordered section identifiers. May be empty, meaning one implicit section.
    fn sections(&self) -> Vec<String>;
    /// Raw setting definitions for the section at `section_index`.
    fn settings(&self, section_index: usize) -> Vec<Value>;
}

/// Page backed by a static definition, seedable in memory or parsed from a
/// JSON document of the shape `{id, label, sections: [{id, settings}]}` or
/// `{id, label, settings}` for pages without explicit sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticPage {
    #[serde(default)]
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    sections: Vec<PageSection>,
    /// Settings of a page without explicit sections.
    #[serde(default)]
    settings: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSection {
    pub id: String,
    #[serde(default)]
    pub settings: Vec<Value>,
}

impl StaticPage {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Add a named section with its settings; sections keep insertion order.
    pub fn with_section(mut self, id: impl Into<String>, settings: Vec<Value>) -> Self {
        self.sections.push(PageSection {
            id: id.into(),
            settings,
        });
        self
    }

    /// Set the settings of a page without explicit sections.
    pub fn with_settings(mut self, settings: Vec<Value>) -> Self {
        self.settings = settings;
        self
    }

    /// Parse a page definition from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let page: StaticPage =
            serde_json::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        if page.id.is_empty() {
            return Err(SettingsError::MissingPageId);
        }
        Ok(page)
    }

    /// Load a page definition from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read page definition at {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("invalid page definition in {}", path.display()))
    }
}

impl SettingsPage for StaticPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn sections(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    fn settings(&self, section_index: usize) -> Vec<Value> {
        if self.sections.is_empty() {
            if section_index == 0 {
                self.settings.clone()
            } else {
                Vec::new()
            }
        } else {
            self.sections
                .get(section_index)
                .map(|s| s.settings.clone())
                .unwrap_or_default()
        }
    }
}
