use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("settings page definition is missing an id")]
    MissingPageId,
}

pub type Result<T> = std::result::Result<T, SettingsError>;
