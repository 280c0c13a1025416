use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One settings-page registration record as exposed over REST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub id: String,
    pub label: String,
}

impl GroupEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A raw setting's `desc_tip` field, resolved once at the boundary.
///
/// The admin UI overloads the field: a boolean switches the tip on or off,
/// a string supplies the tip text directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescTip {
    Absent,
    Disabled,
    /// Boolean `true`: the tip inherits the normalized description.
    InheritDescription,
    /// Non-empty string: the tip is that string verbatim.
    Text(String),
}

impl DescTip {
    /// Classify a raw `desc_tip` value. Anything other than boolean `true` or
    /// a non-empty string carries no tip.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Bool(true)) => Self::InheritDescription,
            Some(Value::String(s)) if !s.is_empty() => Self::Text(s.clone()),
            Some(_) => Self::Disabled,
        }
    }
}

/// A setting definition reshaped for the REST surface.
///
/// The keys the admin UI spells `title` and `desc` become `label` and
/// `description`; every other raw key rides along unchanged in `extra`,
/// keeping its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSetting {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub setting_type: Option<String>,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(flatten, default)]
    pub extra: IndexMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn desc_tip_true_inherits_description() {
        assert_eq!(
            DescTip::from_value(Some(&json!(true))),
            DescTip::InheritDescription
        );
    }

    #[test]
    fn desc_tip_non_empty_string_is_verbatim() {
        assert_eq!(
            DescTip::from_value(Some(&json!("Setting Tip"))),
            DescTip::Text("Setting Tip".to_string())
        );
    }

    #[test]
    fn desc_tip_other_values_carry_no_tip() {
        assert_eq!(DescTip::from_value(None), DescTip::Absent);
        assert_eq!(DescTip::from_value(Some(&json!(false))), DescTip::Disabled);
        assert_eq!(DescTip::from_value(Some(&json!(""))), DescTip::Disabled);
        assert_eq!(DescTip::from_value(Some(&json!(null))), DescTip::Disabled);
        assert_eq!(DescTip::from_value(Some(&json!(5))), DescTip::Disabled);
    }
}
