use serde_json::json;
use storefront_settings::{SettingsPage, StaticPage, error::SettingsError};

#[test]
fn parses_a_sectioned_page_definition() {
    let doc = r#"{
        "id": "shipping",
        "label": "Shipping",
        "sections": [
            { "id": "general", "settings": [{ "id": "s-1", "type": "text" }] },
            { "id": "rates", "settings": [] }
        ]
    }"#;
    let page = StaticPage::from_json_str(doc).expect("page definition");

    assert_eq!(page.id(), "shipping");
    assert_eq!(page.label(), "Shipping");
    assert_eq!(page.sections(), vec!["general", "rates"]);
    assert_eq!(page.settings(0), vec![json!({ "id": "s-1", "type": "text" })]);
    assert!(page.settings(1).is_empty());
    assert!(page.settings(5).is_empty());
}

#[test]
fn parses_a_sectionless_page_definition() {
    let doc = r#"{ "id": "emails", "label": "Emails", "settings": [{ "id": "s-1" }] }"#;
    let page = StaticPage::from_json_str(doc).expect("page definition");

    assert!(page.sections().is_empty());
    assert_eq!(page.settings(0), vec![json!({ "id": "s-1" })]);
    assert!(page.settings(1).is_empty());
}

#[test]
fn rejects_a_definition_without_an_id() {
    for doc in [r#"{ "label": "No Id" }"#, r#"{ "id": "", "label": "No Id" }"#] {
        let err = StaticPage::from_json_str(doc).expect_err("missing id");
        assert!(matches!(err, SettingsError::MissingPageId), "{err}");
    }
}

#[test]
fn rejects_malformed_json() {
    let err = StaticPage::from_json_str("{ not json").expect_err("parse failure");
    assert!(matches!(err, SettingsError::Parse(_)), "{err}");
}

#[test]
fn loads_a_definition_from_file() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(
        file.path(),
        r#"{ "id": "tax", "label": "Tax", "settings": [] }"#,
    )
    .expect("write definition");

    let page = StaticPage::load_from_file(file.path()).expect("load page");
    assert_eq!(page.id(), "tax");
    assert_eq!(page.label(), "Tax");
}

#[test]
fn load_from_file_reports_the_path_on_failure() {
    let err = StaticPage::load_from_file("/nonexistent/page.json").expect_err("missing file");
    assert!(err.to_string().contains("/nonexistent/page.json"));
}
