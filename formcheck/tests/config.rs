use formcheck::{ConfigError, FieldKind, FormConfig, Selectors};
use formdom::{Document, Element, SelectorError};

fn signup_doc() -> Document {
    Document::new(
        Element::div().child(
            Element::form()
                .id("form")
                .child(Element::input().id("email").class("email"))
                .child(Element::input().id("postal").class("postal"))
                .child(Element::input().id("pass").class("pass")),
        ),
    )
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_default_selectors() {
    let selectors = Selectors::default();
    assert_eq!(selectors.field(FieldKind::Email), ".email");
    assert_eq!(selectors.field(FieldKind::Country), ".country");
    assert_eq!(selectors.field(FieldKind::Zip), ".zip");
    assert_eq!(selectors.field(FieldKind::Password), ".pass");
    assert_eq!(selectors.field(FieldKind::ConfirmPassword), ".conf-pass");
    assert_eq!(selectors.form, "form");
}

#[test]
fn test_selectors_partial_override_from_json() {
    let selectors: Selectors = serde_json::from_str(r##"{"zip": "#postal"}"##).unwrap();
    assert_eq!(selectors.zip, "#postal");
    assert_eq!(selectors.email, ".email");
    assert_eq!(selectors.form, "form");
}

// ============================================================================
// Locating
// ============================================================================

#[test]
fn test_locate_tolerates_missing_fields() {
    let doc = signup_doc();
    let config = FormConfig::locate(&doc, &Selectors::default()).unwrap();

    assert_eq!(config.form(), Some("form"));
    assert_eq!(config.field(FieldKind::Email), Some("email"));
    assert_eq!(config.field(FieldKind::Password), Some("pass"));
    assert_eq!(config.field(FieldKind::Zip), None);
    assert_eq!(config.field(FieldKind::Country), None);
    assert_eq!(
        config.present_fields().collect::<Vec<_>>(),
        vec![(FieldKind::Email, "email"), (FieldKind::Password, "pass")]
    );
}

#[test]
fn test_locate_with_custom_selector() {
    let doc = signup_doc();
    let selectors = Selectors {
        zip: "#postal".to_string(),
        ..Selectors::default()
    };
    let config = FormConfig::locate(&doc, &selectors).unwrap();

    assert_eq!(config.field(FieldKind::Zip), Some("postal"));
    assert_eq!(config.kind_of("postal"), Some(FieldKind::Zip));
    assert_eq!(config.kind_of("form"), None);
}

#[test]
fn test_locate_rejects_bad_selector() {
    let doc = signup_doc();
    let selectors = Selectors {
        zip: "form input.zip".to_string(),
        ..Selectors::default()
    };

    let err = FormConfig::locate(&doc, &selectors).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Selector {
            which: "zip",
            source: SelectorError::Unsupported { found: ' ', .. },
        }
    ));
    assert!(err.to_string().starts_with("Invalid selector for zip"));
}

// ============================================================================
// Strict startup
// ============================================================================

#[test]
fn test_require_form() {
    let doc = signup_doc();
    let config = FormConfig::locate(&doc, &Selectors::default()).unwrap();
    assert!(config.require_form().is_ok());

    let doc = Document::new(Element::div().child(Element::input().class("email")));
    let config = FormConfig::locate(&doc, &Selectors::default()).unwrap();
    assert_eq!(config.form(), None);
    assert_eq!(
        config.require_form(),
        Err(ConfigError::MissingForm {
            selector: "form".to_string()
        })
    );
}

#[test]
fn test_manual_config() {
    let config = FormConfig::new()
        .with_form("signup")
        .with_field(FieldKind::Country, "country-select");

    assert_eq!(config.form(), Some("signup"));
    assert_eq!(config.field(FieldKind::Country), Some("country-select"));
    assert_eq!(config.present_fields().count(), 1);
    assert!(FormConfig::new().require_form().is_err());
}
