use formdom::{Document, Element, Event, EventKind, Selector, SelectorError};

fn signup_page() -> Document {
    Document::new(
        Element::div().id("body").child(
            Element::form()
                .id("form")
                .child(Element::input().id("email").class("email"))
                .child(Element::input().id("zip").class("zip").value("12345"))
                .child(Element::span().id("zip-err").class("error"))
                .child(Element::button().id("sub").class("sub").text("Go")),
        ),
    )
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_selector_parse_variants() {
    assert!(Selector::parse("form").is_ok());
    assert!(Selector::parse(".conf-pass").is_ok());
    assert!(Selector::parse("#email").is_ok());
    assert!(Selector::parse("input.email.big").is_ok());
    assert_eq!(
        "INPUT.email".parse::<Selector>().map(|s| s.to_string()),
        Ok("input.email".to_string())
    );
    assert_eq!(
        Selector::parse("#sub.a.b").map(|s| s.to_string()),
        Ok("#sub.a.b".to_string())
    );
}

#[test]
fn test_selector_parse_errors() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    assert!(matches!(
        Selector::parse("input."),
        Err(SelectorError::MissingName { .. })
    ));
    assert!(matches!(
        Selector::parse("form > input"),
        Err(SelectorError::Unsupported { found: ' ', .. })
    ));
    assert!(matches!(
        Selector::parse("#a#b"),
        Err(SelectorError::Unsupported { found: '#', .. })
    ));
}

#[test]
fn test_query_selector_document_order() {
    let doc = signup_page();
    let form = Selector::parse("form").unwrap();
    let input = Selector::parse("input").unwrap();

    assert_eq!(doc.query_selector(&form), Some("form".to_string()));
    assert_eq!(doc.query_selector(&input), Some("email".to_string()));
    assert_eq!(
        doc.query_selector(&Selector::parse(".missing").unwrap()),
        None
    );
}

#[test]
fn test_query_selector_matches_root() {
    let doc = Document::new(
        Element::form()
            .id("form")
            .children([Element::input().id("a"), Element::input().id("b")]),
    );
    let form = Selector::parse("form").unwrap();

    assert_eq!(doc.query_selector(&form), Some("form".to_string()));
    assert_eq!(doc.query_selector_within("form", &form), None);
    assert_eq!(
        doc.query_selector(&Selector::parse("input").unwrap()),
        Some("a".to_string())
    );
    assert_eq!(
        doc.next_element_sibling("a").map(|e| e.id.as_str()),
        Some("b")
    );
}

#[test]
fn test_query_selector_within_excludes_scope() {
    let doc = signup_page();
    let form = Selector::parse("form").unwrap();

    assert_eq!(doc.query_selector_within("form", &form), None);
    assert_eq!(
        doc.query_selector_within("form", &Selector::class("zip")),
        Some("zip".to_string())
    );
    assert_eq!(doc.query_selector_within("nope", &form), None);
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_next_element_sibling() {
    let doc = signup_page();

    assert_eq!(doc.next_element_sibling("email").map(|e| e.id.as_str()), Some("zip"));
    assert_eq!(doc.next_element_sibling("zip").map(|e| e.id.as_str()), Some("zip-err"));
    assert!(doc.next_element_sibling("sub").is_none());
    assert!(doc.next_element_sibling("body").is_none());
}

#[test]
fn test_insert_after() {
    let mut doc = signup_page();

    let id = doc.insert_after("email", Element::span().id("email-err"));
    assert_eq!(id.as_deref(), Some("email-err"));
    assert_eq!(
        doc.next_element_sibling("email").map(|e| e.id.as_str()),
        Some("email-err")
    );
    assert_eq!(
        doc.next_element_sibling("email-err").map(|e| e.id.as_str()),
        Some("zip")
    );

    // The root has no parent to insert into
    assert!(doc.insert_after("body", Element::span()).is_none());
    assert!(doc.insert_after("missing", Element::span()).is_none());
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::span();
    let b = Element::span();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("span-"));
}

// ============================================================================
// Classes, attributes, values, text
// ============================================================================

#[test]
fn test_class_list() {
    let mut doc = signup_page();

    assert!(doc.add_class("email", "valid"));
    assert!(doc.add_class("email", "valid"));
    assert!(doc.has_class("email", "valid"));
    assert_eq!(doc.get("email").unwrap().classes, vec!["email", "valid"]);

    assert!(doc.remove_class("email", "valid"));
    assert!(!doc.has_class("email", "valid"));

    assert!(!doc.add_class("missing", "valid"));
    assert!(!doc.has_class("missing", "valid"));
}

#[test]
fn test_attributes() {
    let mut doc = signup_page();

    assert!(doc.set_attribute("form", "novalidate", "true"));
    assert_eq!(doc.attribute("form", "novalidate"), Some("true"));
    assert!(doc.remove_attribute("form", "novalidate"));
    assert_eq!(doc.attribute("form", "novalidate"), None);
}

#[test]
fn test_text_content() {
    let mut doc = signup_page();

    assert_eq!(doc.text_content("form").as_deref(), Some("Go"));
    assert!(doc.set_text_content("zip-err", "Bad zip"));
    assert_eq!(doc.text_content("zip-err").as_deref(), Some("Bad zip"));
    assert!(doc.set_text_content("zip-err", ""));
    assert_eq!(doc.text_content("zip-err").as_deref(), Some(""));
    assert_eq!(doc.text_content("missing"), None);
}

#[test]
fn test_input_returns_event() {
    let mut doc = signup_page();

    let event = doc.input("email", "a@b.c").unwrap();
    assert_eq!(event.kind, EventKind::Input);
    assert_eq!(event.target, "email");
    assert!(!event.default_prevented());
    assert_eq!(doc.value("email"), Some("a@b.c"));

    assert!(doc.input("missing", "x").is_none());
}

#[test]
fn test_reset_form_restores_defaults() {
    let mut doc = signup_page();
    doc.set_value("email", "typed");
    doc.set_value("zip", "99999");

    assert!(doc.reset_form("form"));
    assert_eq!(doc.value("email"), Some(""));
    assert_eq!(doc.value("zip"), Some("12345"));

    assert!(!doc.reset_form("missing"));
}

// ============================================================================
// Focus and events
// ============================================================================

#[test]
fn test_focus() {
    let mut doc = signup_page();

    assert_eq!(doc.active_element(), None);
    assert!(doc.focus("zip"));
    assert_eq!(doc.active_element(), Some("zip"));
    assert!(!doc.focus("missing"));
    assert_eq!(doc.active_element(), Some("zip"));
    assert!(doc.blur());
    assert!(!doc.blur());
}

#[test]
fn test_prevent_default() {
    let mut event = Event::submit("form");
    assert_eq!(event.kind, EventKind::Submit);
    event.prevent_default();
    assert!(event.default_prevented());
}
