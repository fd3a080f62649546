//! Signup Example
//!
//! Builds the signup page, types into it the way a user would and submits it
//! twice: once with a mistake, once fixed. Logs go to `signup.log`.

use std::fs::File;

use formcheck::prelude::*;
use formcheck::sync;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn page() -> Document {
    Document::new(
        Element::div().id("body").child(
            Element::form()
                .id("signup")
                .child(Element::input().id("email").class("email"))
                .child(Element::input().id("country").class("country"))
                .child(Element::input().id("zip").class("zip"))
                .child(Element::input().id("pass").class("pass"))
                .child(Element::input().id("conf").class("conf-pass"))
                .child(Element::button().id("sub").class("sub").text("Sign up")),
        ),
    )
}

fn print_state(doc: &Document, config: &FormConfig) {
    for (kind, id) in config.present_fields() {
        let state = sync::validity(doc, id);
        let message = sync::message(doc, id).unwrap_or_default();
        println!(
            "  {:<16} {:<20} {:<12} {}",
            kind.name(),
            format!("{:?}", doc.value(id).unwrap_or_default()),
            format!("{state:?}"),
            message
        );
    }
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let mut doc = page();
    let located = FormConfig::locate(&doc, &Selectors::default());
    let config = match located.and_then(FormConfig::require_form) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let mut engine = FieldValidationEngine::attach(&mut doc, config, LogNotifier);

    println!("After load:");
    print_state(&doc, engine.config());

    for (id, value) in [
        ("email", "user@example.com"),
        ("country", "Norway"),
        ("zip", "1234"),
        ("pass", "abcdefgh"),
        ("conf", "abcdefgh"),
    ] {
        if let Some(mut event) = doc.input(id, value) {
            engine.dispatch(&mut doc, &mut event);
        }
    }

    let mut submit = Event::submit("signup");
    if let Some(result) = engine.dispatch(&mut doc, &mut submit) {
        println!(
            "\nFirst submit: {} error(s), focus on {:?}",
            result.errors().len(),
            doc.active_element()
        );
        print_state(&doc, engine.config());
    }

    if let Some(mut event) = doc.input("zip", "12345") {
        engine.dispatch(&mut doc, &mut event);
    }

    let mut submit = Event::submit("signup");
    if let Some(result) = engine.dispatch(&mut doc, &mut submit) {
        println!("\nSecond submit: valid = {}", result.is_valid());
        print_state(&doc, engine.config());
    }
}
