//! Mirrors rule outcomes onto the document: validity classes on the field and
//! the message in the field's error slot.

use formdom::{Document, Element};

use crate::field::Validity;
use crate::rules::RuleResult;

pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";
/// Class that marks an element as a field's error slot.
pub const ERROR_CLASS: &str = "error";

/// Id of the error slot for `field`, creating it if needed.
///
/// An existing slot is the field's next element sibling carrying the `error`
/// class. Otherwise a `span.error` announced politely to assistive technology
/// is inserted right after the field. Calling this repeatedly yields the same
/// slot.
pub fn error_slot(doc: &mut Document, field: &str) -> Option<String> {
    if !doc.contains(field) {
        return None;
    }

    if let Some(slot) = existing_slot(doc, field) {
        return Some(slot);
    }

    let slot = Element::span()
        .class(ERROR_CLASS)
        .attr("aria-live", "polite");
    let id = doc.insert_after(field, slot);
    if let Some(id) = &id {
        log::debug!("created error slot {id} for {field}");
    }
    id
}

fn existing_slot(doc: &Document, field: &str) -> Option<String> {
    doc.next_element_sibling(field)
        .filter(|el| el.has_class(ERROR_CLASS))
        .map(|el| el.id.clone())
}

/// Show `result` on `field`: exactly one validity class, and the message (or
/// nothing) in the error slot.
pub fn apply(doc: &mut Document, field: &str, result: &RuleResult) {
    let slot = error_slot(doc, field);

    match result {
        Ok(()) => {
            doc.remove_class(field, INVALID_CLASS);
            doc.add_class(field, VALID_CLASS);
            if let Some(slot) = slot {
                doc.set_text_content(&slot, "");
                doc.remove_attribute(&slot, "aria-hidden");
            }
        }
        Err(err) => {
            doc.remove_class(field, VALID_CLASS);
            doc.add_class(field, INVALID_CLASS);
            if let Some(slot) = slot {
                doc.set_text_content(&slot, &err.to_string());
            }
        }
    }
}

/// Return `field` to the unvalidated state.
pub fn clear(doc: &mut Document, field: &str) {
    doc.remove_class(field, VALID_CLASS);
    doc.remove_class(field, INVALID_CLASS);
    if let Some(slot) = error_slot(doc, field) {
        doc.set_text_content(&slot, "");
    }
}

pub fn validity(doc: &Document, field: &str) -> Validity {
    if doc.has_class(field, INVALID_CLASS) {
        Validity::Invalid
    } else if doc.has_class(field, VALID_CLASS) {
        Validity::Valid
    } else {
        Validity::Unvalidated
    }
}

/// Text currently shown in the field's error slot. Never creates a slot.
pub fn message(doc: &Document, field: &str) -> Option<String> {
    let slot = existing_slot(doc, field)?;
    doc.text_content(&slot)
}
