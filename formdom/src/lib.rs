//! A small in-memory document model for form-driven UIs.
//!
//! Elements are addressed by string ids, carry CSS classes, attributes, an
//! input value and text content, and can be located with simple selectors.

pub mod document;
pub mod element;
pub mod event;
pub mod selector;

pub use document::Document;
pub use element::{Content, Element};
pub use event::{Event, EventKind};
pub use selector::{Selector, SelectorError};
