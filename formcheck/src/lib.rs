//! Live and submit-time validation for a signup form.
//!
//! The engine validates five fields (email, country, postal code, password and
//! its confirmation) held in a [`formdom::Document`], marks each one `valid`
//! or `invalid`, writes inline messages into an adjacent error slot and
//! blocks submission until every present field passes.
//!
//! # Example
//!
//! ```ignore
//! use formcheck::prelude::*;
//!
//! let config = FormConfig::locate(&doc, &Selectors::default())?;
//! let mut engine = FieldValidationEngine::attach(&mut doc, config, LogNotifier);
//!
//! let mut submit = Event::submit("form");
//! if let Some(result) = engine.dispatch(&mut doc, &mut submit) {
//!     if result.is_invalid() {
//!         // focus already moved to the first invalid field
//!     }
//! }
//! ```

pub mod config;
pub mod engine;
pub mod field;
pub mod notice;
pub mod result;
pub mod rules;
pub mod sync;

pub use config::{ConfigError, FormConfig, Selectors};
pub use engine::FieldValidationEngine;
pub use field::{FieldKind, Validity};
pub use notice::{LogNotifier, Notifier, SUCCESS_MESSAGE};
pub use result::{FieldError, ValidationResult};
pub use rules::{FailureKind, Rule, RuleContext, RuleError, RuleResult};

pub mod prelude {
    pub use crate::config::{ConfigError, FormConfig, Selectors};
    pub use crate::engine::FieldValidationEngine;
    pub use crate::field::{FieldKind, Validity};
    pub use crate::notice::{LogNotifier, Notifier};
    pub use crate::result::{FieldError, ValidationResult};
    pub use crate::rules::{FailureKind, RuleError};

    pub use formdom::{Document, Element, Event};
}
