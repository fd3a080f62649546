//! Startup configuration: where the form and its fields live in the document.

use formdom::{Document, Selector, SelectorError};
use serde::Deserialize;
use thiserror::Error;

use crate::field::FieldKind;

/// Errors raised while building a [`FormConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured selector could not be parsed.
    #[error("Invalid selector for {which}: {source}")]
    Selector {
        which: &'static str,
        #[source]
        source: SelectorError,
    },

    /// Strict startup was requested and the form is absent.
    #[error("No form element matches '{selector}'")]
    MissingForm { selector: String },
}

/// Selectors used to find the form and its fields.
///
/// Any subset can be overridden when deserializing; the rest keep the
/// signup page defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub email: String,
    pub country: String,
    pub zip: String,
    pub password: String,
    pub confirm_password: String,
    pub form: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            email: FieldKind::Email.default_selector().to_string(),
            country: FieldKind::Country.default_selector().to_string(),
            zip: FieldKind::Zip.default_selector().to_string(),
            password: FieldKind::Password.default_selector().to_string(),
            confirm_password: FieldKind::ConfirmPassword.default_selector().to_string(),
            form: "form".to_string(),
        }
    }
}

impl Selectors {
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Country => &self.country,
            FieldKind::Zip => &self.zip,
            FieldKind::Password => &self.password,
            FieldKind::ConfirmPassword => &self.confirm_password,
        }
    }
}

/// Element ids of the form and each field, resolved once at startup.
///
/// Every entry is optional: a missing field is skipped by validation and a
/// missing form means submissions are never intercepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    form: Option<String>,
    fields: [Option<String>; 5],
    form_selector: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: None,
            fields: Default::default(),
            form_selector: "form".to_string(),
        }
    }
}

impl FormConfig {
    /// An empty configuration; add handles with [`with_form`](Self::with_form)
    /// and [`with_field`](Self::with_field).
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every selector against `doc`.
    pub fn locate(doc: &Document, selectors: &Selectors) -> Result<Self, ConfigError> {
        let parse = |which: &'static str, raw: &str| {
            Selector::parse(raw).map_err(|source| ConfigError::Selector { which, source })
        };

        let mut config = Self {
            form_selector: selectors.form.clone(),
            ..Self::default()
        };
        config.form = doc.query_selector(&parse("form", &selectors.form)?);

        for kind in FieldKind::ALL {
            let selector = parse(kind.name(), selectors.field(kind))?;
            config.fields[kind.index()] = doc.query_selector(&selector);
        }

        log::debug!(
            "located form {:?}, {} of {} fields",
            config.form,
            config.fields.iter().flatten().count(),
            FieldKind::ALL.len()
        );

        Ok(config)
    }

    pub fn with_form(mut self, id: impl Into<String>) -> Self {
        self.form = Some(id.into());
        self
    }

    pub fn with_field(mut self, kind: FieldKind, id: impl Into<String>) -> Self {
        self.fields[kind.index()] = Some(id.into());
        self
    }

    /// Fail unless a form was found. Without this a missing form is ignored.
    pub fn require_form(self) -> Result<Self, ConfigError> {
        if self.form.is_some() {
            Ok(self)
        } else {
            Err(ConfigError::MissingForm {
                selector: self.form_selector,
            })
        }
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    pub fn field(&self, kind: FieldKind) -> Option<&str> {
        self.fields[kind.index()].as_deref()
    }

    /// Present fields with their element ids, in validation order.
    pub fn present_fields(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        FieldKind::ALL
            .into_iter()
            .filter_map(|kind| self.field(kind).map(|id| (kind, id)))
    }

    /// Which field, if any, is backed by the element `id`.
    pub fn kind_of(&self, id: &str) -> Option<FieldKind> {
        self.present_fields()
            .find(|(_, field_id)| *field_id == id)
            .map(|(kind, _)| kind)
    }
}
