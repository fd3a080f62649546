//! The field validation engine: binds listeners, runs rules and keeps the
//! document's validity state in step with them.

use formdom::{Document, Event, EventKind, Selector};
use log::{debug, info, trace};

use crate::config::FormConfig;
use crate::field::FieldKind;
use crate::notice::{LogNotifier, Notifier, SUCCESS_MESSAGE};
use crate::result::{FieldError, ValidationResult};
use crate::rules::{RuleContext, RuleResult};
use crate::sync::{self, INVALID_CLASS};

/// Live and submit-time validation for the signup form.
///
/// # Example
///
/// ```ignore
/// let config = FormConfig::locate(&doc, &Selectors::default())?;
/// let mut engine = FieldValidationEngine::attach(&mut doc, config, LogNotifier);
///
/// if let Some(event) = doc.input("email", "user@example.com") {
///     engine.dispatch(&mut doc, &mut event.clone());
/// }
///
/// let mut submit = Event::submit("form");
/// let result = engine.dispatch(&mut doc, &mut submit);
/// ```
#[derive(Debug)]
pub struct FieldValidationEngine<N = LogNotifier> {
    config: FormConfig,
    /// Element id -> field for every bound input listener.
    listeners: Vec<(String, FieldKind)>,
    /// Form element id when a submit handler is bound.
    submit_listener: Option<String>,
    notifier: N,
}

impl<N: Notifier> FieldValidationEngine<N> {
    /// Bind the engine to `doc` and run an initial validation pass.
    ///
    /// The form, if present, is marked `novalidate` so the host does not run
    /// its own checks. Failures in the initial pass are displayed but do not
    /// block anything.
    pub fn attach(doc: &mut Document, config: FormConfig, notifier: N) -> Self {
        if let Some(form) = config.form() {
            doc.set_attribute(form, "novalidate", "true");
        }

        let listeners = config
            .present_fields()
            .map(|(kind, id)| {
                debug!("bound input listener for {kind} on {id}");
                (id.to_string(), kind)
            })
            .collect();

        let submit_listener = config.form().map(str::to_string);
        match &submit_listener {
            Some(form) => debug!("bound submit handler on {form}"),
            None => debug!("no form found, submissions are not intercepted"),
        }

        let engine = Self {
            config,
            listeners,
            submit_listener,
            notifier,
        };
        engine.validate_all(doc);
        engine
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Whether an input listener is bound for `kind`.
    pub fn is_bound(&self, kind: FieldKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    /// Fields with a bound input listener, in validation order.
    pub fn bound_fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.listeners.iter().map(|(_, kind)| *kind)
    }

    /// Run the rule for `kind` against the document without touching it.
    ///
    /// Returns `None` when the field is absent.
    pub fn check(&self, doc: &Document, kind: FieldKind) -> Option<RuleResult> {
        let id = self.config.field(kind)?;
        let raw = doc.value(id).unwrap_or_default();
        let cx = RuleContext {
            password: self
                .config
                .field(FieldKind::Password)
                .and_then(|password| doc.value(password)),
        };
        Some(kind.check(raw, &cx))
    }

    fn run(&self, doc: &mut Document, kind: FieldKind) -> Option<RuleResult> {
        let id = self.config.field(kind)?;
        let result = self.check(doc, kind)?;
        trace!("{kind} ({id}): {result:?}");
        sync::apply(doc, id, &result);

        if kind == FieldKind::Password {
            self.run(doc, FieldKind::ConfirmPassword);
        }

        Some(result)
    }

    /// Validate one field and show the outcome. Absent fields pass.
    ///
    /// Validating the password also re-validates its confirmation.
    pub fn validate_field(&self, doc: &mut Document, kind: FieldKind) -> bool {
        !matches!(self.run(doc, kind), Some(Err(_)))
    }

    /// Validate every field in order, without stopping at the first failure.
    pub fn validate_all(&self, doc: &mut Document) -> ValidationResult {
        let mut errors = Vec::new();

        for kind in FieldKind::ALL {
            if let Some(Err(error)) = self.run(doc, kind) {
                if let Some(id) = self.config.field(kind) {
                    errors.push(FieldError {
                        field: kind,
                        element_id: id.to_string(),
                        error,
                    });
                }
            }
        }

        errors.into()
    }

    /// Input listener: re-validate the field backed by `target`.
    ///
    /// Returns `None` if no listener is bound to `target`.
    pub fn handle_input(&self, doc: &mut Document, target: &str) -> Option<bool> {
        let kind = self
            .listeners
            .iter()
            .find(|(id, _)| id == target)
            .map(|(_, kind)| *kind)?;
        Some(self.validate_field(doc, kind))
    }

    /// Submit handler.
    ///
    /// Always prevents the default submission. If any field fails, focus moves
    /// to the first invalid field in the form and nothing is reset. Otherwise
    /// the success notice is emitted, the form is reset and every field returns
    /// to the unvalidated state.
    pub fn handle_submit(&mut self, doc: &mut Document, event: &mut Event) -> ValidationResult {
        event.prevent_default();

        let result = self.validate_all(doc);
        if result.is_invalid() {
            let invalid = Selector::class(INVALID_CLASS);
            let first = match self.config.form() {
                Some(form) => doc.query_selector_within(form, &invalid),
                None => doc.query_selector(&invalid),
            };
            if let Some(id) = &first {
                doc.focus(id);
            }
            debug!(
                "submit rejected: {} invalid field(s), focus {:?}",
                result.errors().len(),
                first
            );
            return result;
        }

        info!("form submitted");
        self.notifier.notify(SUCCESS_MESSAGE);

        if let Some(form) = self.config.form() {
            doc.reset_form(form);
        }
        for (_, id) in self.config.present_fields() {
            doc.reset_value(id);
            sync::clear(doc, id);
        }

        result
    }

    /// Route `event` to the bound listener.
    ///
    /// Returns the submit result for a handled submission, `None` otherwise.
    /// Events for elements without a listener are ignored.
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut Event) -> Option<ValidationResult> {
        match event.kind {
            EventKind::Input => {
                self.handle_input(doc, &event.target);
                None
            }
            EventKind::Submit if self.submit_listener.as_deref() == Some(event.target.as_str()) => {
                Some(self.handle_submit(doc, event))
            }
            EventKind::Submit => None,
        }
    }
}
