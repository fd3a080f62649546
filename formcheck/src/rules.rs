//! Per-field validation rules.
//!
//! Every rule is a pure function of the field value plus, for the
//! confirmation field, the live password value.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::FieldKind;

/// Minimum password length, counted in Unicode scalar values (`char`s), not
/// bytes or UTF-16 units.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.!#$%&'*+/=?^`{|}~-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*$")
        .expect("email pattern is valid")
});

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("zip pattern is valid"));

/// Broad class of a rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Empty,
    Format,
    Length,
    Mismatch,
}

/// A failed rule. The `Display` text is the inline message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RuleError {
    #[error("Email is required.")]
    EmailRequired,

    #[error("Enter a valid email (e.g. user@example.com).")]
    EmailFormat,

    #[error("Country is required.")]
    CountryRequired,

    #[error("Postal code is required.")]
    ZipRequired,

    #[error("Enter a valid ZIP (12345 or 12345-6789).")]
    ZipFormat,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,

    #[error("Please confirm your password.")]
    ConfirmRequired,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl RuleError {
    pub fn kind(self) -> FailureKind {
        match self {
            Self::EmailRequired
            | Self::CountryRequired
            | Self::ZipRequired
            | Self::PasswordRequired
            | Self::ConfirmRequired => FailureKind::Empty,
            Self::EmailFormat | Self::ZipFormat => FailureKind::Format,
            Self::PasswordTooShort => FailureKind::Length,
            Self::PasswordMismatch => FailureKind::Mismatch,
        }
    }

    /// The field this failure belongs to.
    pub fn field(self) -> FieldKind {
        match self {
            Self::EmailRequired | Self::EmailFormat => FieldKind::Email,
            Self::CountryRequired => FieldKind::Country,
            Self::ZipRequired | Self::ZipFormat => FieldKind::Zip,
            Self::PasswordRequired | Self::PasswordTooShort => FieldKind::Password,
            Self::ConfirmRequired | Self::PasswordMismatch => FieldKind::ConfirmPassword,
        }
    }
}

/// Outcome of a single rule check.
pub type RuleResult = Result<(), RuleError>;

/// Cross-field values a rule may read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleContext<'a> {
    /// Current password value, `None` when the page has no password field.
    pub password: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub fn with_password(password: &'a str) -> Self {
        Self {
            password: Some(password),
        }
    }
}

/// A field rule.
pub type Rule = fn(&str, &RuleContext<'_>) -> RuleResult;

pub fn email(value: &str, _cx: &RuleContext<'_>) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(RuleError::EmailFormat);
    }
    Ok(())
}

pub fn country(value: &str, _cx: &RuleContext<'_>) -> RuleResult {
    if value.trim().is_empty() {
        return Err(RuleError::CountryRequired);
    }
    Ok(())
}

pub fn zip(value: &str, _cx: &RuleContext<'_>) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::ZipRequired);
    }
    if !ZIP_RE.is_match(value) {
        return Err(RuleError::ZipFormat);
    }
    Ok(())
}

pub fn password(value: &str, _cx: &RuleContext<'_>) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(RuleError::PasswordTooShort);
    }
    Ok(())
}

pub fn confirm_password(value: &str, cx: &RuleContext<'_>) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::ConfirmRequired);
    }
    match cx.password {
        Some(password) if password != value => Err(RuleError::PasswordMismatch),
        _ => Ok(()),
    }
}

impl FieldKind {
    /// The rule attached to this field.
    pub fn rule(self) -> Rule {
        match self {
            Self::Email => email,
            Self::Country => country,
            Self::Zip => zip,
            Self::Password => password,
            Self::ConfirmPassword => confirm_password,
        }
    }

    /// Prepare a raw field value (trimming where the field calls for it)
    /// and run the field's rule on it.
    pub fn check(self, raw: &str, cx: &RuleContext<'_>) -> RuleResult {
        let value = if self.trims_input() { raw.trim() } else { raw };
        (self.rule())(value, cx)
    }
}
