use crate::field::FieldKind;
use crate::rules::RuleError;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Which field failed.
    pub field: FieldKind,
    /// Element id of the field (for focusing).
    pub element_id: String,
    /// The failed rule.
    pub error: RuleError,
}

impl FieldError {
    /// Inline message for this error.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Result of validating every present field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in validation order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Element id of the first invalid field.
    pub fn first_invalid_element(&self) -> Option<&str> {
        self.first_error().map(|e| e.element_id.as_str())
    }

    /// The error recorded for `field`, if it failed.
    pub fn error_for(&self, field: FieldKind) -> Option<RuleError> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.error)
    }
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}
