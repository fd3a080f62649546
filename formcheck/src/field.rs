use std::fmt;

/// The fields the engine knows about, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Email,
    Country,
    Zip,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    /// Every field, in the order a full validation pass visits them.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Email,
        FieldKind::Country,
        FieldKind::Zip,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Selector used to find the field when none is configured.
    pub fn default_selector(self) -> &'static str {
        match self {
            Self::Email => ".email",
            Self::Country => ".country",
            Self::Zip => ".zip",
            Self::Password => ".pass",
            Self::ConfirmPassword => ".conf-pass",
        }
    }

    /// Whether surrounding whitespace is stripped before the rule runs.
    /// Passwords are checked exactly as typed.
    pub fn trims_input(self) -> bool {
        !matches!(self, Self::Password | Self::ConfirmPassword)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visual validity of a field, as shown by its class list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    /// Neither `valid` nor `invalid` is set.
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}
