/// What happened to the target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The value of an input changed.
    Input,
    /// A form was submitted.
    Submit,
}

/// A document event with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: String,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            default_prevented: false,
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::new(EventKind::Input, target)
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::new(EventKind::Submit, target)
    }

    /// Cancel the host's default action (e.g. a native form submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
