//! Simple CSS selectors: `tag`, `.class`, `#id` and compounds like `input.email`.

use std::fmt;
use std::str::FromStr;

use crate::element::{descendants, Element};

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector was empty or whitespace.
    #[error("Selector is empty")]
    Empty,

    /// A `.` or `#` was not followed by a name.
    #[error("Selector '{selector}' has a '.' or '#' without a name")]
    MissingName { selector: String },

    /// The selector uses syntax beyond simple compounds.
    #[error("Selector '{selector}' uses unsupported syntax '{found}'")]
    Unsupported { selector: String, found: char },
}

/// A parsed compound selector. All parts must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn name_len(s: &str) -> usize {
    s.find(|c: char| !is_name_char(c)).unwrap_or(s.len())
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();

        let tag_len = name_len(input);
        if tag_len > 0 {
            selector.tag = Some(input[..tag_len].to_ascii_lowercase());
        }

        let mut rest = &input[tag_len..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let len = name_len(body);
            let name = &body[..len];

            match marker {
                '.' | '#' if name.is_empty() => {
                    return Err(SelectorError::MissingName {
                        selector: input.to_string(),
                    });
                }
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                other => {
                    return Err(SelectorError::Unsupported {
                        selector: input.to_string(),
                        found: other,
                    });
                }
            }

            rest = &body[len..];
        }

        Ok(selector)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self {
            classes: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// First descendant of `scope` (document order) matching `selector`.
pub fn query_selector<'a>(scope: &'a Element, selector: &Selector) -> Option<&'a Element> {
    descendants(scope).into_iter().find(|el| selector.matches(el))
}

/// All descendants of `scope` matching `selector`, in document order.
pub fn query_selector_all<'a>(scope: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    descendants(scope)
        .into_iter()
        .filter(|el| selector.matches(el))
        .collect()
}
