use crate::element::{self, find_element, find_element_mut, Content, Element};
use crate::event::Event;
use crate::selector::{self, Selector};

/// An element tree plus the document-wide state that lives outside it (focus).
///
/// Every operation addresses elements by id. Unknown ids are tolerated:
/// mutators return `false` and readers return `None`.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    focused: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focused: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn with_element<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        match find_element_mut(&mut self.root, id) {
            Some(el) => {
                f(el);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Id of the first element in the document matching `selector`.
    ///
    /// The root element itself is a candidate, like the document element.
    pub fn query_selector(&self, selector: &Selector) -> Option<String> {
        if selector.matches(&self.root) {
            return Some(self.root.id.clone());
        }
        selector::query_selector(&self.root, selector).map(|el| el.id.clone())
    }

    /// Like [`query_selector`](Self::query_selector) but limited to the
    /// descendants of `scope`.
    pub fn query_selector_within(&self, scope: &str, selector: &Selector) -> Option<String> {
        let scope = self.get(scope)?;
        selector::query_selector(scope, selector).map(|el| el.id.clone())
    }

    pub fn next_element_sibling(&self, id: &str) -> Option<&Element> {
        element::next_element_sibling(&self.root, id)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Insert `element` right after `reference`. Returns the new element's id.
    pub fn insert_after(&mut self, reference: &str, element: Element) -> Option<String> {
        let id = element.id.clone();
        if element::insert_after(&mut self.root, reference, element) {
            log::trace!("inserted {id} after {reference}");
            Some(id)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Class list
    // -------------------------------------------------------------------------

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.with_element(id, |el| {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        })
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.with_element(id, |el| el.classes.retain(|c| c != class))
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.attribute(name)
    }

    pub fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        self.with_element(id, |el| {
            el.attributes.insert(name.to_string(), value.to_string());
        })
    }

    pub fn remove_attribute(&mut self, id: &str, name: &str) -> bool {
        self.with_element(id, |el| {
            el.attributes.remove(name);
        })
    }

    // -------------------------------------------------------------------------
    // Values and text
    // -------------------------------------------------------------------------

    pub fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(|el| el.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        self.with_element(id, |el| el.value = value.to_string())
    }

    /// Set a value the way a user would, returning the resulting input event.
    pub fn input(&mut self, id: &str, value: &str) -> Option<Event> {
        self.set_value(id, value).then(|| Event::input(id))
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.get(id).map(|el| el.content.text())
    }

    /// Replace the element's content with a single text node.
    pub fn set_text_content(&mut self, id: &str, text: &str) -> bool {
        self.with_element(id, |el| {
            el.content = if text.is_empty() {
                Content::None
            } else {
                Content::Text(text.to_string())
            };
        })
    }

    /// Restore a single element's value to its default.
    pub fn reset_value(&mut self, id: &str) -> bool {
        self.with_element(id, |el| el.value = el.default_value.clone())
    }

    /// Restore every input under `form` to its default value.
    pub fn reset_form(&mut self, form: &str) -> bool {
        fn reset(el: &mut Element) {
            if let Content::Children(children) = &mut el.content {
                for child in children.iter_mut() {
                    if child.is_input() {
                        child.value = child.default_value.clone();
                    }
                    reset(child);
                }
            }
        }

        let found = self.with_element(form, reset);
        if found {
            log::debug!("reset form {form}");
        }
        found
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Id of the focused element, if any.
    pub fn active_element(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id`. Returns false if the element does not exist.
    pub fn focus(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.focused.as_deref() != Some(id) {
            log::trace!("focus -> {id}");
            self.focused = Some(id.to_string());
        }
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }
}
