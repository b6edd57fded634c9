//! Page model
//!
//! The device's configuration pages address everything by element id. The
//! [`Page`] trait captures the handful of DOM operations the fillers need;
//! [`Document`] is an in-memory page used by the CLI and the tests.

use std::collections::BTreeMap;

/// DOM operations used by the page fillers
///
/// Setters return `false` and leave the page untouched when no element has
/// the given id.
pub trait Page {
    fn contains(&self, id: &str) -> bool;

    /// Set the form value of an element
    fn set_value(&mut self, id: &str, value: &str) -> bool;

    /// Replace the inner markup of an element
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Replace the content of an element with plain text
    fn set_inner_text(&mut self, id: &str, text: &str) -> bool;

    /// Set the page background color
    fn set_background(&mut self, color: &str);
}

/// A single page element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub inner_html: String,
}

/// In-memory page with a fixed set of element ids
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    background: Option<String>,
    mutations: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document containing empty elements with the given ids
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), Element::default()))
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Add an empty element; page construction does not count as a mutation
    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements.iter().map(|(id, element)| (id.as_str(), element))
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Number of changes made through the [`Page`] trait
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut Element)) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                apply(element);
                self.mutations += 1;
                true
            }
            None => false,
        }
    }
}

impl Page for Document {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        self.update(id, |element| element.value = value.to_string())
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        self.update(id, |element| element.inner_html = html.to_string())
    }

    fn set_inner_text(&mut self, id: &str, text: &str) -> bool {
        self.update(id, |element| element.inner_html = escape_html(text))
    }

    fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
        self.mutations += 1;
    }
}

/// Escape text so it renders literally inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
