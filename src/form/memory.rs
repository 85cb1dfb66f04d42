//! In-memory form document.
//!
//! Holds just enough element state for the pricers: a value, a checked flag and
//! text content per id. The server renders initial prices through it and the
//! tests drive the pricers with it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::FormDocument;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryElement {
    value: String,
    checked: bool,
    text: String,
}

/// A page made of named elements
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, MemoryElement>>,
    writes: Cell<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a select control with the given selected value
    pub fn with_select(self, id: &str, value: &str) -> Self {
        self.with_input(id, value)
    }

    /// Add a text/number/hidden input with the given value
    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.elements.borrow_mut().insert(
            id.to_string(),
            MemoryElement {
                value: value.to_string(),
                ..MemoryElement::default()
            },
        );
        self
    }

    pub fn with_checkbox(self, id: &str, checked: bool) -> Self {
        self.elements.borrow_mut().insert(
            id.to_string(),
            MemoryElement {
                checked,
                ..MemoryElement::default()
            },
        );
        self
    }

    /// Add an element that only receives text
    pub fn with_output(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), MemoryElement::default());
        self
    }

    /// Simulate the user editing a control. Returns false if the element is absent.
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Simulate the user toggling a checkbox. Returns false if the element is absent.
    pub fn set_checked(&self, id: &str, checked: bool) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Text content of an element
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|e| e.text.clone())
    }

    /// Value of a form field
    pub fn value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|e| e.value.clone())
    }

    /// Number of writes that landed on an existing element
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl FormDocument for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn read_value(&self, id: &str) -> Option<String> {
        self.value(id)
    }

    fn read_checked(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).map(|e| e.checked)
    }

    fn write_text(&self, id: &str, text: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(id) {
            element.text = text.to_string();
            self.writes.set(self.writes.get() + 1);
        }
    }

    fn write_value(&self, id: &str, value: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(id) {
            element.value = value.to_string();
            self.writes.set(self.writes.get() + 1);
        }
    }
}
