//! Environment seams for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only needs three things from its host: string storage, the
//! system color-scheme signal, and a document with a root class list and
//! elements addressable by id. Browser bindings live in `util::browser`; the
//! in-memory versions here back the tests.

#[cfg(test)]
#[path = "theme_env_test.rs"]
mod theme_env_test;

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Class used to hide an icon element.
pub const HIDDEN_CLASS: &str = "hidden";

/// Key-value preference storage. Writes are best-effort.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Read-only system color-scheme signal.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// The slice of the DOM the controller touches.
pub trait ThemeDocument {
    fn root_has_class(&self, class: &str) -> bool;
    fn set_root_class(&self, class: &str, present: bool);
    fn has_element(&self, id: &str) -> bool;
    /// Add or remove the hidden class on element `id`; no-op if absent.
    fn set_element_hidden(&self, id: &str, hidden: bool);
}

/// Storage backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// System signal fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme {
    pub prefers_dark: bool,
}

impl FixedScheme {
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    pub fn light() -> Self {
        Self { prefers_dark: false }
    }
}

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// Document with a root class set and a flat map of elements by id.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    root_classes: RefCell<BTreeSet<String>>,
    elements: RefCell<HashMap<String, BTreeSet<String>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element with no classes.
    #[must_use]
    pub fn with_element(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_owned(), BTreeSet::new());
        self
    }

    #[must_use]
    pub fn with_root_class(self, class: &str) -> Self {
        self.root_classes.borrow_mut().insert(class.to_owned());
        self
    }

    /// Whether element `id` carries the hidden class, `None` if absent.
    pub fn is_hidden(&self, id: &str) -> Option<bool> {
        self.elements
            .borrow()
            .get(id)
            .map(|classes| classes.contains(HIDDEN_CLASS))
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_element_hidden(&self, id: &str, hidden: bool) {
        if let Some(classes) = self.elements.borrow_mut().get_mut(id) {
            if hidden {
                classes.insert(HIDDEN_CLASS.to_owned());
            } else {
                classes.remove(HIDDEN_CLASS);
            }
        }
    }
}
