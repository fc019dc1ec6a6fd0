//! Document style sinks.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Document-scoped style state, the equivalent of
/// `document.documentElement.style`.
///
/// Takes `&self`: the document is shared and mutated in place by whoever
/// holds it.
pub trait DocumentStyle {
    fn set_property(&self, name: &str, value: &str);
}

/// In-memory document root style. Clones share the same properties.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    properties: Rc<RefCell<BTreeMap<String, String>>>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.properties.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Copy of every property currently set.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties.borrow().clone()
    }
}

impl DocumentStyle for StyleMap {
    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}
