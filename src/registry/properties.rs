//! Property registries
//!
//! Hosts declare which named properties may appear in update events and
//! which value type each carries. The refinement checks consult these
//! tables; a name missing from its table is a validation failure, never a
//! silent pass.

use std::collections::HashMap;

use super::types::PropertyType;

/// A lookup table from property name to declared type.
///
/// Populated by the host at startup and treated as immutable by the
/// checks that hold one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRegistry {
    entries: HashMap<String, PropertyType>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property, replacing any previous declaration.
    pub fn register(&mut self, name: impl Into<String>, property_type: PropertyType) {
        self.entries.insert(name.into(), property_type);
    }

    /// Looks up a property's declared type.
    pub fn get(&self, name: &str) -> Option<PropertyType> {
        self.entries.get(name).copied()
    }

    /// Returns the number of declared properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, PropertyType)> for PropertyRegistry {
    fn from_iter<I: IntoIterator<Item = (S, PropertyType)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, property_type) in iter {
            registry.register(name, property_type);
        }
        registry
    }
}
