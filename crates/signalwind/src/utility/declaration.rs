//! CSS declarations.

use serde::Serialize;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Appends declarations, letting a later value for a property replace the
/// earlier one in place of appending a second copy.
pub fn merge_declarations(target: &mut Vec<Declaration>, incoming: &[Declaration]) {
    for declaration in incoming {
        target.retain(|existing| existing.property != declaration.property);
        target.push(declaration.clone());
    }
}
