//! Primitive type table.
//!
//! Maps EDM primitive short names (`Guid`, `Int32`, ...) to TypeScript
//! primitive types. The table is owned by a single translation run: it is
//! seeded with the OData built-ins, grows when resolution meets an unknown
//! primitive, and is read once to emit the primitive namespace.

use indexmap::IndexMap;

use crate::options::DEFAULT_FALLBACK_TYPE;

/// OData v4 built-in scalar types and their TypeScript counterparts.
pub const BUILTIN_PRIMITIVES: [(&str, &str); 16] = [
    ("Duration", "string"),
    ("Binary", "string"),
    ("Boolean", "boolean"),
    ("Byte", "number"),
    ("Date", "string"),
    ("DateTimeOffset", "string"),
    ("Decimal", "number"),
    ("Double", "number"),
    ("Guid", "string"),
    ("Int16", "number"),
    ("Int32", "number"),
    ("Int64", "number"),
    ("SByte", "number"),
    ("Single", "number"),
    ("String", "string"),
    ("TimeOfDay", "string"),
];

/// Run-scoped mapping from primitive name to target type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveTypeTable {
    entries: IndexMap<String, String>,
    fallback: String,
}

impl Default for PrimitiveTypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitiveTypeTable {
    /// Creates a table seeded with the built-ins and the `any` fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FALLBACK_TYPE)
    }

    /// Creates a table seeded with the built-ins and a custom fallback.
    #[must_use]
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        let entries = BUILTIN_PRIMITIVES
            .iter()
            .map(|(name, target)| ((*name).to_string(), (*target).to_string()))
            .collect();

        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    /// Looks up the target type of a primitive.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the target type of a primitive, registering it with the
    /// fallback type the first time it is seen.
    pub fn ensure(&mut self, name: &str) -> &str {
        if !self.entries.contains_key(name) {
            tracing::debug!(
                "Registering unknown primitive '{}' as '{}'",
                name,
                self.fallback
            );
            self.entries.insert(name.to_string(), self.fallback.clone());
        }
        self.entries
            .get(name)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, target)| (name.as_str(), target.as_str()))
    }

    /// Returns the fallback type.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
