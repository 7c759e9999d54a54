//! Type reference resolution.
//!
//! Turns raw OData type references (`Edm.String`, `NS.Customer`,
//! `Collection(Edm.Int32)`) into TypeScript type expressions, registering
//! every EDM primitive it meets in the run's [`PrimitiveTypeTable`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{GeneratorOptions, PrimitiveStyle};
use crate::primitives::PrimitiveTypeTable;

/// Namespace prefix of EDM primitive references in metadata documents.
pub const EDM_PREFIX: &str = "Edm.";

static COLLECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Collection\((.+)\)$").expect("collection pattern is valid"));

/// A raw type reference split into its element type and collection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a> {
    /// Element type reference, as written.
    pub element: &'a str,
    /// Whether the reference was wrapped in `Collection(...)`.
    pub is_collection: bool,
}

impl<'a> TypeRef<'a> {
    /// Parses a raw type reference.
    ///
    /// Input that starts with `Collection(` but does not match the full
    /// pattern is kept as a single opaque element name.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match COLLECTION_PATTERN
            .captures(raw)
            .and_then(|caps| caps.get(1))
        {
            Some(inner) => Self {
                element: inner.as_str(),
                is_collection: true,
            },
            None => Self {
                element: raw,
                is_collection: false,
            },
        }
    }

    /// Returns the short primitive name if the element is `Edm.<Name>`.
    #[must_use]
    pub fn primitive_name(&self) -> Option<&'a str> {
        self.element
            .strip_prefix(EDM_PREFIX)
            .filter(|name| !name.is_empty())
    }
}

/// Resolves type references against a run's primitive table.
pub struct TypeResolver<'t> {
    table: &'t mut PrimitiveTypeTable,
    options: &'t GeneratorOptions,
}

impl<'t> TypeResolver<'t> {
    /// Creates a resolver that registers primitives into `table`.
    pub fn new(table: &'t mut PrimitiveTypeTable, options: &'t GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Resolves a raw type reference to the emitted type expression.
    pub fn resolve(&mut self, raw: &str) -> String {
        let type_ref = TypeRef::parse(raw);
        let element = self.resolve_element(&type_ref);

        if type_ref.is_collection {
            format!("{}[]", element)
        } else {
            element
        }
    }

    /// Resolves the element part of a reference.
    ///
    /// Empty and non-primitive references are returned verbatim.
    fn resolve_element(&mut self, type_ref: &TypeRef<'_>) -> String {
        let Some(name) = type_ref.primitive_name() else {
            return type_ref.element.to_string();
        };

        let target = self.table.ensure(name);
        match self.options.primitive_style {
            PrimitiveStyle::Inline => target.to_string(),
            PrimitiveStyle::Qualified => {
                format!("{}.{}", self.options.primitive_namespace, name)
            }
        }
    }
}
