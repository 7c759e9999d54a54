//! Primitive namespace generation.

use crate::primitives::PrimitiveTypeTable;

/// Generator for the primitive alias namespace.
pub struct AliasGenerator<'a> {
    table: &'a PrimitiveTypeTable,
    namespace: &'a str,
}

impl<'a> AliasGenerator<'a> {
    /// Creates a new alias generator over a finished primitive table.
    #[must_use]
    pub fn new(table: &'a PrimitiveTypeTable, namespace: &'a str) -> Self {
        Self { table, namespace }
    }

    /// Generates the namespace block with one alias per table entry, in
    /// table order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!("namespace {} {{\n", self.namespace));
        for (name, target) in self.table.entries() {
            output.push_str(&format!("export type {} = {};\n", name, target));
        }
        output.push('}');

        output
    }
}
