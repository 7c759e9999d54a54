//! Namespace block generation for metadata schemas.

use edmx_ts_schema::Schema;

use super::enums::EnumGenerator;
use super::interfaces::InterfaceGenerator;
use crate::resolver::TypeResolver;

/// Generator for one namespace block per schema.
pub struct NamespaceGenerator<'a> {
    schemas: &'a [Schema],
}

impl<'a> NamespaceGenerator<'a> {
    /// Creates a new namespace generator.
    #[must_use]
    pub fn new(schemas: &'a [Schema]) -> Self {
        Self { schemas }
    }

    /// Generates all namespace blocks, in schema order.
    pub fn generate(&self, resolver: &mut TypeResolver<'_>) -> String {
        let mut output = String::new();

        for schema in self.schemas {
            output.push_str(&self.generate_schema(schema, resolver));
        }

        output
    }

    /// Generates a namespace block: entity types, then complex types, then
    /// enum types.
    fn generate_schema(&self, schema: &Schema, resolver: &mut TypeResolver<'_>) -> String {
        let mut output = String::new();
        let interfaces = InterfaceGenerator::new();
        let enums = EnumGenerator::new();

        tracing::debug!(
            "Generating namespace '{}' ({} entity, {} complex, {} enum types)",
            schema.namespace,
            schema.entity_types.len(),
            schema.complex_types.len(),
            schema.enum_types.len()
        );

        output.push_str(&format!("namespace {} {{\n", schema.namespace));
        for entity in &schema.entity_types {
            output.push_str(&interfaces.generate_entity(entity, resolver));
        }
        for complex in &schema.complex_types {
            output.push_str(&interfaces.generate_complex(complex, resolver));
        }
        for enum_type in &schema.enum_types {
            output.push_str(&enums.generate_enum(enum_type));
        }
        output.push_str("}\n");

        output
    }
}
