//! Translation run orchestration.

use edmx_ts_schema::MetadataDocument;

use crate::options::GeneratorOptions;
use crate::primitives::PrimitiveTypeTable;
use crate::resolver::TypeResolver;
use crate::typescript::{AliasGenerator, NamespaceGenerator};

/// TypeScript declaration generator for a metadata document.
///
/// Every call to [`Generator::generate`] is an independent run with its own
/// [`PrimitiveTypeTable`], so repeated runs produce identical output.
pub struct Generator<'a> {
    document: &'a MetadataDocument,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(document: &'a MetadataDocument) -> Self {
        Self {
            document,
            options: GeneratorOptions::default(),
        }
    }

    /// Replaces the generator options.
    #[must_use]
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the declarations followed by the primitive namespace.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut table = PrimitiveTypeTable::with_fallback(self.options.fallback_type.clone());
        self.generate_with_table(&mut table)
    }

    /// Generates using a caller-provided table.
    ///
    /// Primitives discovered during the walk are added to `table` before the
    /// primitive namespace is emitted from it.
    pub fn generate_with_table(&self, table: &mut PrimitiveTypeTable) -> String {
        let mut output = {
            let mut resolver = TypeResolver::new(table, &self.options);
            NamespaceGenerator::new(&self.document.schemas).generate(&mut resolver)
        };

        output.push_str(&AliasGenerator::new(table, &self.options.primitive_namespace).generate());

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PrimitiveStyle;
    use edmx_ts_schema::{ComplexType, Property, Schema};

    fn document() -> MetadataDocument {
        let mut complex = ComplexType::new("Shape");
        complex.add_property(Property::new("Area", "Edm.Double").with_nullable(false));
        complex.add_property(Property::new("Outline", "Edm.GeographyPolygon"));
        let mut schema = Schema::new("Geo");
        schema.add_complex_type(complex);
        let mut doc = MetadataDocument::new("4.0");
        doc.add_schema(schema);
        doc
    }

    #[test]
    fn test_generate_appends_primitive_namespace() {
        let doc = document();
        let output = Generator::new(&doc).generate();

        assert!(output.starts_with("namespace Geo {\nexport interface Shape {\n"));
        assert!(output.contains("Area: number;\n"));
        assert!(output.contains("Outline?: any;\n"));
        assert!(output.contains("}\n\nnamespace Edm {\n"));
        assert!(output.ends_with("export type GeographyPolygon = any;\n}"));
    }

    #[test]
    fn test_generate_is_repeatable() {
        let doc = document();
        let generator = Generator::new(&doc);
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first, second);
        assert_eq!(first.matches("GeographyPolygon = any").count(), 1);
    }

    #[test]
    fn test_generate_with_options() {
        let doc = document();
        let options = GeneratorOptions::new()
            .primitive_style(PrimitiveStyle::Qualified)
            .primitive_namespace("T")
            .fallback_type("unknown");
        let generator = Generator::new(&doc).with_options(options);
        let output = generator.generate();

        assert_eq!(generator.options().primitive_namespace, "T");
        assert!(output.contains("Area: T.Double;\n"));
        assert!(output.contains("Outline?: T.GeographyPolygon;\n"));
        assert!(output.contains("namespace T {\n"));
        assert!(output.contains("export type GeographyPolygon = unknown;\n"));
    }

    #[test]
    fn test_generate_with_table_records_discoveries() {
        let doc = document();
        let mut table = PrimitiveTypeTable::new();
        let _ = Generator::new(&doc).generate_with_table(&mut table);
        assert_eq!(table.lookup("GeographyPolygon"), Some("any"));
        assert_eq!(table.len(), 17);
    }
}
