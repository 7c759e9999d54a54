//! Interface declaration generation for entity and complex types.

use edmx_ts_schema::{ComplexType, EntityType, Member};

use crate::resolver::TypeResolver;

/// Generator for interface declarations.
pub struct InterfaceGenerator;

impl InterfaceGenerator {
    /// Creates a new interface generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates an interface for an entity type: properties first, then
    /// navigation properties.
    pub fn generate_entity(&self, entity: &EntityType, resolver: &mut TypeResolver<'_>) -> String {
        self.generate_interface(&entity.name, &entity.members(), resolver)
    }

    /// Generates an interface for a complex type.
    pub fn generate_complex(
        &self,
        complex: &ComplexType,
        resolver: &mut TypeResolver<'_>,
    ) -> String {
        self.generate_interface(&complex.name, &complex.members(), resolver)
    }

    fn generate_interface(
        &self,
        name: &str,
        members: &[Member<'_>],
        resolver: &mut TypeResolver<'_>,
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!("export interface {} {{\n", name));
        for member in members {
            output.push_str(&self.generate_member(member, resolver));
        }
        output.push_str("}\n");

        output
    }

    /// Generates a single member line: `<Name>[?]: <Type>;`.
    pub fn generate_member(&self, member: &Member<'_>, resolver: &mut TypeResolver<'_>) -> String {
        let marker = if member.is_optional() { "?" } else { "" };
        let type_expr = resolver.resolve(member.type_name());
        format!("{}{}: {};\n", member.name(), marker, type_expr)
    }
}

impl Default for InterfaceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GeneratorOptions;
    use crate::primitives::PrimitiveTypeTable;
    use edmx_ts_schema::{NavigationProperty, Property};

    #[test]
    fn test_generate_member_optionality() {
        let options = GeneratorOptions::default();
        let mut table = PrimitiveTypeTable::new();
        let mut resolver = TypeResolver::new(&mut table, &options);
        let generator = InterfaceGenerator::new();

        let required = Property::new("Id", "Edm.Guid").with_nullable(false);
        let nullable = Property::new("Name", "Edm.String").with_nullable(true);
        let absent = Property::new("Tags", "Collection(Edm.String)");

        assert_eq!(
            generator.generate_member(&Member::Property(&required), &mut resolver),
            "Id: string;\n"
        );
        assert_eq!(
            generator.generate_member(&Member::Property(&nullable), &mut resolver),
            "Name?: string;\n"
        );
        assert_eq!(
            generator.generate_member(&Member::Property(&absent), &mut resolver),
            "Tags?: string[];\n"
        );
    }

    #[test]
    fn test_navigation_forced_optional() {
        let options = GeneratorOptions::default();
        let mut table = PrimitiveTypeTable::new();
        let mut resolver = TypeResolver::new(&mut table, &options);

        let mut nav = NavigationProperty::new("Owner", "NS.User");
        nav.nullable = Some(false);

        let line =
            InterfaceGenerator::new().generate_member(&Member::Navigation(&nav), &mut resolver);
        assert_eq!(line, "Owner?: NS.User;\n");
    }

    #[test]
    fn test_generate_entity() {
        let options = GeneratorOptions::default();
        let mut table = PrimitiveTypeTable::new();
        let mut resolver = TypeResolver::new(&mut table, &options);

        let mut entity = EntityType::new("Order");
        entity.add_key_ref("Id");
        entity.add_property(Property::new("Id", "Edm.Int64").with_nullable(false));
        entity.add_navigation_property(NavigationProperty::new("Lines", "Collection(NS.Line)"));
        entity.add_property(Property::new("Total", "Edm.Decimal"));

        let output = InterfaceGenerator::new().generate_entity(&entity, &mut resolver);
        assert_eq!(
            output,
            "export interface Order {\nId: number;\nTotal?: number;\nLines?: NS.Line[];\n}\n"
        );
    }

    #[test]
    fn test_generate_empty_complex() {
        let options = GeneratorOptions::default();
        let mut table = PrimitiveTypeTable::new();
        let mut resolver = TypeResolver::new(&mut table, &options);

        let output =
            InterfaceGenerator::new().generate_complex(&ComplexType::new("Empty"), &mut resolver);
        assert_eq!(output, "export interface Empty {\n}\n");
    }
}
