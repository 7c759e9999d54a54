//! Metadata model definitions.
//!
//! This module contains the data structures representing an OData v4
//! metadata document: schemas, structured types, enumerations and their
//! properties.

/// The OData version accepted by the translator.
pub const SUPPORTED_VERSION: &str = "4.0";

/// Root of a parsed `$metadata` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDocument {
    /// Value of the `Version` attribute on `edmx:Edmx`.
    pub version: String,
    /// Schemas declared under `edmx:DataServices`, in source order.
    pub schemas: Vec<Schema>,
}

impl MetadataDocument {
    /// Creates an empty document with the given version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            schemas: Vec::new(),
        }
    }

    /// Adds a schema to the document.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas.push(schema);
    }

    /// Returns true if the declared version is the supported one.
    #[must_use]
    pub fn is_supported_version(&self) -> bool {
        self.version == SUPPORTED_VERSION
    }
}

/// A named grouping of type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Namespace identifier, emitted as the namespace block name.
    pub namespace: String,
    /// Entity types.
    pub entity_types: Vec<EntityType>,
    /// Complex types.
    pub complex_types: Vec<ComplexType>,
    /// Enumeration types.
    pub enum_types: Vec<EnumType>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Adds an entity type.
    pub fn add_entity_type(&mut self, entity_type: EntityType) {
        self.entity_types.push(entity_type);
    }

    /// Adds a complex type.
    pub fn add_complex_type(&mut self, complex_type: ComplexType) {
        self.complex_types.push(complex_type);
    }

    /// Adds an enumeration type.
    pub fn add_enum_type(&mut self, enum_type: EnumType) {
        self.enum_types.push(enum_type);
    }
}

/// Structured record type without key or navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexType {
    /// Type name.
    pub name: String,
    /// Structural properties.
    pub properties: Vec<Property>,
}

impl ComplexType {
    /// Creates a new complex type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Returns the members in emission order.
    #[must_use]
    pub fn members(&self) -> Vec<Member<'_>> {
        self.properties.iter().map(Member::Property).collect()
    }
}

/// Entity type: a complex type shape plus key and navigation properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityType {
    /// Type name.
    pub name: String,
    /// Key property names (`Key/PropertyRef@Name`). Not used in emission.
    pub key: Option<Vec<String>>,
    /// Structural properties.
    pub properties: Vec<Property>,
    /// Navigation properties.
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    /// Creates a new entity type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Adds a navigation property.
    pub fn add_navigation_property(&mut self, property: NavigationProperty) {
        self.navigation_properties.push(property);
    }

    /// Adds a key property reference.
    pub fn add_key_ref(&mut self, name: impl Into<String>) {
        self.key.get_or_insert_with(Vec::new).push(name.into());
    }

    /// Returns the members in emission order: properties, then navigation
    /// properties, each in source order.
    #[must_use]
    pub fn members(&self) -> Vec<Member<'_>> {
        self.properties
            .iter()
            .map(Member::Property)
            .chain(self.navigation_properties.iter().map(Member::Navigation))
            .collect()
    }
}

/// Structural property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Raw type reference, e.g. `Edm.String` or `Collection(NS.Type)`.
    pub type_name: String,
    /// Declared nullability. `None` when the attribute is absent.
    pub nullable: Option<bool>,
}

impl Property {
    /// Creates a property with no declared nullability.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable: None,
        }
    }

    /// Sets the declared nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }
}

/// Relationship to another entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationProperty {
    /// Property name.
    pub name: String,
    /// Raw type reference.
    pub type_name: String,
    /// Declared nullability. Ignored by emission.
    pub nullable: Option<bool>,
    /// Partner navigation property on the target type.
    pub partner: Option<String>,
    /// Referential constraints.
    pub referential_constraints: Vec<ReferentialConstraint>,
}

impl NavigationProperty {
    /// Creates a navigation property.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Foreign-key style pairing on a navigation property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferentialConstraint {
    /// Dependent property.
    pub property: String,
    /// Principal property.
    pub referenced_property: String,
}

/// Enumeration type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumType {
    /// Creates an enumeration type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: EnumMember) {
        self.members.push(member);
    }
}

/// Enumeration member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Integer value.
    pub value: i64,
}

impl EnumMember {
    /// Creates an enumeration member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A member of a structured type, tagged by kind.
///
/// The kind is fixed when the document is parsed, so emission never has to
/// guess whether a property is a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    /// Structural property.
    Property(&'a Property),
    /// Navigation property.
    Navigation(&'a NavigationProperty),
}

impl<'a> Member<'a> {
    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Property(p) => &p.name,
            Self::Navigation(n) => &n.name,
        }
    }

    /// Returns the raw type reference.
    #[must_use]
    pub fn type_name(&self) -> &'a str {
        match self {
            Self::Property(p) => &p.type_name,
            Self::Navigation(n) => &n.type_name,
        }
    }

    /// Returns true if the member is emitted with an optionality marker.
    ///
    /// Navigation properties are always optional. A property is required only
    /// when `Nullable="false"` is declared.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Property(p) => p.nullable.unwrap_or(true),
            Self::Navigation(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_optionality() {
        let absent = Property::new("A", "Edm.String");
        let nullable = Property::new("B", "Edm.String").with_nullable(true);
        let required = Property::new("C", "Edm.String").with_nullable(false);

        assert!(Member::Property(&absent).is_optional());
        assert!(Member::Property(&nullable).is_optional());
        assert!(!Member::Property(&required).is_optional());
    }

    #[test]
    fn test_navigation_always_optional() {
        let mut nav = NavigationProperty::new("Orders", "Collection(NS.Order)");
        nav.nullable = Some(false);
        let member = Member::Navigation(&nav);
        assert!(member.is_optional());
        assert_eq!(member.type_name(), "Collection(NS.Order)");
    }

    #[test]
    fn test_entity_members_order() {
        let mut entity = EntityType::new("Customer");
        entity.add_navigation_property(NavigationProperty::new("Orders", "NS.Order"));
        entity.add_property(Property::new("Id", "Edm.Int32"));
        entity.add_property(Property::new("Name", "Edm.String"));

        let names: Vec<_> = entity.members().iter().map(Member::name).collect();
        assert_eq!(names, vec!["Id", "Name", "Orders"]);
    }

    #[test]
    fn test_add_key_ref() {
        let mut entity = EntityType::new("Customer");
        assert!(entity.key.is_none());
        entity.add_key_ref("Id");
        entity.add_key_ref("Region");
        assert_eq!(
            entity.key,
            Some(vec!["Id".to_string(), "Region".to_string()])
        );
    }

    #[test]
    fn test_document_version() {
        assert!(MetadataDocument::new("4.0").is_supported_version());
        assert!(!MetadataDocument::new("4.01").is_supported_version());
        assert!(!MetadataDocument::default().is_supported_version());
    }
}
