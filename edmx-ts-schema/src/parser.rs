//! OData v4 EDMX metadata parser.
//!
//! This module parses a `$metadata` document into the in-memory
//! [`MetadataDocument`] model. Only the elements relevant to type generation
//! are read; everything else (entity containers, actions, annotations, ...)
//! is skipped along with its subtree.

use crate::error::ParseError;
use crate::types::{
    ComplexType, EntityType, EnumMember, EnumType, MetadataDocument, NavigationProperty,
    Property, ReferentialConstraint, Schema,
};
use quick_xml::Reader;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};

/// Parses an EDMX metadata document from a string.
///
/// # Arguments
/// * `xml` - `$metadata` XML content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, if the `edmx:Edmx` root or
/// its `edmx:DataServices` child is missing, or if a property or enum member
/// carries missing or invalid attributes.
pub fn parse_metadata(xml: &str) -> Result<MetadataDocument, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if local_name(e)? != "Edmx" {
                    break;
                }
                let version = attribute(e, "Version")?.unwrap_or_default();
                let mut document = MetadataDocument::new(version);
                parse_edmx(&mut reader, &mut document)?;
                return Ok(document);
            }
            Ok(Event::Empty(ref e)) => {
                if local_name(e)? == "Edmx" {
                    return Err(ParseError::missing_element("edmx:DataServices"));
                }
                break;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(ParseError::missing_element("edmx:Edmx"))
}

/// Parses the children of `edmx:Edmx`. Only the first `DataServices` is read.
fn parse_edmx(
    reader: &mut Reader<&[u8]>,
    document: &mut MetadataDocument,
) -> Result<(), ParseError> {
    let mut seen_data_services = false;

    for_each_child(reader, |reader, e, has_body| {
        if seen_data_services || local_name(e)? != "DataServices" {
            return Ok(false);
        }
        seen_data_services = true;
        if has_body {
            parse_data_services(reader, document)?;
        }
        Ok(true)
    })?;

    if seen_data_services {
        Ok(())
    } else {
        Err(ParseError::missing_element("edmx:DataServices"))
    }
}

/// Parses the schemas under `edmx:DataServices`.
fn parse_data_services(
    reader: &mut Reader<&[u8]>,
    document: &mut MetadataDocument,
) -> Result<(), ParseError> {
    for_each_child(reader, |reader, e, has_body| {
        if local_name(e)? != "Schema" {
            return Ok(false);
        }
        let namespace = attribute(e, "Namespace")?.unwrap_or_default();
        let mut schema = Schema::new(namespace);
        if has_body {
            parse_schema_body(reader, &mut schema)?;
        }
        tracing::debug!(
            "Parsed schema '{}': {} entity, {} complex, {} enum types",
            schema.namespace,
            schema.entity_types.len(),
            schema.complex_types.len(),
            schema.enum_types.len()
        );
        document.add_schema(schema);
        Ok(true)
    })
}

/// Parses the type declarations inside a `Schema` element.
fn parse_schema_body(reader: &mut Reader<&[u8]>, schema: &mut Schema) -> Result<(), ParseError> {
    for_each_child(reader, |reader, e, has_body| {
        match local_name(e)? {
            "EntityType" => {
                let mut entity = EntityType::new(required_attribute(e, "EntityType", "Name")?);
                if has_body {
                    parse_entity_body(reader, &mut entity)?;
                }
                schema.add_entity_type(entity);
            }
            "ComplexType" => {
                let mut complex = ComplexType::new(required_attribute(e, "ComplexType", "Name")?);
                if has_body {
                    parse_complex_body(reader, &mut complex)?;
                }
                schema.add_complex_type(complex);
            }
            "EnumType" => {
                let mut enum_type = EnumType::new(required_attribute(e, "EnumType", "Name")?);
                if has_body {
                    parse_enum_body(reader, &mut enum_type)?;
                }
                schema.add_enum_type(enum_type);
            }
            _ => return Ok(false),
        }
        Ok(true)
    })
}

/// Parses the children of an `EntityType` element.
fn parse_entity_body(
    reader: &mut Reader<&[u8]>,
    entity: &mut EntityType,
) -> Result<(), ParseError> {
    for_each_child(reader, |reader, e, has_body| {
        match local_name(e)? {
            "Property" => {
                entity.add_property(parse_property(e)?);
                Ok(false)
            }
            "NavigationProperty" => {
                let mut nav = parse_navigation_property(e)?;
                if has_body {
                    parse_navigation_body(reader, &mut nav)?;
                }
                entity.add_navigation_property(nav);
                Ok(true)
            }
            "Key" => {
                if has_body {
                    parse_key(reader, entity)?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    })
}

/// Parses the children of a `ComplexType` element.
fn parse_complex_body(
    reader: &mut Reader<&[u8]>,
    complex: &mut ComplexType,
) -> Result<(), ParseError> {
    for_each_child(reader, |_, e, _| {
        if local_name(e)? == "Property" {
            complex.add_property(parse_property(e)?);
        }
        Ok(false)
    })
}

/// Parses `Key/PropertyRef` entries.
fn parse_key(reader: &mut Reader<&[u8]>, entity: &mut EntityType) -> Result<(), ParseError> {
    for_each_child(reader, |_, e, _| {
        if local_name(e)? == "PropertyRef" {
            entity.add_key_ref(required_attribute(e, "PropertyRef", "Name")?);
        }
        Ok(false)
    })
}

/// Parses a `Property` element's attributes.
fn parse_property(e: &BytesStart<'_>) -> Result<Property, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut nullable = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = attribute_value(&attr)?;
        let value = raw.as_str();

        match key {
            "Name" => name = Some(value.to_string()),
            "Type" => type_name = Some(value.to_string()),
            "Nullable" => nullable = Some(parse_bool("Property", "Nullable", value)?),
            _ => {}
        }
    }

    Ok(Property {
        name: name.ok_or_else(|| ParseError::missing_attr("Property", "Name"))?,
        type_name: type_name.ok_or_else(|| ParseError::missing_attr("Property", "Type"))?,
        nullable,
    })
}

/// Parses a `NavigationProperty` element's attributes.
fn parse_navigation_property(e: &BytesStart<'_>) -> Result<NavigationProperty, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut nullable = None;
    let mut partner = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = attribute_value(&attr)?;
        let value = raw.as_str();

        match key {
            "Name" => name = Some(value.to_string()),
            "Type" => type_name = Some(value.to_string()),
            "Nullable" => nullable = Some(parse_bool("NavigationProperty", "Nullable", value)?),
            "Partner" => partner = Some(value.to_string()),
            _ => {}
        }
    }

    let mut nav = NavigationProperty::new(
        name.ok_or_else(|| ParseError::missing_attr("NavigationProperty", "Name"))?,
        type_name.ok_or_else(|| ParseError::missing_attr("NavigationProperty", "Type"))?,
    );
    nav.nullable = nullable;
    nav.partner = partner;

    Ok(nav)
}

/// Parses `ReferentialConstraint` children of a navigation property.
fn parse_navigation_body(
    reader: &mut Reader<&[u8]>,
    nav: &mut NavigationProperty,
) -> Result<(), ParseError> {
    for_each_child(reader, |_, e, _| {
        if local_name(e)? == "ReferentialConstraint" {
            nav.referential_constraints.push(ReferentialConstraint {
                property: required_attribute(e, "ReferentialConstraint", "Property")?,
                referenced_property: required_attribute(
                    e,
                    "ReferentialConstraint",
                    "ReferencedProperty",
                )?,
            });
        }
        Ok(false)
    })
}

/// Parses the `Member` children of an enum type.
///
/// A member without `Value` takes its zero-based position.
fn parse_enum_body(reader: &mut Reader<&[u8]>, enum_type: &mut EnumType) -> Result<(), ParseError> {
    for_each_child(reader, |_, e, _| {
        if local_name(e)? != "Member" {
            return Ok(false);
        }

        let name = required_attribute(e, "Member", "Name")?;
        let value = match attribute(e, "Value")? {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ParseError::invalid_attr("Member", "Value", raw.as_str()))?,
            None => enum_type.members.len() as i64,
        };
        enum_type.add_member(EnumMember::new(name, value));
        Ok(false)
    })
}

/// Walks the direct children of the element whose start tag was just read,
/// up to and including its end tag. Running out of input first is an error.
///
/// The visitor receives each child start tag and whether it has a body. It
/// returns `true` if it consumed that body; otherwise the body is skipped.
fn for_each_child<'x, F>(reader: &mut Reader<&'x [u8]>, mut visit: F) -> Result<(), ParseError>
where
    F: FnMut(&mut Reader<&'x [u8]>, &BytesStart<'_>, bool) -> Result<bool, ParseError>,
{
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if !visit(reader, e, true)? {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                visit(reader, e, false)?;
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::UnexpectedEof),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => return Err(ParseError::UnexpectedEof),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Returns the element name without its namespace prefix.
fn local_name<'a>(e: &'a BytesStart<'_>) -> Result<&'a str, ParseError> {
    Ok(std::str::from_utf8(e.local_name().into_inner())?)
}

/// Reads an optional attribute value.
fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return attribute_value(&attr).map(Some);
        }
    }
    Ok(None)
}

/// Returns an attribute value with entity and character references resolved.
fn attribute_value(attr: &Attribute<'_>) -> Result<String, ParseError> {
    Ok(attr.unescape_value()?.into_owned())
}

/// Reads a required attribute value.
fn required_attribute(
    e: &BytesStart<'_>,
    element: &str,
    name: &str,
) -> Result<String, ParseError> {
    attribute(e, name)?.ok_or_else(|| ParseError::missing_attr(element, name))
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::invalid_attr(element, attribute, value))
}
