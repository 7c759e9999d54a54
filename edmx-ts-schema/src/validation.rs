//! Metadata document validation.
//!
//! Only the checks the translator depends on are performed: the declared
//! OData version and the shape of each schema's namespace.

use crate::error::SchemaError;
use crate::types::MetadataDocument;

/// Validates a parsed document before translation.
///
/// # Arguments
/// * `document` - The document to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError::UnsupportedVersion` if the version is not `4.0`,
/// or `SchemaError::Validation` if a schema has an empty namespace.
pub fn validate_document(document: &MetadataDocument) -> Result<(), SchemaError> {
    validate_version(document)?;
    validate_namespaces(document)?;
    Ok(())
}

/// Checks the declared OData version.
fn validate_version(document: &MetadataDocument) -> Result<(), SchemaError> {
    if !document.is_supported_version() {
        return Err(SchemaError::UnsupportedVersion {
            version: document.version.clone(),
        });
    }
    Ok(())
}

/// Checks that every schema carries a namespace identifier.
fn validate_namespaces(document: &MetadataDocument) -> Result<(), SchemaError> {
    for (index, schema) in document.schemas.iter().enumerate() {
        if schema.namespace.trim().is_empty() {
            return Err(SchemaError::Validation {
                message: format!("Schema #{} has an empty Namespace", index + 1),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_metadata;
    use crate::types::Schema;

    #[test]
    fn test_validate_valid_document() {
        let xml = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
    <edmx:DataServices>
        <Schema Namespace="Test"/>
    </edmx:DataServices>
</edmx:Edmx>"#;

        let doc = parse_metadata(xml).expect("Failed to parse");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_validate_unsupported_version() {
        let doc = MetadataDocument::new("3.0");
        let result = validate_document(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::UnsupportedVersion { ref version }) if version == "3.0"
        ));
    }

    #[test]
    fn test_validate_empty_namespace() {
        let mut doc = MetadataDocument::new("4.0");
        doc.add_schema(Schema::new("Good"));
        doc.add_schema(Schema::new(""));
        let result = validate_document(&doc);
        assert!(matches!(result, Err(SchemaError::Validation { .. })));
    }
}
