//! # edmx-ts Codegen
//!
//! TypeScript declaration generation from OData v4 metadata.
//!
//! This crate provides:
//! - The primitive type table and type reference resolution
//! - Namespace, interface and enum declaration generation
//! - The translation driver: validate, generate, append the primitive namespace

pub mod error;
pub mod generator;
pub mod options;
pub mod primitives;
pub mod resolver;
pub mod typescript;

pub use error::{CodegenError, ErrorKind};
pub use generator::Generator;
pub use options::{GeneratorOptions, PrimitiveStyle};
pub use primitives::PrimitiveTypeTable;
pub use resolver::{TypeRef, TypeResolver};

use edmx_ts_schema::MetadataDocument;

/// Translates a parsed metadata document into TypeScript declarations.
///
/// # Arguments
/// * `document` - Parsed metadata document
/// * `options` - Generator options
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError::UnsupportedVersion` if the document is not OData 4.0,
/// or `CodegenError::Schema` if a schema fails validation. No text is produced
/// on failure.
pub fn translate(
    document: &MetadataDocument,
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    edmx_ts_schema::validate_document(document)?;

    let output = Generator::new(document)
        .with_options(options.clone())
        .generate();

    tracing::info!(
        "Translated {} schema(s) into {} bytes",
        document.schemas.len(),
        output.len()
    );
    Ok(output)
}

/// Generates TypeScript declarations from a `$metadata` XML string.
///
/// # Arguments
/// * `xml` - EDMX metadata content
/// * `options` - Generator options
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_xml(xml: &str, options: &GeneratorOptions) -> Result<String, CodegenError> {
    let document = edmx_ts_schema::parse_metadata(xml)?;
    translate(&document, options)
}

/// Generates TypeScript declarations from a `$metadata` file.
///
/// # Arguments
/// * `path` - Path to the metadata file
/// * `options` - Generator options
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, options)
}
