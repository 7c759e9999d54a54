//! # edmx-ts Schema
//!
//! OData v4 metadata parser and schema model.
//!
//! This crate provides:
//! - EDMX (`$metadata`) parsing into an in-memory model
//! - Type definitions for schemas, structured types and enumerations
//! - Document validation (version and namespace checks)

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::parse_metadata;
pub use types::{
    ComplexType, EntityType, EnumMember, EnumType, Member, MetadataDocument, NavigationProperty,
    Property, ReferentialConstraint, SUPPORTED_VERSION, Schema,
};
pub use validation::validate_document;
