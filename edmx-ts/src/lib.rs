//! # edmx-ts
//!
//! Generate TypeScript declarations from OData v4 `$metadata` documents.
//!
//! ## Quick Start
//!
//! ```ignore
//! use edmx_ts::prelude::*;
//!
//! let xml = std::fs::read_to_string("metadata.xml")?;
//! let declarations = generate_from_xml(&xml, &GeneratorOptions::default())?;
//! println!("{}", declarations);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - EDMX parsing, metadata model and validation
//! - [`codegen`] - Primitive table, type resolution and declaration generation
//! - [`host`] - Metadata sources, output sinks and error reporting

pub mod host;
pub mod prelude;

/// EDMX parsing and the metadata model.
pub mod schema {
    pub use edmx_ts_schema::*;
}

/// TypeScript declaration generation.
pub mod codegen {
    pub use edmx_ts_codegen::*;
}

// Re-export commonly used items at the crate root
pub use edmx_ts_codegen::{
    CodegenError, ErrorKind, Generator, GeneratorOptions, PrimitiveStyle, generate_from_xml,
    translate,
};
pub use edmx_ts_schema::{MetadataDocument, parse_metadata};
