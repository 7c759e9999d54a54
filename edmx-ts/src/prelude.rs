//! Prelude module for convenient imports.
//!
//! ```ignore
//! use edmx_ts::prelude::*;
//! ```

pub use edmx_ts_codegen::{
    CodegenError, ErrorKind, Generator, GeneratorOptions, PrimitiveStyle, PrimitiveTypeTable,
    generate_from_file, generate_from_xml, translate,
};
pub use edmx_ts_schema::{
    ComplexType, EntityType, EnumMember, EnumType, Member, MetadataDocument, NavigationProperty,
    Property, Schema, parse_metadata,
};

pub use crate::host::{
    ErrorReporter, FileSink, FileSource, MetadataSource, OutputSink, ReaderSource, StderrReporter,
    WriterSink, run,
};
