//! Error types for code generation.

use edmx_ts_schema::{ParseError, SchemaError};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The input is not an OData metadata document.
    #[error("invalid metadata: {reason}")]
    InvalidDocument {
        /// What is wrong with the document.
        reason: String,
    },

    /// The document declares a version other than 4.0.
    #[error("unsupported metadata version '{version}', only 4.0 is supported")]
    UnsupportedVersion {
        /// Declared version.
        version: String,
    },

    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-facing classification of a failed translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Root element absent or unrecognized shape.
    InvalidDocument,
    /// Version present but not 4.0.
    UnsupportedVersion,
    /// Anything else.
    Unexpected,
}

impl ErrorKind {
    /// Returns the message shown to the user for this kind of failure.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::InvalidDocument => {
                "Response is not valid OData metadata. See log output for more information."
            }
            Self::UnsupportedVersion => {
                "Metadata is not a supported OData version. Only 4.0 is supported."
            }
            Self::Unexpected => "Unknown error occurred, see log output for more information.",
        }
    }
}

impl CodegenError {
    /// Creates an invalid document error with the given reason.
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Classifies the error for the user-facing layer.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDocument { .. } => ErrorKind::InvalidDocument,
            Self::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            Self::Parse(_) | Self::Schema(_) | Self::Io(_) => ErrorKind::Unexpected,
        }
    }

    /// Returns the generic message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl From<ParseError> for CodegenError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MissingElement { .. }
            | ParseError::UnexpectedEof
            | ParseError::Xml(_)
            | ParseError::Utf8(_) => Self::invalid_document(err.to_string()),
            other => Self::Parse(other),
        }
    }
}

impl From<SchemaError> for CodegenError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnsupportedVersion { version } => Self::UnsupportedVersion { version },
            SchemaError::Parse(parse) => parse.into(),
            other => Self::Schema(other),
        }
    }
}
