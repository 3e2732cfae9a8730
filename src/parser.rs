//! Schema-construction interface for external ICD descriptions.
//!
//! Concrete parsers (textual or binary ICD formats) live outside this crate.
//! They implement [`SchemaParser`] and must yield a fully populated
//! [`MessageSchema`] — every descriptor constructed with its type, position
//! and endianness — before the codec ever touches it.

use crate::message::{MessageSchema, SchemaError};

/// Parse failure while building a schema from an external description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("unknown field type: {0}")]
    UnknownType(String),
    #[error("invalid definition for field {name}: {reason}")]
    InvalidField { name: String, reason: String },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Builds a [`MessageSchema`] from an external ICD description.
pub trait SchemaParser {
    /// Parses a textual description.
    fn parse_text(&self, text: &str) -> Result<MessageSchema, ParseError>;

    /// Parses a binary description.
    fn parse_bytes(&self, data: &[u8]) -> Result<MessageSchema, ParseError>;
}
