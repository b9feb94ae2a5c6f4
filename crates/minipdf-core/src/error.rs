//! Error types for building and writing PDF documents.

use std::fmt;
use thiserror::Error;

/// The fixed-width cross-reference field that a value did not fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefField {
    /// The 10-digit byte offset of an in-use object.
    Offset,
    /// The 5-digit generation number.
    Generation,
    /// An object number, written into the 10-digit column as a free-list link.
    ObjectNumber,
}

impl fmt::Display for XrefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset => f.write_str("offset"),
            Self::Generation => f.write_str("generation"),
            Self::ObjectNumber => f.write_str("object number"),
        }
    }
}

/// Errors that can occur while building or writing a document.
///
/// Every error returned by a write is terminal: nothing is written to the
/// sink when one is raised.
#[derive(Error, Debug)]
pub enum PdfError {
    /// No object carries `/Type /Catalog`, so the trailer has no root.
    #[error("document has no catalog object (/Type /Catalog)")]
    MissingCatalog,

    /// A value does not fit the fixed-width cross-reference column.
    #[error("{field} {value} does not fit in {width} digits")]
    FixedWidthOverflow {
        field: XrefField,
        value: u64,
        width: usize,
    },

    /// A stream's caller dictionary tried to set a key the writer owns.
    #[error("stream dictionary must not set reserved key /{key}")]
    ReservedStreamKeyConflict { key: String },

    /// A value appeared where its type cannot be encoded.
    #[error("cannot encode {found} {context}")]
    UnsupportedValueType {
        found: &'static str,
        context: &'static str,
    },

    /// A value could not be represented in PDF syntax.
    #[error("encoding error: {0}")]
    EncodingFailure(String),

    /// An object with this number is already part of the document.
    #[error("object number {0} is already in use")]
    DuplicateObject(u64),

    /// The sink rejected the finished buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout minipdf-core.
pub type Result<T> = std::result::Result<T, PdfError>;
