//! Defines [`WkbError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkbError {
    /// Wraps an error that fits no other variant.
    #[error("General error: {0}")]
    General(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// WKT input that does not contain a well-formed single-ring polygon.
    #[error("Malformed WKT input: {0}")]
    MalformedWkt(String),

    /// A point write would run past the end of the allocated WKB buffer.
    ///
    /// The encoder allocates exactly the number of bytes implied by the
    /// declared point count; this error indicates an internal inconsistency
    /// between that count and the points actually written, never a normal
    /// user-facing failure.
    #[error("WKB write at offset {offset} exceeds buffer of {capacity} bytes")]
    BufferOverflow {
        /// Total allocated buffer size in bytes.
        capacity: usize,
        /// Byte offset at which the out-of-bounds write was attempted.
        offset: usize,
    },

    /// A WKB buffer shorter than its header and declared point count imply.
    #[error("Truncated WKB buffer: expected {expected} bytes, got {actual}")]
    TruncatedBuffer {
        /// Byte length the header fields imply.
        expected: usize,
        /// Byte length actually available.
        actual: usize,
    },

    /// A WKB geometry type code other than polygon (3).
    #[error("Unsupported WKB geometry type code: {0}")]
    UnsupportedGeometryType(u32),

    /// A WKB byte-order flag other than little-endian (1).
    #[error("Unsupported WKB byte-order flag: {0}")]
    UnsupportedByteOrder(u8),
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;
