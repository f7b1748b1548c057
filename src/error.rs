//! Error types for trueno-raster operations.
//!
//! The rasterization kernel itself never fails; these errors belong to the
//! boundary layers (algorithm selection, scene editing, script parsing, output).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Coordinate outside the range the rasterizers accept.
    #[error("Coordinate {value} outside ±{limit}", limit = crate::geometry::MAX_COORDINATE)]
    CoordinateOutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// Algorithm name not in the fixed enumeration for its primitive type.
    #[error("Unknown {kind} algorithm: {name}")]
    UnknownAlgorithm {
        /// Which selector was being parsed (line, curve, clip).
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// Reference to a primitive id that does not exist.
    #[error("Unknown primitive id: {0}")]
    UnknownPrimitive(String),

    /// Operation not permitted on this primitive type.
    #[error("Cannot {operation} {kind} primitive")]
    UnsupportedOperation {
        /// Requested operation.
        operation: &'static str,
        /// Primitive kind name.
        kind: &'static str,
    },

    /// Malformed script command.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration parsing error.
    #[error("Configuration error: {0}")]
    Config(String),
}
