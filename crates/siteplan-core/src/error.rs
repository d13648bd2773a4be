//! Error handling for SitePlan
//!
//! Provides error types for every layer of the plan editor:
//! - Plan errors (document model, tools, persisted shape)
//! - Export errors (raster/vector output)
//! - Store errors (the survey record that owns `plan_data`)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Plan error type
///
/// Represents problems with the plan document itself or with values
/// that feed into it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The persisted plan string could not be decoded
    #[error("Malformed plan data: {reason}")]
    MalformedPlan {
        /// Parser diagnostic.
        reason: String,
    },

    /// Grid pitch must be a positive number of pixels
    #[error("Invalid grid pitch: {pitch}")]
    InvalidGridPitch {
        /// The rejected pitch.
        pitch: u32,
    },

    /// Tool name not recognised
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The rejected tool name.
        name: String,
    },

    /// Scale not one of the supported ratios
    #[error("Unknown scale: {value}")]
    UnknownScale {
        /// The rejected scale text.
        value: String,
    },

    /// Index past the end of a plan sequence
    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Which sequence was addressed.
        collection: &'static str,
        /// The requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Export error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Drawing surface could not be allocated
    #[error("Cannot allocate {width}x{height} drawing surface")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Image encoding failed
    #[error("Image encoding failed: {reason}")]
    Encode {
        /// Encoder diagnostic.
        reason: String,
    },

    /// Imported image could not be decoded
    #[error("Image decoding failed: {reason}")]
    Decode {
        /// Decoder diagnostic.
        reason: String,
    },
}

/// Store error type
///
/// Failures of the external record that owns the serialized plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The record is not present in the store
    #[error("Survey record not found: {id}")]
    MissingRecord {
        /// Record identifier.
        id: String,
    },

    /// Writing the record failed
    #[error("Failed to write survey record: {reason}")]
    Write {
        /// Backend diagnostic.
        reason: String,
    },
}

/// Main error type for SitePlan
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Plan error
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a plan error
    pub fn is_plan_error(&self) -> bool {
        matches!(self, Error::Plan(_))
    }

    /// Check if this is a store error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
