//! Error types for the design file pipeline.
//!
//! - [`ReadError`] - Reading and decoding design files
//! - [`ValidationError`] - Header and read layout checks
//! - [`PipelineError`] - Per-file processing errors
//! - [`OutputError`] - Rendering and writing results
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Format a samplesheet error the way it is reported to the user.
///
/// ```
/// use samplesheet::error::format_error;
///
/// let msg = format_error("Mixed read types.", "HSL-3,wt_DMSO,1,r1.fq.gz,r2.fq.gz");
/// assert_eq!(msg, "ERROR: Samplesheet -> Mixed read types.\n\tLINE: HSL-3,wt_DMSO,1,r1.fq.gz,r2.fq.gz");
/// ```
pub fn format_error(error: &str, context: &str) -> String {
    format!("ERROR: Samplesheet -> {}\n\tLINE: {}", error, context)
}

// =============================================================================
// Read Errors
// =============================================================================

/// Errors while reading a design file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to read file or stdin.
    #[error("Failed to read design file: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be decoded to text.
    #[error("Failed to decode design file: {0}")]
    Encoding(String),

    /// No lines at all, so no header.
    #[error("Design file is empty")]
    EmptyFile,
}

// =============================================================================
// Validation Errors
// =============================================================================

const INVALID_HEADER: &str = "Missing or invalid header.";
const MIXED_READ_TYPES: &str = "Mixed read types.";

/// A design file failed validation.
///
/// `Display` renders the full user-facing report (see [`format_error`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Header is not one of the two recognized shapes.
    #[error("{}", format_error(INVALID_HEADER, .context))]
    InvalidHeader { context: String },

    /// Some data rows do not have the header's field count.
    #[error("{}", format_error(MIXED_READ_TYPES, .context))]
    MixedReadTypes { context: String },
}

impl ValidationError {
    /// Short description of the failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidHeader { .. } => INVALID_HEADER,
            Self::MixedReadTypes { .. } => MIXED_READ_TYPES,
        }
    }

    /// The offending line(s), verbatim.
    pub fn context(&self) -> &str {
        match self {
            Self::InvalidHeader { context } | Self::MixedReadTypes { context } => context,
        }
    }
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Failure to process a single design file.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading error.
    #[error("{0}")]
    Read(#[from] ReadError),

    /// Validation error, reported as-is.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A batch stopped at the first failing design file.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct BatchFailure {
    /// The design file that failed.
    pub path: PathBuf,
    /// Why it failed.
    #[source]
    pub error: PipelineError,
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while rendering or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for per-file pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;
