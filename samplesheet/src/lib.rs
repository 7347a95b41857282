//! # Samplesheet - design file validation for sequencing pipelines
//!
//! Checks a CSV design file (sample sheet) and rewrites it in the
//! normalized form expected by the next pipeline stage.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Design CSV  │────▶│   Parser    │────▶│ Validation  │────▶│  Organize   │
//! │ (file/stdin)│     │ (auto-enc)  │     │ header+rows │     │ sample_rep  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Input header is one of:
//!
//! ```text
//! lib_ID,sample_name,replicate,reads1            -> lib_ID,sample_rep,fq1
//! lib_ID,sample_name,replicate,reads1,reads2     -> lib_ID,sample_rep,fq1,fq2
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use samplesheet::process_design_str;
//!
//! let design = "lib_ID,sample_name,replicate,reads1\nHSL-1,wt,1,data/HSL-1_R1.fastq.gz";
//! let report = process_design_str(design, "design.csv").unwrap();
//! assert_eq!(report.output_header, "lib_ID,sample_rep,fq1");
//! assert_eq!(report.table, "HSL-1,wt_rep1,data/HSL-1_R1.fastq.gz");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and report formatting
//! - [`models`] - Rows, layouts, tables, normalized records
//! - [`parser`] - Reading and decoding design files
//! - [`validation`] - Header and read type checks
//! - [`transform`] - Sample organization and pipeline
//! - [`output`] - CSV / JSON rendering
//! - [`logs`] - Progress logging

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

// Output
pub mod output;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    format_error, BatchFailure, OutputError, PipelineError, ReadError, ValidationError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{DesignRow, DesignTable, NormalizedRecord, ReadLayout};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_design_bytes, parse_design_str, read_design,
    ParsedDesign,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{check_header, check_read_type};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::organize_samples;

pub use transform::pipeline::{
    process_batch, process_design_file, process_design_str, BatchReport, DesignReport,
    FailurePolicy, FileFailure, PipelineOptions,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{render, write_output, OutputFormat};
