//! Design file validation.
//!
//! Two checks run in order, and the first failure wins:
//!
//! 1. [`check_header`] - the header must be exactly one of
//!    `lib_ID,sample_name,replicate,reads1` (single-end) or
//!    `lib_ID,sample_name,replicate,reads1,reads2` (paired-end).
//!    Matching is case-sensitive and order-sensitive, with no trimming.
//! 2. [`check_read_type`] - every data row must have as many fields as the
//!    header, so a file never mixes single-end and paired-end rows.
//!
//! # Example
//!
//! ```
//! use samplesheet::{check_header, check_read_type, DesignRow, ReadLayout};
//!
//! let header = DesignRow::from_line("lib_ID,sample_name,replicate,reads1");
//! let rows = vec![DesignRow::from_line("HSL-1,wt,1,data/HSL-1_R1.fastq.gz")];
//!
//! assert_eq!(check_header(&header).unwrap(), ReadLayout::SingleEnd);
//! assert!(check_read_type(&header, &rows).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::models::{DesignRow, ReadLayout};

/// Recognized layouts, in match order.
const LAYOUTS: [ReadLayout; 2] = [ReadLayout::SingleEnd, ReadLayout::PairedEnd];

/// Check the header and return the layout it declares.
///
/// The normalized output header is `layout.output_header()`.
pub fn check_header(header: &DesignRow) -> ValidationResult<ReadLayout> {
    LAYOUTS
        .into_iter()
        .find(|layout| header.fields().iter().eq(layout.input_header()))
        .ok_or_else(|| ValidationError::InvalidHeader {
            context: header.to_line(),
        })
}

/// Check that every row has the header's field count.
///
/// On failure the context lists each offending row, in order, joined by
/// `"\n\t"`.
pub fn check_read_type(header: &DesignRow, design: &[DesignRow]) -> ValidationResult<()> {
    let expected = header.len();

    let mismatched: Vec<String> = design
        .iter()
        .filter(|row| row.len() != expected)
        .map(DesignRow::to_line)
        .collect();

    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MixedReadTypes {
            context: mismatched.join("\n\t"),
        })
    }
}
