//! High-level pipeline API for design files.
//!
//! Combines all steps for one file: reading, header check, read type
//! check, and organizing samples. [`process_batch`] runs several files
//! in order and applies a [`FailurePolicy`] when one of them fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use samplesheet::{process_batch, PipelineOptions};
//! use std::path::PathBuf;
//!
//! let report = process_batch(&[PathBuf::from("design.csv")], &PipelineOptions::default())?;
//! for design in &report.designs {
//!     println!("{}\n{}", design.output_header, design.table);
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::organize_samples;
use crate::error::{BatchFailure, PipelineError, PipelineResult};
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_warning};
use crate::models::{DesignTable, NormalizedRecord, ReadLayout};
use crate::parser::{parse_design_bytes, read_design, ParsedDesign};

/// What to do when a design file in a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole batch at the first failure.
    #[default]
    Abort,
    /// Report the failure and continue with the next file.
    Skip,
}

/// Options for batch processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Behaviour when a design file fails
    pub on_error: FailurePolicy,
}

/// A design file that passed validation, in normalized form.
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport {
    /// Where the design came from
    pub source: String,

    /// Read layout declared by the header
    pub layout: ReadLayout,

    /// Normalized output header
    #[serde(rename = "header")]
    pub output_header: String,

    /// Normalized records, in input order
    pub records: Vec<NormalizedRecord>,

    /// Normalized rows as text, without header
    #[serde(skip)]
    pub table: String,

    /// Encoding the file was decoded from
    #[serde(skip)]
    pub encoding: String,
}

/// A design file that failed during a batch.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: PipelineError,
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful designs, in argument order
    pub designs: Vec<DesignReport>,

    /// Failures skipped under [`FailurePolicy::Skip`]
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate and normalize design text.
pub fn process_design_str(content: &str, source: &str) -> PipelineResult<DesignReport> {
    let parsed = parse_design_bytes(content.as_bytes())?;
    process_parsed(parsed, source)
}

/// Read, validate and normalize one design file (`-` for stdin).
pub fn process_design_file(path: &Path) -> PipelineResult<DesignReport> {
    let source = path.display().to_string();
    log_info(format!("📄 Processing: {}", source));

    let parsed = read_design(path)?;
    process_parsed(parsed, &source)
}

fn process_parsed(parsed: ParsedDesign, source: &str) -> PipelineResult<DesignReport> {
    log_info_indent(format!("Encoding: {}", parsed.encoding), 1);
    log_info_indent(format!("Rows: {}", parsed.rows.len()), 1);

    let table = DesignTable::validate(parsed.header, parsed.rows)?;
    let layout = table.layout();
    log_success(format!("Header OK ({})", layout));

    if table.rows().is_empty() {
        log_warning(format!("{} has no samples", source));
    }

    let report = DesignReport {
        source: source.to_string(),
        layout,
        output_header: layout.output_header().to_string(),
        records: table.records(),
        table: organize_samples(table.rows()),
        encoding: parsed.encoding,
    };
    log_success(format!("{} samples organized", report.records.len()));

    Ok(report)
}

/// Process design files in order.
///
/// Under [`FailurePolicy::Abort`] the first failure is returned; under
/// [`FailurePolicy::Skip`] failures are collected in the report.
pub fn process_batch<P: AsRef<Path>>(
    paths: &[P],
    options: &PipelineOptions,
) -> Result<BatchReport, BatchFailure> {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        match process_design_file(path) {
            Ok(design) => report.designs.push(design),
            Err(error) => match options.on_error {
                FailurePolicy::Abort => {
                    return Err(BatchFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
                FailurePolicy::Skip => {
                    log_error(format!("Skipping {}", path.display()));
                    report.failures.push(FileFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            },
        }
    }

    if report.failures.is_empty() {
        log_success(format!("All {} design file(s) valid", report.designs.len()));
    } else {
        log_warning(format!(
            "{} of {} design file(s) failed",
            report.failures.len(),
            paths.len()
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReadError, ValidationError};
    use std::fs;

    const SE: &str = "lib_ID,sample_name,replicate,reads1\n\
                      HSL-3,wt_DMSO,1,data/HSL-3_R1.fastq.gz\n\
                      HSL-4,wt_DMSO,2,data/HSL-4_R1.fastq.gz\n";

    const PE: &str = "lib_ID,sample_name,replicate,reads1,reads2\n\
                      HSL-3,wt_DMSO,1,data/HSL-3_R1.fastq.gz,data/HSL-3_R2.fastq.gz\n";

    const MIXED: &str = "lib_ID,sample_name,replicate,reads1\n\
                         HSL-3,wt_DMSO,1,data/HSL-3_R1.fastq.gz,data/HSL-3_R2.fastq.gz\n";

    #[test]
    fn test_default_options() {
        let opts = PipelineOptions::default();
        assert_eq!(opts.on_error, FailurePolicy::Abort);
    }

    #[test]
    fn test_process_single_end() {
        let report = process_design_str(SE, "se.csv").unwrap();
        assert_eq!(report.layout, ReadLayout::SingleEnd);
        assert_eq!(report.output_header, "lib_ID,sample_rep,fq1");
        assert_eq!(
            report.table,
            "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz\nHSL-4,wt_DMSO_rep2,data/HSL-4_R1.fastq.gz"
        );
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1].sample_rep, "wt_DMSO_rep2");
    }

    #[test]
    fn test_process_paired_end() {
        let report = process_design_str(PE, "pe.csv").unwrap();
        assert_eq!(report.layout, ReadLayout::PairedEnd);
        assert_eq!(
            report.table,
            "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz,data/HSL-3_R2.fastq.gz"
        );
    }

    #[test]
    fn test_process_cr_line_endings() {
        let report = process_design_str(&SE.replace('\n', "\r"), "mac.csv").unwrap();
        assert_eq!(report.layout, ReadLayout::SingleEnd);
        assert_eq!(report.records.len(), 2);
        assert_eq!(
            report.table,
            "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz\nHSL-4,wt_DMSO_rep2,data/HSL-4_R1.fastq.gz"
        );
    }

    #[test]
    fn test_process_header_only() {
        let report = process_design_str("lib_ID,sample_name,replicate,reads1\n", "h.csv").unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.table, "");
    }

    #[test]
    fn test_process_mixed_fails() {
        let err = process_design_str(MIXED, "mixed.csv").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::MixedReadTypes { .. })
        ));
        assert_eq!(
            err.to_string(),
            "ERROR: Samplesheet -> Mixed read types.\n\tLINE: HSL-3,wt_DMSO,1,data/HSL-3_R1.fastq.gz,data/HSL-3_R2.fastq.gz"
        );
    }

    #[test]
    fn test_process_empty_fails() {
        let err = process_design_str("", "empty.csv").unwrap_err();
        assert!(matches!(err, PipelineError::Read(ReadError::EmptyFile)));
    }

    fn write_designs(dir: &Path, designs: &[(&str, &str)]) -> Vec<PathBuf> {
        designs
            .iter()
            .map(|(name, content)| {
                let path = dir.join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_batch_abort_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_designs(
            dir.path(),
            &[("a.csv", SE), ("bad.csv", MIXED), ("c.csv", PE)],
        );

        let failure = process_batch(&paths, &PipelineOptions::default()).unwrap_err();
        assert_eq!(failure.path, paths[1]);
        assert!(matches!(failure.error, PipelineError::Validation(_)));
    }

    #[test]
    fn test_batch_skip_continues() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_designs(
            dir.path(),
            &[("a.csv", SE), ("bad.csv", MIXED), ("c.csv", PE)],
        );
        let options = PipelineOptions {
            on_error: FailurePolicy::Skip,
        };

        let report = process_batch(&paths, &options).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.designs.len(), 2);
        assert_eq!(report.designs[0].layout, ReadLayout::SingleEnd);
        assert_eq!(report.designs[1].layout, ReadLayout::PairedEnd);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, paths[1]);
    }

    #[test]
    fn test_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let failure = process_batch(&[&missing], &PipelineOptions::default()).unwrap_err();
        assert!(matches!(failure.error, PipelineError::Read(ReadError::Io(_))));
    }

    #[test]
    fn test_batch_all_valid() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_designs(dir.path(), &[("a.csv", SE), ("b.csv", PE)]);

        let report = process_batch(&paths, &PipelineOptions::default()).unwrap();
        assert!(report.is_success());
        assert_eq!(report.designs.len(), 2);
        assert!(report.designs[0].source.ends_with("a.csv"));
    }
}
