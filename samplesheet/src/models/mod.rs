//! Domain models for design files.
//!
//! - [`DesignRow`] - One comma-split line of a design file
//! - [`ReadLayout`] - Single-end or paired-end, as declared by the header
//! - [`DesignTable`] - A header and rows that passed validation
//! - [`NormalizedRecord`] - Output row with `sample_rep` merged in

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{check_header, check_read_type};

// =============================================================================
// Design Row
// =============================================================================

/// Ordered fields of one design file line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignRow {
    fields: Vec<String>,
}

impl DesignRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Split a line on commas. No quote handling.
    pub fn from_line(line: &str) -> Self {
        line.split(',').collect()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-join the fields with commas.
    pub fn to_line(&self) -> String {
        self.fields.join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for DesignRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for DesignRow {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

// =============================================================================
// Read Layout
// =============================================================================

/// Read layout declared by a recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadLayout {
    /// `lib_ID,sample_name,replicate,reads1`
    SingleEnd,
    /// `lib_ID,sample_name,replicate,reads1,reads2`
    PairedEnd,
}

impl ReadLayout {
    /// Input header field names for this layout.
    pub fn input_header(&self) -> &'static [&'static str] {
        match self {
            Self::SingleEnd => &["lib_ID", "sample_name", "replicate", "reads1"],
            Self::PairedEnd => &["lib_ID", "sample_name", "replicate", "reads1", "reads2"],
        }
    }

    /// Header of the normalized output.
    pub fn output_header(&self) -> &'static str {
        match self {
            Self::SingleEnd => "lib_ID,sample_rep,fq1",
            Self::PairedEnd => "lib_ID,sample_rep,fq1,fq2",
        }
    }

    /// Fields per row.
    pub fn field_count(&self) -> usize {
        self.input_header().len()
    }
}

impl std::fmt::Display for ReadLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleEnd => write!(f, "single-end"),
            Self::PairedEnd => write!(f, "paired-end"),
        }
    }
}

// =============================================================================
// Design Table
// =============================================================================

/// Header and data rows of a design file that passed both checks.
///
/// The only constructor is [`DesignTable::validate`], so every row is
/// known to have `layout.field_count()` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTable {
    layout: ReadLayout,
    header: DesignRow,
    rows: Vec<DesignRow>,
}

impl DesignTable {
    /// Check the header, then the row shapes.
    pub fn validate(header: DesignRow, rows: Vec<DesignRow>) -> ValidationResult<Self> {
        let layout = check_header(&header)?;
        check_read_type(&header, &rows)?;
        Ok(Self {
            layout,
            header,
            rows,
        })
    }

    pub fn layout(&self) -> ReadLayout {
        self.layout
    }

    pub fn header(&self) -> &DesignRow {
        &self.header
    }

    pub fn rows(&self) -> &[DesignRow] {
        &self.rows
    }

    /// Normalized records in row order.
    pub fn records(&self) -> Vec<NormalizedRecord> {
        self.rows
            .iter()
            .filter_map(NormalizedRecord::from_row)
            .collect()
    }
}

// =============================================================================
// Normalized Record
// =============================================================================

/// One output row: `lib_ID,sample_rep,fq1[,fq2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "lib_ID")]
    pub lib_id: String,
    /// `{sample_name}_rep{replicate}`
    pub sample_rep: String,
    pub fq1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fq2: Option<String>,
}

impl NormalizedRecord {
    /// Build from a 4 or 5 field row. Any other shape gives `None`.
    pub fn from_row(row: &DesignRow) -> Option<Self> {
        let (lib_id, sample_name, replicate, fq1, fq2) = match row.fields() {
            [lib_id, sample_name, replicate, fq1] => (lib_id, sample_name, replicate, fq1, None),
            [lib_id, sample_name, replicate, fq1, fq2] => {
                (lib_id, sample_name, replicate, fq1, Some(fq2))
            }
            _ => return None,
        };

        Some(Self {
            lib_id: lib_id.clone(),
            sample_rep: sample_rep(sample_name, replicate),
            fq1: fq1.clone(),
            fq2: fq2.cloned(),
        })
    }

    /// Comma-joined output line.
    pub fn to_line(&self) -> String {
        match &self.fq2 {
            Some(fq2) => format!("{},{},{},{}", self.lib_id, self.sample_rep, self.fq1, fq2),
            None => format!("{},{},{}", self.lib_id, self.sample_rep, self.fq1),
        }
    }
}

/// Merge sample name and replicate into one label.
pub fn sample_rep(sample_name: &str, replicate: &str) -> String {
    format!("{}_rep{}", sample_name, replicate)
}
