//! Reshaping validated design rows into the normalized table.
//!
//! - [`organize_samples`] - Merge sample name and replicate into `sample_rep`
//! - [`pipeline`] - Per-file and batch orchestration

pub mod pipeline;

use crate::models::{sample_rep, DesignRow};

/// Render rows as `lib_ID,{sample_name}_rep{replicate},reads1[,reads2]`
/// lines joined by `'\n'`, with no leading or trailing newline.
///
/// Row shape is not checked here; run [`crate::check_read_type`] first.
/// Fields after `replicate` are carried through in order, and a row with
/// fewer than three fields is emitted unchanged.
///
/// ```
/// use samplesheet::{organize_samples, DesignRow};
///
/// let rows = vec![
///     DesignRow::from_line("HSL-3,wt_DMSO,1,data/HSL-3_R1.fastq.gz"),
///     DesignRow::from_line("HSL-4,wt_DMSO,2,data/HSL-4_R1.fastq.gz"),
/// ];
/// assert_eq!(
///     organize_samples(&rows),
///     "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz\nHSL-4,wt_DMSO_rep2,data/HSL-4_R1.fastq.gz"
/// );
/// ```
pub fn organize_samples(design: &[DesignRow]) -> String {
    design
        .iter()
        .map(organize_row)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

fn organize_row(row: &DesignRow) -> String {
    match row.fields() {
        [lib_id, sample_name, replicate, reads @ ..] => {
            let mut fields = Vec::with_capacity(reads.len() + 2);
            fields.push(lib_id.clone());
            fields.push(sample_rep(sample_name, replicate));
            fields.extend(reads.iter().cloned());
            fields.join(",")
        }
        _ => row.to_line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(design: &[&[&str]]) -> Vec<DesignRow> {
        design
            .iter()
            .map(|fields| fields.iter().copied().collect())
            .collect()
    }

    #[test]
    fn test_organize_single_end() {
        let design = rows(&[
            &["HSL-3", "wt_DMSO", "1", "data/HSL-3_R1.fastq.gz"],
            &["HSL-4", "wt_DMSO", "2", "data/HSL-4_R1.fastq.gz"],
        ]);
        let expected = "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz\n\
                        HSL-4,wt_DMSO_rep2,data/HSL-4_R1.fastq.gz";
        assert_eq!(organize_samples(&design), expected);
    }

    #[test]
    fn test_organize_paired_end() {
        let design = rows(&[
            &["HSL-3", "wt_DMSO", "1", "data/HSL-3_R1.fastq.gz", "data/HSL-3_R2.fastq.gz"],
            &["HSL-4", "wt_DMSO", "2", "data/HSL-4_R1.fastq.gz", "data/HSL-4_R2.fastq.gz"],
        ]);
        let expected = "HSL-3,wt_DMSO_rep1,data/HSL-3_R1.fastq.gz,data/HSL-3_R2.fastq.gz\n\
                        HSL-4,wt_DMSO_rep2,data/HSL-4_R1.fastq.gz,data/HSL-4_R2.fastq.gz";
        assert_eq!(organize_samples(&design), expected);
    }

    #[test]
    fn test_organize_empty() {
        assert_eq!(organize_samples(&[]), "");
    }

    #[test]
    fn test_organize_keeps_row_order() {
        let design = rows(&[
            &["L9", "ko", "3", "z.fq"],
            &["L1", "wt", "1", "a.fq"],
            &["L5", "wt", "2", "m.fq"],
        ]);
        let out = organize_samples(&design);
        let libs: Vec<&str> = out.lines().map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(libs, vec!["L9", "L1", "L5"]);
    }

    #[test]
    fn test_organize_short_row_unchanged() {
        let design = rows(&[&["L1", "wt"], &[""]]);
        assert_eq!(organize_samples(&design), "L1,wt");

        let design = rows(&[&[""], &["L1", "wt", "1", "a.fq"]]);
        assert_eq!(organize_samples(&design), "L1,wt_rep1,a.fq");
    }

    #[test]
    fn test_organize_is_repeatable() {
        let design = rows(&[&["L1", "wt", "1", "a.fq"]]);
        assert_eq!(organize_samples(&design), organize_samples(&design));
    }
}
