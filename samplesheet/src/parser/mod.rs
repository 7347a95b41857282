//! Reading design files into rows.
//!
//! Handles the I/O side of the pipeline: reading a file (or stdin for
//! `-`), detecting and decoding its text encoding, then splitting lines
//! on commas. There is no quote handling: a design file is plain
//! comma-separated text.

use std::io::Read;
use std::path::Path;

use crate::error::{ReadError, ReadResult};
use crate::logs::log_warning;
use crate::models::DesignRow;

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Header row and data rows of a design file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDesign {
    pub header: DesignRow,
    pub rows: Vec<DesignRow>,
    /// Detected or used encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    // chardet guesses poorly on short samples; valid UTF-8 is UTF-8.
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to text using the specified encoding.
///
/// UTF-8 is decoded strictly: a file path with replacement characters in
/// it would be silently wrong downstream. A leading byte-order mark is
/// dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> ReadResult<String> {
    let text = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .map_err(|e| ReadError::Encoding(format!("invalid UTF-8: {}", e)))?,
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => {
                let (text, _, had_errors) = enc.decode(bytes);
                if had_errors {
                    log_warning(format!("{} decoding had errors, using windows-1252", enc.name()));
                    encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
                } else {
                    text.into_owned()
                }
            }
            None => {
                log_warning(format!("Unknown encoding '{}', using windows-1252", other));
                encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
            }
        },
    };

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Split design text into header and rows.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. Each line is right-trimmed
/// of whitespace and split on commas. Blank lines are kept as single
/// empty-field rows so the read type check reports them.
pub fn parse_design_str(content: &str) -> ReadResult<(DesignRow, Vec<DesignRow>)> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized
        .lines()
        .map(|line| DesignRow::from_line(line.trim_end()));

    let header = lines.next().ok_or(ReadError::EmptyFile)?;
    let rows = lines.collect();

    Ok((header, rows))
}

/// Decode and parse raw design file bytes.
pub fn parse_design_bytes(bytes: &[u8]) -> ReadResult<ParsedDesign> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let (header, rows) = parse_design_str(&content)?;

    Ok(ParsedDesign {
        header,
        rows,
        encoding,
    })
}

/// Read raw bytes from a path, or from stdin for `-`.
pub fn read_source(path: &Path) -> ReadResult<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}

/// Read and parse a design file.
///
/// # Example
/// ```ignore
/// let parsed = read_design(Path::new("design.csv"))?;
/// println!("{} rows ({})", parsed.rows.len(), parsed.encoding);
/// ```
pub fn read_design(path: &Path) -> ReadResult<ParsedDesign> {
    let bytes = read_source(path)?;
    parse_design_bytes(&bytes)
}
