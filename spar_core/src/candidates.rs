//! # Candidate List Parsing
//!
//! Lenient parser for the free-text tube list a user types, one `outer,inner`
//! pair per line:
//!
//! ```text
//! 8,6
//! 10,8
//! 12, 8
//! ```
//!
//! Lines that do not parse, or where the inner diameter is not smaller than
//! the outer, are skipped rather than failing the whole list. Skipped lines
//! are reported so a front end can show them. An empty result is left to
//! [`rank`](crate::calculations::rank), which reports `NoCandidates`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::TubeGeometry;

/// A line the parser ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the trimmed text
    pub line_number: usize,
    /// The line as written
    pub content: String,
    /// Why it was skipped
    pub reason: String,
}

/// Output of [`parse_candidates`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCandidates {
    /// Accepted tubes in input order
    pub geometries: Vec<TubeGeometry>,
    /// 1-based line number of each entry in `geometries`
    #[serde(default)]
    pub source_lines: Vec<usize>,
    /// Rejected lines
    pub skipped: Vec<SkippedLine>,
}

impl ParsedCandidates {
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Line a geometry came from, by its index in `geometries`.
    pub fn source_line(&self, index: usize) -> Option<usize> {
        self.source_lines.get(index).copied()
    }
}

/// Parse a newline-separated list of `outer,inner` pairs (mm).
///
/// Spaces anywhere in a line are ignored. Exactly two comma-separated numbers
/// are required and the pair is kept only when `inner < outer`.
///
/// # Example
///
/// ```rust
/// use spar_core::candidates::parse_candidates;
///
/// let parsed = parse_candidates("8,6\n10, 8\nbogus\n12,14");
/// assert_eq!(parsed.geometries.len(), 2);
/// assert_eq!(parsed.skipped.len(), 2);
/// ```
pub fn parse_candidates(text: &str) -> ParsedCandidates {
    let mut parsed = ParsedCandidates::default();

    for (idx, line) in text.trim().lines().enumerate() {
        match parse_line(line) {
            Ok(geometry) => {
                parsed.geometries.push(geometry);
                parsed.source_lines.push(idx + 1);
            }
            Err(reason) => {
                debug!(line_number = idx + 1, line, %reason, "skipping candidate line");
                parsed.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

fn parse_line(line: &str) -> Result<TubeGeometry, String> {
    let compact = line.replace(' ', "");
    let parts: Vec<&str> = compact.split(',').collect();
    let [outer, inner] = parts.as_slice() else {
        return Err(format!("expected 2 values, found {}", parts.len()));
    };
    let outer: f64 = outer
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", outer))?;
    let inner: f64 = inner
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", inner))?;
    if !(inner < outer) {
        return Err("inner diameter must be smaller than outer diameter".to_string());
    }
    Ok(TubeGeometry::new(outer, inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let parsed = parse_candidates("8,6\n10,8\n12,8\n14,10\n16,12\n18,14");
        assert_eq!(parsed.geometries.len(), 6);
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.geometries[2], TubeGeometry::new(12.0, 8.0));
    }

    #[test]
    fn test_spaces_and_surrounding_whitespace() {
        let parsed = parse_candidates("\n\n  12 , 8\n1 4,1 0\n\n");
        assert_eq!(
            parsed.geometries,
            vec![TubeGeometry::new(12.0, 8.0), TubeGeometry::new(14.0, 10.0)]
        );
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let parsed = parse_candidates("12,8\n12\n12,8,4\nx,y\n\n10,10\n9,11\n16,12");
        assert_eq!(
            parsed.geometries,
            vec![TubeGeometry::new(12.0, 8.0), TubeGeometry::new(16.0, 12.0)]
        );
        let lines: Vec<usize> = parsed.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_source_lines_track_skipped_lines() {
        let parsed = parse_candidates("x\n12,8\n\ninf,8");
        assert_eq!(parsed.geometries.len(), 2);
        assert_eq!(parsed.source_line(0), Some(2));
        assert_eq!(parsed.source_line(1), Some(4));
        assert_eq!(parsed.source_line(2), None);
    }

    #[test]
    fn test_keeps_input_order() {
        let parsed = parse_candidates("18,14\n8,6");
        assert_eq!(parsed.geometries[0].outer_diameter_mm, 18.0);
        assert_eq!(parsed.geometries[1].outer_diameter_mm, 8.0);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_candidates("").is_empty());
        assert!(parse_candidates("   \n  ").is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let parsed = parse_candidates("8,6\r\n10,8\r\n");
        assert_eq!(parsed.geometries.len(), 2);
    }
}
