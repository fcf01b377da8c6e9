// src/csv.rs
//! Parser adapter: raw CSV text → ordered rows of string cells.
//!
//! Rows are read without an implicit header and with flexible lengths, so
//! short or long rows survive parsing and are judged later by the
//! normalizer (`record`). Header resolution lives here because it only
//! depends on the shape of the first two rows.

use std::io::Write;

use ::csv::{ ReaderBuilder, StringRecord, WriterBuilder };

/* ---------------- Parsing ---------------- */

/// One parsed row plus where it came from (1-based line in the source text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRow {
    pub line: u64,
    pub cells: Vec<String>,
}

impl SourceRow {
    fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Parse every non-empty row. Quotes, embedded newlines and CRLF are handled
/// by the `csv` crate; rows whose cells are all empty are skipped.
pub fn parse_rows(text: &str) -> Result<Vec<SourceRow>, ::csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let bytes = text.as_bytes();
    let mut seen = 0usize;
    let mut line = 1u64;

    let mut rows = Vec::new();
    let mut rec = StringRecord::new();
    while reader.read_record(&mut rec)? {
        // The reader's own line counter ignores skipped blank lines, so
        // count newlines up to where the record really starts.
        let at = rec.position().map_or(seen, |p| p.byte() as usize);
        let start = record_start(bytes, at).max(seen);
        line += bytes[seen..start].iter().filter(|&&b| b == b'\n').count() as u64;
        seen = start;

        let row = SourceRow { line, cells: rec.iter().map(str::to_owned).collect() };
        if !row.is_blank() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// First byte at or after `at` that is not a line terminator.
fn record_start(bytes: &[u8], at: usize) -> usize {
    let mut i = at.min(bytes.len());
    while i < bytes.len() && matches!(bytes[i], b'\r' | b'\n') {
        i += 1;
    }
    i
}

/* ---------------- Header resolution ---------------- */

/// Where the field-name row sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Pick `FirstRow` or `SkipDescription` by looking for a `Name` cell.
    #[default]
    Auto,
    /// Row 0 names the fields.
    FirstRow,
    /// Row 0 is a human-readable description, row 1 names the fields.
    SkipDescription,
}

impl HeaderMode {
    /// Index of the header row for these rows. Never returns `Auto`'s guess
    /// past the end of `rows`.
    pub fn header_index(self, rows: &[SourceRow]) -> usize {
        match self {
            HeaderMode::FirstRow => 0,
            HeaderMode::SkipDescription => 1,
            HeaderMode::Auto => {
                if rows.first().is_some_and(names_fields) {
                    0
                } else if rows.get(1).is_some_and(names_fields) {
                    1
                } else {
                    0
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaderMode::Auto => "auto",
            HeaderMode::FirstRow => "first row",
            HeaderMode::SkipDescription => "skip description row",
        }
    }
}

fn names_fields(row: &SourceRow) -> bool {
    row.cells.iter().any(|c| c.trim().eq_ignore_ascii_case(crate::record::field::NAME))
}

/// Split parsed rows into (header row, data rows) according to `mode`.
/// Rows before the header row are discarded. `None` when there is no header row.
pub fn split_header(
    mut rows: Vec<SourceRow>,
    mode: HeaderMode,
) -> Option<(SourceRow, Vec<SourceRow>)> {
    let ix = mode.header_index(&rows);
    if ix >= rows.len() {
        return None;
    }
    let data = rows.split_off(ix + 1);
    let header = rows.pop()?;
    Some((header, data))
}

/* ---------------- Writing ---------------- */

/// Write an optional header row plus data rows with the given separator.
pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> Result<(), ::csv::Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);

    if let Some(h) = headers {
        out.write_record(h)?;
    }
    for r in rows {
        out.write_record(r)?;
    }
    out.flush()?;
    Ok(())
}

/// Same as `write_rows`, into a `String`.
pub fn rows_to_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> Result<String, ::csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, headers, rows, delim)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[SourceRow]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|r| r.cells.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn skips_blank_lines_and_empty_rows() {
        let rows = parse_rows("Name,Manufacturer\n\nBuddy,RoboCorp\n,\n\r\nDash,Wonder\n").unwrap();
        assert_eq!(
            cells(&rows),
            vec![vec!["Name", "Manufacturer"], vec!["Buddy", "RoboCorp"], vec!["Dash", "Wonder"]]
        );
    }

    #[test]
    fn keeps_quoted_commas_and_newlines() {
        let rows = parse_rows("Name,Description\n\"Cue\",\"Talks, jokes\nand drives\"\n").unwrap();
        assert_eq!(rows[1].cells[1], "Talks, jokes\nand drives");
    }

    #[test]
    fn strips_bom_and_records_lines() {
        let rows = parse_rows("\u{feff}Name\n\nBee-Bot\n").unwrap();
        assert_eq!(rows[0].cells[0], "Name");
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn lines_count_blank_and_crlf_lines() {
        let rows = parse_rows("Name,Price\r\n\r\n\r\nBee-Bot,$90\r\n\"Cue\",\"two\nlines\"\r\nDash,$150\r\n").unwrap();
        let lines: Vec<u64> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 4, 5, 7]);
    }

    #[test]
    fn ragged_rows_survive() {
        let rows = parse_rows("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(rows[1].cells.len(), 1);
        assert_eq!(rows[2].cells.len(), 4);
    }

    #[test]
    fn auto_header_detection() {
        let first = parse_rows("Name,Price\nBee-Bot,$90\n").unwrap();
        assert_eq!(HeaderMode::Auto.header_index(&first), 0);

        let two = parse_rows("Robot name,How much\n Name ,Price\nBee-Bot,$90\n").unwrap();
        assert_eq!(HeaderMode::Auto.header_index(&two), 1);

        let none = parse_rows("x,y\n1,2\n").unwrap();
        assert_eq!(HeaderMode::Auto.header_index(&none), 0);
    }

    #[test]
    fn split_header_skip_description() {
        let rows = parse_rows("desc,desc\nName,Price\nBee-Bot,$90\n").unwrap();
        let (h, data) = split_header(rows, HeaderMode::SkipDescription).unwrap();
        assert_eq!(h.cells, vec!["Name", "Price"]);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].cells[0], "Bee-Bot");
    }

    #[test]
    fn split_header_missing_row() {
        let rows = parse_rows("only a description\n").unwrap();
        assert!(split_header(rows, HeaderMode::SkipDescription).is_none());
        assert!(split_header(Vec::new(), HeaderMode::FirstRow).is_none());
    }

    #[test]
    fn writer_quotes_when_needed() {
        let rows = vec![vec![s!("Cue"), s!("Talks, jokes")]];
        let out = rows_to_string(Some(&[s!("Name"), s!("Description")]), &rows, b',').unwrap();
        assert_eq!(out, "Name,Description\nCue,\"Talks, jokes\"\n");
    }
}
