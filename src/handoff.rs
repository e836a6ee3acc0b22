//! CSV handoff between the storefront run and the downstream consumer.
//!
//! The handoff file is a flat, append-only UTF-8 CSV with a stable header:
//! `order_id,product_title,product_url,generated_at_utc`. The writer adds
//! the header only when creating the file; rows are appended one per
//! completed run, duplicates allowed. The consumer side reads rows lazily
//! and fails fast when the file is missing, since that indicates a
//! misconfigured pipeline rather than a transient condition.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed column order of the handoff file.
pub const HANDOFF_HEADERS: [&str; 4] = [
    "order_id",
    "product_title",
    "product_url",
    "generated_at_utc",
];

/// One completed run's business outcome.
///
/// Fields default to the empty string; a missing value is encoded as an
/// empty cell, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub product_title: String,
    pub product_url: String,
    /// ISO-8601 UTC timestamp with second precision and `Z` suffix
    pub generated_at_utc: String,
}

impl OrderRecord {
    fn fields(&self) -> [&str; 4] {
        [
            &self.order_id,
            &self.product_title,
            &self.product_url,
            &self.generated_at_utc,
        ]
    }

    fn from_cells(cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        Self {
            order_id: cells.next().unwrap_or_default(),
            product_title: cells.next().unwrap_or_default(),
            product_url: cells.next().unwrap_or_default(),
            generated_at_utc: cells.next().unwrap_or_default(),
        }
    }
}

/// Result type for handoff consumer operations
pub type HandoffResult<T> = Result<T, HandoffError>;

/// Error types for handoff consumer operations
#[derive(Debug)]
pub enum HandoffError {
    /// The input file was not present when the consumer started
    MissingInput(PathBuf),

    /// I/O error while reading rows
    Io(io::Error),
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffError::MissingInput(path) => {
                write!(f, "Input CSV not found: {}", path.display())
            }
            HandoffError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for HandoffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandoffError::MissingInput(_) => None,
            HandoffError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for HandoffError {
    fn from(err: io::Error) -> Self {
        HandoffError::Io(err)
    }
}

/// Append one order row, creating parent directories and writing the header
/// line first when the file does not yet exist.
pub fn append_row(path: &Path, record: &OrderRecord) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let existed = path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if !existed {
        writeln!(file, "{}", HANDOFF_HEADERS.join(","))?;
    }

    let cells: Vec<String> = record.fields().iter().map(|f| encode_cell(f)).collect();
    writeln!(file, "{}", cells.join(","))?;
    Ok(())
}

/// Open the handoff file for lazy row-by-row reading.
///
/// Fails fast when the file does not exist at call time.
pub fn read_rows(path: &Path) -> HandoffResult<RowReader> {
    if !path.exists() {
        return Err(HandoffError::MissingInput(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();
    // Skip the header line
    lines.next();
    Ok(RowReader { lines })
}

/// Lazy iterator over data rows of a handoff file, in file order.
///
/// Every yielded record has all four fields populated, padding absent
/// trailing cells with empty strings.
pub struct RowReader {
    lines: io::Lines<BufReader<File>>,
}

impl Iterator for RowReader {
    type Item = io::Result<OrderRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(Ok(OrderRecord::from_cells(split_line(&line))));
        }
    }
}

/// Quote a cell when it contains a delimiter or quote, doubling embedded
/// quotes. Newlines flatten to spaces so the file stays line-oriented.
fn encode_cell(cell: &str) -> String {
    let flat: String = cell
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

/// Split one CSV line into cells, honoring quoted cells.
fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                _ => cell.push(ch),
            }
        }
    }
    cells.push(cell);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_csv() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("orders.csv");
        (dir, path)
    }

    #[test]
    fn test_header_written_exactly_once() {
        let (_dir, path) = scratch_csv();

        for i in 0..3 {
            let record = OrderRecord {
                order_id: format!("ORD{}", i),
                ..Default::default()
            };
            append_row(&path, &record).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "order_id,product_title,product_url,generated_at_utc");
        assert_eq!(
            content.matches("order_id,product_title").count(),
            1,
            "header must appear exactly once"
        );
    }

    #[test]
    fn test_missing_fields_render_as_empty_cells() {
        let (_dir, path) = scratch_csv();

        append_row(
            &path,
            &OrderRecord {
                order_id: "ORD1".to_string(),
                product_title: "Shoe".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        append_row(
            &path,
            &OrderRecord {
                order_id: "ORD2".to_string(),
                product_url: "http://x".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "ORD1,Shoe,,");
        assert_eq!(lines[2], "ORD2,,http://x,");
    }

    #[test]
    fn test_read_rows_yields_records_in_file_order() {
        let (_dir, path) = scratch_csv();

        for i in 0..3 {
            append_row(
                &path,
                &OrderRecord {
                    order_id: format!("ORD{}", i),
                    product_title: "Shirt".to_string(),
                    product_url: "http://shop/shirt".to_string(),
                    generated_at_utc: "2026-01-01T00:00:00Z".to_string(),
                },
            )
            .unwrap();
        }

        let rows: Vec<OrderRecord> = read_rows(&path)
            .unwrap()
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].order_id, "ORD0");
        assert_eq!(rows[2].order_id, "ORD2");
        assert_eq!(rows[1].product_title, "Shirt");
        assert_eq!(rows[1].generated_at_utc, "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_partial_rows_pad_with_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "order_id,product_title,product_url,generated_at_utc\nORD1,Shoe\nORD2\n",
        )
        .unwrap();

        let rows: Vec<OrderRecord> = read_rows(&path)
            .unwrap()
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_url, "");
        assert_eq!(rows[0].generated_at_utc, "");
        assert_eq!(rows[1].order_id, "ORD2");
        assert_eq!(rows[1].product_title, "");
    }

    #[test]
    fn test_read_rows_missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        match read_rows(&path) {
            Err(HandoffError::MissingInput(p)) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_quoted_cells_round_trip() {
        let (_dir, path) = scratch_csv();

        let record = OrderRecord {
            order_id: "ORD1".to_string(),
            product_title: "Shoes, size 9 \"wide\"".to_string(),
            product_url: "http://shop/shoes?a=1&b=2".to_string(),
            generated_at_utc: "2026-01-01T00:00:00Z".to_string(),
        };
        append_row(&path, &record).unwrap();

        let rows: Vec<OrderRecord> = read_rows(&path)
            .unwrap()
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows[0], record);
    }

    #[test]
    fn test_newlines_flatten_to_spaces() {
        assert_eq!(encode_cell("two\nlines"), "two lines");
        assert_eq!(encode_cell("cr\r\nlf"), "cr  lf");
    }

    #[test]
    fn test_split_line_basic() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_line("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_line("\"a,b\",c"), vec!["a,b", "c"]);
        assert_eq!(split_line("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
    }
}
