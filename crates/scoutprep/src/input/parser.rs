//! Delimited roster parser.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::SourceMetadata;
use crate::error::{Result, ScoutprepError};
use crate::table::{Cell, Table};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Parses a delimited roster file into a text-cell table.
///
/// No type coercion happens here; typing is the job of downstream
/// stages. The only normalization applied at load is whitespace
/// trimming of column names.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table with its source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| ScoutprepError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes into a table of text cells, trimming header names.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ScoutprepError::Format(
                "missing or empty header row".to_string(),
            ));
        }

        let expected = headers.len();
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            let mut row: Vec<Cell> = record
                .iter()
                .map(|value| Cell::Text(value.to_string()))
                .collect();
            // Short records pad out, long records truncate.
            row.resize(expected, Cell::Text(String::new()));
            rows.push(row);
        }

        Ok(Table::with_rows(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines: the
/// candidate with the highest consistent per-line count wins.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return Err(ScoutprepError::Format(
            "empty input, no header row to parse".to_string(),
        ));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_outside_quotes(line, delim))
            .collect();

        let first = counts[0];
        if first == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first);
        let score = if consistent { first * 100 } else { first };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_outside_quotes(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        assert_eq!(count_outside_quotes("a,\"b,c\",d", b','), 2);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let parser = Parser::new();
        let data = b" full_name , birth_date \nLionel Messi,1987-06-24";
        let table = parser.parse_bytes(data, b',').unwrap();
        assert_eq!(table.headers(), ["full_name", "birth_date"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_short_rows_pad_to_header_width() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2";
        let table = parser.parse_bytes(data, b',').unwrap();
        assert_eq!(table.get(0, 2), Some(&Cell::Text(String::new())));
    }

    #[test]
    fn test_empty_input_is_format_error() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"", b',').unwrap_err();
        assert!(matches!(err, ScoutprepError::Format(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let parser = Parser::new();
        let err = parser.parse_file("/no/such/roster.csv").unwrap_err();
        assert!(matches!(err, ScoutprepError::Io { .. }));
    }
}
