//! FILENAME: parser/src/tokenizer.rs
//! PURPOSE: Scans a raw CSV document and produces rows of string cells.
//! CONTEXT: This is the first stage of the ingestion pipeline. A single
//! left-to-right scan with one character of lookahead and one bit of state
//! (inside/outside a quoted field) handles quoting, escaped quotes, and
//! embedded delimiters.
//!
//! QUOTING RULES:
//! - Outside quotes: `"` opens a quoted field, `,` ends the cell,
//!   `\n` ends the row, `\r` is ignored (supports \r\n line endings).
//! - Inside quotes: `""` is an escaped literal quote; a single `"` closes
//!   the quoted field; commas and newlines are appended literally.

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

/// One tokenized line: an ordered sequence of raw cell strings.
/// The first row of a document is the header; the rest are data.
pub type Row = Vec<String>;

pub struct Tokenizer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input: input.chars().peekable(),
        }
    }

    /// Consumes the tokenizer and returns every row in the document.
    ///
    /// The final cell and row are flushed even when the input has no
    /// trailing newline. Rows consisting of a single empty cell are dropped
    /// afterwards; a trailing blank line would otherwise produce a spurious
    /// empty row. A row with two or more cells is never dropped, so a line
    /// like `,x` whose first column is intentionally empty survives.
    pub fn tokenize(mut self) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        let mut row: Row = Vec::new();
        let mut cell = String::new();

        while let Some(ch) = self.input.next() {
            match ch {
                '"' => self.read_quoted(&mut cell),
                ',' => row.push(mem::take(&mut cell)),
                '\n' => {
                    row.push(mem::take(&mut cell));
                    rows.push(mem::take(&mut row));
                }
                '\r' => {}
                _ => cell.push(ch),
            }
        }

        // Flush whatever the last line left behind.
        row.push(cell);
        rows.push(row);

        rows.retain(|r| !(r.len() == 1 && r[0].is_empty()));
        rows
    }

    /// Reads the remainder of a quoted field into `cell`.
    ///
    /// The opening quote has already been consumed. A doubled quote is an
    /// escaped literal quote and does not close the field. If the input ends
    /// before the closing quote, the field simply ends at end-of-text.
    fn read_quoted(&mut self, cell: &mut String) {
        while let Some(ch) = self.input.next() {
            if ch == '"' {
                if self.input.peek() == Some(&'"') {
                    // Escaped quote - add one quote and stay inside the field
                    cell.push('"');
                    self.input.next();
                } else {
                    return;
                }
            } else {
                cell.push(ch);
            }
        }
    }
}

/// Tokenizes a complete CSV document into rows of raw cells.
///
/// Cells are returned verbatim: whitespace-only cells are preserved, and no
/// trimming happens here. Trimming is the schema mapper's responsibility.
pub fn tokenize(text: &str) -> Vec<Row> {
    Tokenizer::new(text).tokenize()
}
