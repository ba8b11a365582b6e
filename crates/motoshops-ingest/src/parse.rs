//! Comma-delimited text parsing.
//!
//! Quoting is deliberately minimal: a `"` toggles the in-quotes state and is
//! dropped from the value, so commas inside a quoted span are literal. There
//! is no escape for a literal quote; `""` inside a field simply toggles twice.

use std::collections::HashMap;

use motoshops_core::ShopRecord;

use crate::normalize::normalize_row;

/// Header names plus data rows, each padded or truncated to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Pair every row with the header names.
    pub fn raw_rows(&self) -> impl Iterator<Item = RawRow> + '_ {
        self.rows.iter().map(|values| {
            self.headers
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect()
        })
    }
}

/// One untyped data row keyed by column name.
///
/// Blank values are indistinguishable from missing columns: both read back as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// The trimmed value for `column`, or `None` when absent or blank.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The first non-blank value among `aliases`, tried in order.
    #[must_use]
    pub fn first_of(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| self.get(alias))
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawRow {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Split `text` into a header row and data rows.
///
/// A leading UTF-8 byte-order mark is dropped. Input with fewer than two
/// lines has no data rows and yields an empty table.
#[must_use]
pub fn parse_delimited(text: &str) -> ParsedTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.trim().split('\n');

    let Some(header_line) = lines.next() else {
        return ParsedTable::default();
    };
    let headers = split_line(header_line);

    let rows: Vec<Vec<String>> = lines
        .map(|line| {
            let mut values = split_line(line);
            values.resize(headers.len(), String::new());
            values
        })
        .collect();

    if rows.is_empty() {
        return ParsedTable::default();
    }

    ParsedTable { headers, rows }
}

/// Parse CSV text and normalize every data row into a [`ShopRecord`], in
/// input order. Row indexes passed to the normalizer are 1-based.
#[must_use]
pub fn parse_shops_csv(text: &str) -> Vec<ShopRecord> {
    parse_delimited(text)
        .raw_rows()
        .enumerate()
        .map(|(idx, row)| normalize_row(&row, idx + 1))
        .collect()
}

fn split_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    values.push(current.trim().to_string());

    values
}
