//! render
//!
//! Record rendering: JSON or fixed-column tables.
//!
//! # Design
//!
//! The output format is a closed enum. Commands resolve the user's format
//! string once (via [`FromStr`]) and from then on every dispatch is an
//! exhaustive match - an unknown format can only fail at the parsing
//! boundary, as [`UnsupportedFormatError`], never by silently falling back
//! to a format the user did not ask for.
//!
//! Table rendering is column-bounded: each cell is truncated to at most the
//! given width in characters. Default bounds differ per resource kind and
//! are exposed as constants so callers can override them.

use comfy_table::{presets, Table};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::client::{Dashboard, Folder};

/// Default column width bound for folder tables.
pub const FOLDER_COL_WIDTH: usize = 60;

/// Default column width bound for dashboard tables.
pub const DASHBOARD_COL_WIDTH: usize = 90;

/// The user asked for an output format this tool does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format {0:?} (expected \"table\" or \"json\")")]
pub struct UnsupportedFormatError(pub String);

/// Errors from rendering a record sequence.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output format for resource records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-column tabular text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(UnsupportedFormatError(other.to_string())),
        }
    }
}

/// A record kind that can be laid out as table rows.
///
/// The column set is fixed per resource kind; rows mirror the input order.
pub trait Tabular {
    /// Column headers, in display order.
    fn columns() -> &'static [&'static str];

    /// One row of cells for this record, matching [`columns`](Self::columns).
    fn cells(&self) -> Vec<String>;
}

impl Tabular for Folder {
    fn columns() -> &'static [&'static str] {
        &["ID", "UID", "TITLE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.uid.clone(), self.title.clone()]
    }
}

impl Tabular for Dashboard {
    fn columns() -> &'static [&'static str] {
        &["ID", "UID", "TITLE", "FOLDER"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.uid.clone(),
            self.title.clone(),
            self.folder_title.clone(),
        ]
    }
}

/// Render a sequence of records in the given format.
///
/// JSON output serializes the full sequence with the records' natural field
/// structure. Table output produces one row per record in input order, each
/// cell truncated to at most `max_col_width` characters.
pub fn render<T>(records: &[T], format: OutputFormat, max_col_width: usize) -> Result<String, RenderError>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => Ok(to_table(records, max_col_width)),
    }
}

/// Render a single record.
///
/// JSON output is the record object itself, not a one-element array. Table
/// output is a single-row table.
pub fn render_one<T>(record: &T, format: OutputFormat, max_col_width: usize) -> Result<String, RenderError>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Table => Ok(to_table(std::slice::from_ref(record), max_col_width)),
    }
}

fn to_table<T: Tabular>(records: &[T], max_col_width: usize) -> String {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(T::columns().iter().map(|c| c.to_string()));
    for record in records {
        table.add_row(
            record
                .cells()
                .into_iter()
                .map(|cell| truncate(&cell, max_col_width)),
        );
    }
    table.to_string()
}

/// Truncate to at most `max_chars` characters, respecting UTF-8 boundaries.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return s.chars().take(max_chars).collect();
    }
    let truncated: String = s.chars().take(max_chars - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn folders() -> Vec<Folder> {
        vec![
            Folder {
                id: 1,
                uid: "a".to_string(),
                title: "A".to_string(),
            },
            Folder {
                id: 2,
                uid: "b".to_string(),
                title: "B".to_string(),
            },
            Folder {
                id: 3,
                uid: "c".to_string(),
                title: "C".to_string(),
            },
        ]
    }

    #[test]
    fn format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn unknown_format_rejected() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err, UnsupportedFormatError("yaml".to_string()));
    }

    #[test]
    fn table_has_header_and_row_order() {
        let out = render(&folders(), OutputFormat::Table, FOLDER_COL_WIDTH).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, vec!["ID", "UID", "TITLE"]);

        // One row per record, mirroring input order.
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["1", "a", "A"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["2", "b", "B"]
        );
        assert_eq!(
            lines[3].split_whitespace().collect::<Vec<_>>(),
            vec!["3", "c", "C"]
        );
    }

    #[test]
    fn dashboard_table_has_folder_column() {
        let dashboards = vec![Dashboard {
            id: 7,
            uid: "dash".to_string(),
            title: "Requests".to_string(),
            folder_title: "Production".to_string(),
            model: serde_json::Map::new(),
        }];
        let out = render(&dashboards, OutputFormat::Table, DASHBOARD_COL_WIDTH).unwrap();

        let header: Vec<&str> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["ID", "UID", "TITLE", "FOLDER"]);
        assert!(out.contains("Production"));
    }

    #[test]
    fn long_titles_truncated_to_bound() {
        let bound = 10;
        let folder = Folder {
            id: 1,
            uid: "u".to_string(),
            title: "a".repeat(50),
        };
        let out = render_one(&folder, OutputFormat::Table, bound).unwrap();

        for cell in out.lines().flat_map(|l| l.split_whitespace()) {
            assert!(
                cell.chars().count() <= bound,
                "cell {:?} exceeds bound {}",
                cell,
                bound
            );
        }
        assert!(out.contains("aaaaaaa..."));
    }

    #[test]
    fn json_roundtrip_preserves_fields() {
        let out = render(&folders(), OutputFormat::Json, FOLDER_COL_WIDTH).unwrap();
        let parsed: Vec<Folder> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, folders());
    }

    #[test]
    fn single_record_json_is_an_object() {
        let folder = &folders()[0];
        let out = render_one(folder, OutputFormat::Json, FOLDER_COL_WIDTH).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"id": 1, "uid": "a", "title": "A"}));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "日本語のダッシュボード";
        let out = truncate(s, 8);
        assert_eq!(out.chars().count(), 8);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_holds_for_tiny_bounds() {
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
