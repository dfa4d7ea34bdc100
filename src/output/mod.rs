//! Report output module
//!
//! One flat row per application, echoed to stdout as produced and written
//! to a timestamped CSV file at end of run.

mod csv;

use std::collections::BTreeMap;

use crate::config::report;

pub use self::csv::{report_file_name, write_report};

/// Flattened application data for the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub foundation: String,
    pub app_name: String,
    pub organization: String,
    pub space: String,
    pub instances: u32,
    pub state: String,
    pub metadata: String,
}

impl ReportRow {
    /// Render the row as its seven string fields, in header order
    pub fn fields(&self) -> [String; 7] {
        [
            self.foundation.clone(),
            self.app_name.clone(),
            self.organization.clone(),
            self.space.clone(),
            self.instances.to_string(),
            self.state.clone(),
            self.metadata.clone(),
        ]
    }

    /// Render the row as one CSV-escaped line (no trailing newline)
    pub fn to_csv_line(&self) -> String {
        self.fields()
            .iter()
            .map(|f| csv::escape_csv(f))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// The fixed header as one CSV line
pub fn header_line() -> String {
    report::HEADER.join(",")
}

/// Encode an annotation map into the single Metadata field.
///
/// Pairs are rendered as `key=value` and joined with `;`; BTreeMap
/// iteration keeps the result sorted by key and stable across runs.
pub fn format_annotations(annotations: &BTreeMap<String, String>) -> String {
    annotations
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(";")
}
