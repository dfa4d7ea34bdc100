//! CSV report file writer

use chrono::{DateTime, Local};
use log::debug;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::report;

use super::{header_line, ReportRow};

/// Escape a value for CSV output
pub(super) fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build the report file name for the given creation time.
///
/// The fixed-width `%Y%m%d%H%M%S` stamp keeps names lexically sortable
/// and unique at one-second granularity.
pub fn report_file_name(created: &DateTime<Local>) -> String {
    format!(
        "{}{}{}",
        report::FILE_PREFIX,
        created.format(report::TIMESTAMP_FORMAT),
        report::FILE_EXT
    )
}

/// Write the report to a timestamped file in the current directory.
///
/// The file is opened with create-new semantics: a same-second rerun fails
/// here instead of truncating the earlier report. The caller treats any
/// returned error as non-fatal.
pub fn write_report(rows: &[ReportRow]) -> io::Result<PathBuf> {
    let name = report_file_name(&Local::now());
    let path = PathBuf::from(&name);
    write_report_to(&path, rows)?;
    debug!("Wrote {} rows to {}", rows.len(), name);
    Ok(path)
}

/// Write header and rows to the given path
fn write_report_to(path: &Path, rows: &[ReportRow]) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header_line())?;
    for row in rows {
        writeln!(writer, "{}", row.to_csv_line())?;
    }
    writer.flush()
}
