//! CSV export of harvested records.

use std::path::Path;

use crate::{EmailRecord, Result};

/// Header row of the exported table.
pub const CSV_HEADER: &str = "Site Name,Email";

/// Default file name for the exported table.
pub const DEFAULT_CSV_FILE: &str = "emails.csv";

/// Renders records as a two-column CSV table with a header row.
pub fn to_csv(records: &[EmailRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&escape_field(&record.site_title));
        csv.push(',');
        csv.push_str(&escape_field(&record.email));
        csv.push('\n');
    }
    csv
}

/// Writes records as UTF-8 CSV to `path`.
pub fn write_csv(path: impl AsRef<Path>, records: &[EmailRecord]) -> Result<()> {
    std::fs::write(path, to_csv(records).as_bytes())?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
