use serde_json::Value;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes one JSON value per line into a temporary file.
pub fn write_records(records: &[Value]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for record in records {
        writeln!(file, "{record}")?;
    }
    file.flush()?;
    Ok(file)
}

#[allow(dead_code)]
pub fn settled(aborted: bool, exit_code: i32) -> Value {
    serde_json::json!({"transaction": {"aborted": aborted, "exitCode": exit_code}})
}
