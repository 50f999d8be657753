use crate::domain::submission::SubmissionRecord;
use crate::error::{Result, SdkError};
use std::io::{BufRead, BufReader, Read};

/// Reads recorded submissions from a JSON-lines source.
///
/// Each non-blank line holds one [`SubmissionRecord`]. A line that fails to
/// parse yields an error item; the lines after it are still read.
pub struct ResultReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ResultReader<R> {
    /// Creates a new `ResultReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<SubmissionRecord>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(SdkError::from)),
            Err(e) => Some(Err(SdkError::from(e))),
        })
    }
}
