use crate::domain::outcome::OutcomeSummary;
use crate::error::Result;
use std::io::Write;

pub const HEADER: [&str; 5] = ["index", "status", "exit_code", "fees", "message"];

/// Writes outcome summaries as CSV, one row per processed submission.
///
/// The header row is always written, even when there are no outcomes.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_outcomes(&mut self, outcomes: impl IntoIterator<Item = OutcomeSummary>) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for outcome in outcomes {
            self.writer.serialize(outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::OutcomeStatus;
    use crate::domain::tokens::Tokens;

    #[test]
    fn test_writer_output_format() {
        let outcomes = vec![
            OutcomeSummary {
                index: 0,
                status: OutcomeStatus::Ok,
                exit_code: Some(0),
                fees: Tokens::from_nano(12_500_000),
                message: String::new(),
            },
            OutcomeSummary {
                index: 1,
                status: OutcomeStatus::Failed,
                exit_code: None,
                fees: Tokens::ZERO,
                message: "Transport error: refused".into(),
            },
        ];

        let mut buf = Vec::new();
        OutcomeWriter::new(&mut buf).write_outcomes(outcomes).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "index,status,exit_code,fees,message");
        assert_eq!(lines[1], "0,ok,0,0.0125,");
        assert_eq!(lines[2], "1,failed,,0,Transport error: refused");
    }

    #[test]
    fn test_writer_emits_header_without_outcomes() {
        let mut buf = Vec::new();
        OutcomeWriter::new(&mut buf).write_outcomes(Vec::new()).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "index,status,exit_code,fees,message\n");
    }
}
