use log::{debug, info};
use snafu::Snafu;

use std::collections::BTreeMap;

pub mod assemble;
pub mod cases;
pub mod io_csv;
pub mod io_docx;

use crate::args::Args;
use crate::report::assemble::assemble_report;
use crate::report::io_docx::DocxSink;

/// One respondent's answers for a single case study, as read from the export.
/// The `-99` sentinel has already been stripped from the free-text fields.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResponseRecord {
    pub respondent_id: String,
    pub irb_consideration: String,
    pub key_factors: String,
    pub ethical_concerns: String,
}

impl ResponseRecord {
    /// True when at least one of the free-text answers survived sentinel stripping.
    /// Records without free text are dropped during extraction.
    pub fn has_free_text(&self) -> bool {
        !self.key_factors.is_empty() || !self.ethical_concerns.is_empty()
    }
}

/// Responses keyed by case study id, in input row order.
/// Invariant: every case study id has an entry, possibly empty.
pub type GroupedResponses = BTreeMap<u8, Vec<ResponseRecord>>;

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Error opening input file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading the header row"))]
    CsvHeader { source: csv::Error },
    #[snafu(display("Error parsing input line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Column {column} is missing from the input header"))]
    MissingColumn { column: String },
    #[snafu(display("Error creating output file {path}"))]
    CreatingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing document {path}"))]
    WritingDocument {
        source: docx_rs::DocxError,
        path: String,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Runs the whole conversion: extract the grouped responses from the input CSV,
/// assemble the document, and save it to the output path.
pub fn run_report(args: &Args) -> ReportResult<()> {
    let responses = io_csv::read_grouped_responses(&args.infile)?;
    for (case_id, records) in &responses {
        debug!("run_report: case {}: {} responses", case_id, records.len());
    }
    info!(
        "Read {} qualifying responses from {}",
        responses.values().map(Vec::len).sum::<usize>(),
        args.infile
    );

    let mut sink = DocxSink::new();
    assemble_report(&mut sink, &responses);
    sink.save(&args.outfile)?;
    info!("Wrote report to {}", args.outfile);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::io_csv::testdata::export_with_rows;

    use std::path::Path;

    fn args(infile: &Path, outfile: &Path) -> Args {
        Args {
            infile: infile.display().to_string(),
            outfile: outfile.display().to_string(),
            verbose: false,
        }
    }

    #[test]
    fn writes_a_docx_report() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("survey.csv");
        let outfile = dir.path().join("report.docx");
        let data = export_with_rows(&[&[
            ("ResponseId", "R1"),
            ("Q137", "Yes"),
            ("Q141", "Some concern"),
        ]]);
        std::fs::write(&infile, data).unwrap();

        run_report(&args(&infile, &outfile)).unwrap();

        let bytes = std::fs::read(&outfile).unwrap();
        assert!(bytes.starts_with(b"PK"), "expected a zip container");
    }

    #[test]
    fn fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let res = run_report(&args(
            &dir.path().join("nope.csv"),
            &dir.path().join("out.docx"),
        ));
        assert!(matches!(res, Err(ReportError::CsvOpen { .. })));
    }

    #[test]
    fn fails_on_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("survey.csv");
        std::fs::write(&infile, export_with_rows(&[])).unwrap();
        let outfile = dir.path().join("missing-dir").join("out.docx");
        let res = run_report(&args(&infile, &outfile));
        assert!(matches!(res, Err(ReportError::CreatingOutput { .. })));
    }
}
