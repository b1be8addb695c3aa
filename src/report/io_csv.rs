// Primitives for reading the survey export CSV.

use std::io::Read;

use csv::StringRecord;
use log::debug;
use snafu::{OptionExt, ResultExt};

use crate::report::cases::{case_columns, case_ids, CASE_COUNT};
use crate::report::*;

/// Column holding the respondent identifier.
pub const RESPONSE_ID_COLUMN: &str = "ResponseId";

/// Number of non-data rows following the header in the export format
/// (the question-text row and the import-id row).
pub const HEADER_SKIP_ROWS: usize = 2;

/// Placeholder embedded in free-text cells for a skipped answer. Stripped by
/// substring removal, since it can appear inside otherwise free text.
const MISSING_SENTINEL: &str = "-99";

// Header indexes for the three columns of one case study.
struct CaseColumnIndexes {
    irb_consideration: usize,
    key_factors: usize,
    ethical_concerns: usize,
}

/// Reads the export at `path` and groups the qualifying responses by case study.
pub fn read_grouped_responses(path: &str) -> ReportResult<GroupedResponses> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    parse_grouped_responses(rdr)
}

/// Same as [read_grouped_responses], from an already-opened reader.
pub fn parse_grouped_responses<R: Read>(mut rdr: csv::Reader<R>) -> ReportResult<GroupedResponses> {
    let headers = rdr.headers().context(CsvHeaderSnafu {})?.clone();
    debug!("parse_grouped_responses: header: {:?}", headers);

    // Resolve every required column up front so that a missing column fails
    // before any row is read.
    let response_id_idx = column_index(&headers, RESPONSE_ID_COLUMN)?;
    let mut case_indexes: Vec<CaseColumnIndexes> = Vec::with_capacity(CASE_COUNT as usize);
    for case_id in case_ids() {
        let cols = case_columns(case_id);
        case_indexes.push(CaseColumnIndexes {
            irb_consideration: column_index(&headers, cols.irb_consideration)?,
            key_factors: column_index(&headers, cols.key_factors)?,
            ethical_concerns: column_index(&headers, cols.ethical_concerns)?,
        });
    }

    let mut grouped: GroupedResponses = case_ids().map(|id| (id, Vec::new())).collect();

    for (idx, record_r) in rdr.into_records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let record = record_r.context(CsvLineParseSnafu { lineno })?;
        if idx < HEADER_SKIP_ROWS {
            debug!("parse_grouped_responses: skipping non-data line {}", lineno);
            continue;
        }
        debug!("parse_grouped_responses: line {}: {:?}", lineno, record);

        let respondent_id = field(&record, response_id_idx);
        for (case_id, indexes) in case_ids().zip(&case_indexes) {
            let response = ResponseRecord {
                respondent_id: respondent_id.to_string(),
                irb_consideration: field(&record, indexes.irb_consideration).to_string(),
                key_factors: strip_sentinel(field(&record, indexes.key_factors)),
                ethical_concerns: strip_sentinel(field(&record, indexes.ethical_concerns)),
            };
            if response.has_free_text() {
                grouped.entry(case_id).or_default().push(response);
            }
        }
    }
    Ok(grouped)
}

fn column_index(headers: &StringRecord, name: &str) -> ReportResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .context(MissingColumnSnafu { column: name })
}

// Rows shorter than the header are read permissively, with empty cells.
fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn strip_sentinel(value: &str) -> String {
    value.replace(MISSING_SENTINEL, "")
}
