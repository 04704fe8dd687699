//! CSV batch driver.
//!
//! Reads a table whose rows carry a record id and a JSON payload, redacts each
//! payload, and writes a table of `record_id,redacted_data_json,is_pii`.
//!
//! Failures are row-scoped. A row whose payload cannot be decoded is written as
//! the fallback row (`{}`, `False`) and the batch carries on. Only problems with
//! the table itself (unreadable header, missing column, I/O on either side)
//! abort the run.

use std::borrow::Cow;
use std::io;

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::{decode_payload, encode_record};
use crate::redaction::{Redaction, Redactor};

/// Header of the output table.
pub const OUTPUT_HEADERS: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Payload written for rows that could not be redacted.
pub const FALLBACK_PAYLOAD: &str = "{}";

/// Which input columns hold the record id and the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub id_column: String,
    pub payload_column: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            id_column: "record_id".to_string(),
            payload_column: "data_json".to_string(),
        }
    }
}

/// Row counts for a finished batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows written, including fallback rows.
    pub rows: usize,
    /// Rows where at least one field was flagged as PII.
    pub pii_rows: usize,
    /// Rows replaced by the fallback row.
    pub failed_rows: usize,
}

#[derive(Serialize)]
struct OutputRow<'a> {
    record_id: &'a str,
    redacted_data_json: &'a str,
    is_pii: &'static str,
}

fn pii_flag(found: bool) -> &'static str {
    if found {
        "True"
    } else {
        "False"
    }
}

/// Decodes one payload and redacts it with the built-in rules.
pub fn redact_row(payload: &str) -> Result<Redaction> {
    let record = decode_payload(payload)?;
    Ok(Redactor::new().redact(&record))
}

/// Redacts every row of the CSV in `input` and writes the result to `output`.
///
/// One output row is written per input row, in input order.
pub fn redact_csv<R, W>(input: R, output: W, options: &BatchOptions) -> Result<BatchSummary>
where
    R: io::Read,
    W: io::Write,
{
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.byte_headers()?.clone();
    let id_index = column_index(&headers, &options.id_column)?;
    let payload_index = column_index(&headers, &options.payload_column)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(output);
    writer.write_record(OUTPUT_HEADERS)?;

    let redactor = Redactor::new();
    let mut summary = BatchSummary::default();
    let mut row = ByteRecord::new();

    while reader.read_byte_record(&mut row)? {
        let record_id = row
            .get(id_index)
            .map(String::from_utf8_lossy)
            .unwrap_or_default();

        let (payload, found) = match redact_cell(&redactor, row.get(payload_index), options) {
            Ok((payload, redaction)) => {
                debug!(
                    record_id = %record_id,
                    masked = ?redaction.masked_categories(),
                    "redacted row"
                );
                (Cow::Owned(payload), redaction.found())
            }
            Err(err) => {
                warn!(
                    record_id = %record_id,
                    error = %err,
                    "row could not be redacted, writing empty payload"
                );
                summary.failed_rows += 1;
                (Cow::Borrowed(FALLBACK_PAYLOAD), false)
            }
        };

        writer.serialize(OutputRow {
            record_id: &record_id,
            redacted_data_json: &payload,
            is_pii: pii_flag(found),
        })?;
        summary.rows += 1;
        if found {
            summary.pii_rows += 1;
        }
    }

    writer.flush()?;
    info!(
        rows = summary.rows,
        pii_rows = summary.pii_rows,
        failed_rows = summary.failed_rows,
        "batch complete"
    );
    Ok(summary)
}

fn column_index(headers: &ByteRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name.as_bytes())
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn redact_cell(
    redactor: &Redactor,
    cell: Option<&[u8]>,
    options: &BatchOptions,
) -> Result<(String, Redaction)> {
    let bytes = cell.ok_or_else(|| Error::MissingValue(options.payload_column.clone()))?;
    let record = decode_payload(std::str::from_utf8(bytes)?)?;
    let redaction = redactor.redact(&record);
    let payload = encode_record(redaction.record())?;
    Ok((payload, redaction))
}

#[cfg(test)]
mod tests {
    use super::{column_index, pii_flag, redact_row};
    use crate::error::Error;
    use csv::ByteRecord;

    #[test]
    fn flag_is_capitalised() {
        assert_eq!(pii_flag(true), "True");
        assert_eq!(pii_flag(false), "False");
    }

    #[test]
    fn column_lookup_is_exact() {
        let headers = ByteRecord::from(vec!["record_id", "data_json"]);
        assert_eq!(column_index(&headers, "data_json").unwrap(), 1);
        assert!(matches!(
            column_index(&headers, "Data_Json"),
            Err(Error::MissingColumn(name)) if name == "Data_Json"
        ));
    }

    #[test]
    fn redact_row_decodes_then_redacts() {
        let redaction = redact_row(r#"{"passport": "A1234567"}"#).unwrap();
        assert!(redaction.found());
        assert_eq!(redaction.record()["passport"], "AXXXXXXX");

        assert!(matches!(redact_row("not json"), Err(Error::Json(_))));
    }
}
