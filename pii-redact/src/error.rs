//! Errors raised around the redaction core.
//!
//! Classifiers and maskers never fail. Everything here comes from decoding
//! payloads or moving rows in and out of CSV.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("input has no `{0}` column")]
    MissingColumn(String),

    #[error("row has no value for column `{0}`")]
    MissingValue(String),

    #[cfg(feature = "batch")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
