//! Adapters for emitting redacted records through `slog`.
//!
//! Provides a `slog::Value` whose logged form is always derived from the
//! redactor's output, serialized as structured JSON via `slog`'s nested-value
//! support. The unredacted record is never handed to the serializer.
//!
//! This module does not configure `slog` or change how records are classified.

use serde_json::Value as JsonValue;
use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::record::Record;
use crate::redaction::{redact, Redaction};

/// A `slog::Value` that emits a masked record as structured JSON.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts a record into a `slog::Value` that logs only its masked form.
///
/// ## Example
/// ```ignore
/// use pii_redact::slog::IntoRedactedJson;
///
/// info!(logger, "row"; "payload" => record.into_redacted_json());
/// ```
pub trait IntoRedactedJson: Sized {
    /// Consumes `self` and returns a value that serializes as the masked JSON
    /// object.
    fn into_redacted_json(self) -> RedactedJson;
}

impl IntoRedactedJson for Record {
    fn into_redacted_json(self) -> RedactedJson {
        redact(&self).into_redacted_json()
    }
}

impl IntoRedactedJson for Redaction {
    fn into_redacted_json(self) -> RedactedJson {
        RedactedJson::new(JsonValue::Object(self.into_record()))
    }
}
