//! Decoding and encoding of record payloads.
//!
//! A record is the JSON object embedded in one row of the input table. Field
//! order is preserved through decode, redaction and encode, and strings stay
//! strings: an identifier written as `"123456789012"` is never turned into a
//! number.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One decoded payload: an ordered mapping from field name to value.
pub type Record = Map<String, Value>;

/// Parses `payload` as a JSON object.
///
/// Anything other than an object at the top level is rejected.
pub fn decode_payload(payload: &str) -> Result<Record> {
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(record) => Ok(record),
        other => Err(Error::NotAnObject(json_kind(&other))),
    }
}

/// Serializes `record` as JSON text with `", "` and `": "` separators.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn encode_record(record: &Record) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    record.serialize(&mut serializer)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Compact JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{decode_payload, encode_record};
    use crate::error::Error;

    #[test]
    fn decode_keeps_strings_and_order() {
        let record = decode_payload(r#"{"b": "123456789012", "a": 42}"#).unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(record["b"], json!("123456789012"));
        assert_eq!(record["a"], json!(42));
    }

    #[test]
    fn decode_rejects_non_objects() {
        assert!(matches!(
            decode_payload("[1, 2]"),
            Err(Error::NotAnObject("array"))
        ));
        assert!(matches!(decode_payload("\"x\""), Err(Error::NotAnObject("string"))));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(decode_payload("{\"a\": "), Err(Error::Json(_))));
        assert!(matches!(decode_payload(""), Err(Error::Json(_))));
    }

    #[test]
    fn encode_uses_spaced_separators() {
        let record = decode_payload(r#"{"name":"JXXX DXXX","tags":[1,2],"n":{"k":null}}"#).unwrap();
        assert_eq!(
            encode_record(&record).unwrap(),
            r#"{"name": "JXXX DXXX", "tags": [1, 2], "n": {"k": null}}"#
        );
    }

    #[test]
    fn encode_keeps_non_ascii_verbatim() {
        let record = decode_payload(r#"{"city":"पुणे"}"#).unwrap();
        assert_eq!(encode_record(&record).unwrap(), r#"{"city": "पुणे"}"#);
    }

    #[test]
    fn encode_empty_record() {
        let record = decode_payload("{}").unwrap();
        assert_eq!(encode_record(&record).unwrap(), "{}");
    }
}
