//! Rule-based PII detection and masking for JSON records.
//!
//! This crate separates:
//! - **Classification**: does a field's value look like a given kind of PII
//!   ([`detect`], [`Category`]).
//! - **Policy**: how a matching value is masked ([`MaskStrategy`]).
//! - **Redaction**: which fields of a record are masked ([`Redactor`]).
//!
//! Categories come in two tiers. Standalone categories (phone, national id,
//! travel document, payment handle) are masked whenever they match.
//! Combinatorial categories (name, email, address, device id, IP address) are
//! masked only when at least two of them match in the same record, and then
//! all matching ones are masked.
//!
//! ```
//! use pii_redact::{decode_payload, redact};
//!
//! let record = decode_payload(r#"{"email": "john@test.com", "name": "John Doe"}"#).unwrap();
//! let (masked, found) = redact(&record).into_parts();
//! assert!(found);
//! assert_eq!(masked["name"], "JXXX DXXX");
//! assert_eq!(masked["email"], "joXXX@test.com");
//! ```
//!
//! What this crate does:
//! - classifies and masks fields of decoded records
//! - decodes and encodes record payloads
//! - drives whole CSV tables through the redactor (`batch` feature)
//! - provides a `slog` adapter that logs only masked records (`slog` feature)
//!
//! What it does not do:
//! - validate that a match is real PII (the heuristics are intentionally loose)
//! - let callers add or change rules at runtime

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "batch")]
pub mod batch;
mod category;
pub mod detect;
mod error;
mod record;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

pub use category::{Category, Tier};
pub use error::{Error, Result};
pub use record::{decode_payload, encode_record, Record};
pub use redaction::{
    redact, AtSign, KeepConfig, LocalPartConfig, MaskStrategy, Redaction, Redactor,
    COMBINATION_THRESHOLD, REDACTED_ADDRESS, REDACTED_DEVICE_ID, REDACTED_EMAIL, REDACTED_IP,
    REDACTED_PASSPORT,
};
#[cfg(feature = "batch")]
pub use batch::{redact_csv, redact_row, BatchOptions, BatchSummary};
