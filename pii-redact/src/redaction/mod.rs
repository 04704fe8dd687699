//! Masking policies, the rule registry, and the redaction entrypoints.
//!
//! - **`policy`**: how a single value is masked (`MaskStrategy`)
//! - **`rules`**: which classifier and policy apply to which field
//! - **`redact`**: the two-tier decision over a whole record (`Redactor`)
//!
//! Categories live in `crate::category`, classifiers in `crate::detect`.

mod policy;
mod redact;
pub(crate) mod rules;

pub use policy::{
    AtSign, KeepConfig, LocalPartConfig, MaskStrategy, REDACTED_ADDRESS, REDACTED_DEVICE_ID,
    REDACTED_EMAIL, REDACTED_IP, REDACTED_PASSPORT,
};
pub use redact::{redact, Redaction, Redactor, COMBINATION_THRESHOLD};
