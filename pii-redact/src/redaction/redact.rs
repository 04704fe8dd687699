//! Application layer: the two-tier redaction decision.
//!
//! Standalone rules fire on their own. Combinatorial rules fire only when at
//! least [`COMBINATION_THRESHOLD`] of them match the same record, and then all
//! of the matching ones are masked. The two passes are evaluated independently
//! against the original record and their results merged over a copy of it.

use serde_json::Value;

use crate::category::{Category, Tier};
use crate::record::Record;

use super::rules::{Rule, RULES};

/// Minimum number of matching combinatorial fields before any of them is masked.
pub const COMBINATION_THRESHOLD: usize = 2;

/// The outcome of redacting one record.
#[derive(Clone, Debug, PartialEq)]
pub struct Redaction {
    record: Record,
    found: bool,
    masked: Vec<Category>,
}

impl Redaction {
    /// The masked copy of the input. Same keys, same order.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Whether any rule fired.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Categories whose fields were masked, in registry order.
    pub fn masked_categories(&self) -> &[Category] {
        &self.masked
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    /// Splits into the masked record and the found flag.
    pub fn into_parts(self) -> (Record, bool) {
        (self.record, self.found)
    }
}

/// Applies the rule registry to decoded records.
///
/// `Redactor` holds no mutable state and can be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct Redactor {
    rules: &'static [Rule],
}

impl Redactor {
    /// A redactor over the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Redacts `record`, returning a masked copy and whether PII was found.
    ///
    /// The input is never modified. Fields not selected by either pass are
    /// copied verbatim.
    #[must_use]
    pub fn redact(&self, record: &Record) -> Redaction {
        let mut selected = self.matching(record, Tier::Standalone);
        let combinatorial = self.matching(record, Tier::Combinatorial);
        if combinatorial.len() >= COMBINATION_THRESHOLD {
            selected.extend(combinatorial);
        }

        let mut masked_record = record.clone();
        for rule in &selected {
            if let Some(slot) = masked_record.get_mut(rule.field) {
                if let Some(masked) = slot.as_str().map(|text| rule.masker.apply_to(text)) {
                    *slot = Value::String(masked);
                }
            }
        }

        Redaction {
            record: masked_record,
            found: !selected.is_empty(),
            masked: selected.iter().map(|rule| rule.category).collect(),
        }
    }

    /// Rules of `tier` whose field is present in `record` and accepted by the
    /// rule's classifier.
    fn matching(&self, record: &Record, tier: Tier) -> Vec<&'static Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.tier == tier)
            .filter(|rule| {
                record
                    .get(rule.field)
                    .and_then(Value::as_str)
                    .is_some_and(rule.classifier)
            })
            .collect()
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Redacts `record` with the built-in rules.
#[must_use]
pub fn redact(record: &Record) -> Redaction {
    Redactor::new().redact(record)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{redact, Redactor};
    use crate::category::Category;
    use crate::record::Record;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn standalone_phone_is_masked_alone() {
        let out = redact(&record(json!({"phone": "9876543210"})));
        assert!(out.found());
        assert_eq!(out.record()["phone"], "98XXXXXX10");
        assert_eq!(out.masked_categories(), &[Category::Phone]);
    }

    #[test]
    fn single_combinatorial_field_is_left_alone() {
        let input = record(json!({"email": "john@test.com"}));
        let out = redact(&input);
        assert!(!out.found());
        assert_eq!(out.record(), &input);
        assert!(out.masked_categories().is_empty());
    }

    #[test]
    fn two_combinatorial_fields_are_both_masked() {
        let out = redact(&record(json!({"email": "john@test.com", "name": "John Doe"})));
        assert!(out.found());
        assert_eq!(out.record()["name"], "JXXX DXXX");
        assert_eq!(out.record()["email"], "joXXX@test.com");
    }

    #[test]
    fn every_matching_combinatorial_field_is_masked() {
        let out = redact(&record(json!({
            "name": "Priya Sharma",
            "email": "priya@example.in",
            "address": "12 MG Road, Pune",
            "device_id": "DEV-4411",
            "ip_address": "10.0.0.1",
        })));
        assert!(out.found());
        assert_eq!(out.masked_categories().len(), 5);
        assert_eq!(out.record()["address"], "[REDACTED_ADDRESS]");
        assert_eq!(out.record()["device_id"], "[REDACTED_DEVICEID]");
        assert_eq!(out.record()["ip_address"], "[REDACTED_IP]");
    }

    #[test]
    fn standalone_does_not_count_towards_combination() {
        let out = redact(&record(json!({
            "phone": "9876543210",
            "email": "john@test.com",
        })));
        assert!(out.found());
        assert_eq!(out.record()["phone"], "98XXXXXX10");
        assert_eq!(out.record()["email"], "john@test.com");
    }

    #[test]
    fn rejected_values_do_not_count_towards_combination() {
        let input = record(json!({
            "name": "Madonna",
            "ip_address": "999.999.999.999",
            "email": "john@test.com",
        }));
        let out = redact(&input);
        assert!(!out.found());
        assert_eq!(out.record(), &input);
    }

    #[test]
    fn field_order_is_preserved() {
        let out = redact(&record(json!({
            "zeta": 1,
            "aadhar": "123456789012",
            "alpha": "x",
        })));
        let keys: Vec<_> = out.record().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "aadhar", "alpha"]);
        assert_eq!(out.record()["aadhar"], "12XXXXXXXX12");
    }

    #[test]
    fn numeric_identifiers_are_not_classified() {
        let input = record(json!({"aadhar": 123_456_789_012_u64, "phone": 9_876_543_210_u64}));
        let out = Redactor::default().redact(&input);
        assert!(!out.found());
        assert_eq!(out.into_parts(), (input, false));
    }
}
