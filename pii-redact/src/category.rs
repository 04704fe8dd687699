//! The fixed set of PII categories and the tier each belongs to.
//!
//! A category names *what kind* of sensitive data a field holds. It carries no
//! runtime state; the detection and masking rules bound to each category live
//! in [`crate::detect`] and [`crate::redaction`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::redaction::rules;

/// How a category participates in the redaction decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Sensitive on its own. A matching field is always masked.
    Standalone,
    /// Sensitive only together with another matching combinatorial field.
    Combinatorial,
}

/// A PII category recognised by the redactor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ten-digit phone number.
    Phone,
    /// Twelve-digit regional national identifier.
    NationalId,
    /// Passport-style travel document number.
    TravelDocument,
    /// Payment handle of the form `user@provider`.
    PaymentHandle,
    /// Personal name with at least two words.
    Name,
    /// Email address.
    Email,
    /// Postal address.
    Address,
    /// Device identifier.
    DeviceId,
    /// IPv4 address.
    IpAddress,
}

impl Category {
    /// Every category, in the order the redactor evaluates them.
    pub const ALL: [Category; 9] = [
        Category::Phone,
        Category::NationalId,
        Category::TravelDocument,
        Category::PaymentHandle,
        Category::Name,
        Category::Email,
        Category::Address,
        Category::DeviceId,
        Category::IpAddress,
    ];

    /// Stable snake_case name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Category::Phone => "phone",
            Category::NationalId => "national_id",
            Category::TravelDocument => "travel_document",
            Category::PaymentHandle => "payment_handle",
            Category::Name => "name",
            Category::Email => "email",
            Category::Address => "address",
            Category::DeviceId => "device_id",
            Category::IpAddress => "ip_address",
        }
    }

    /// The record key this category is read from.
    pub fn field(self) -> &'static str {
        rules::rule_for(self).field
    }

    pub fn tier(self) -> Tier {
        rules::rule_for(self).tier
    }

    /// Returns `true` if `value` plausibly holds data of this category.
    ///
    /// Non-string values never match.
    pub fn classify(self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|text| (rules::rule_for(self).classifier)(text))
    }

    /// Masks `value` with this category's policy.
    ///
    /// Callers are expected to have checked [`Category::classify`] first; the
    /// masker itself is total and never fails.
    pub fn mask(self, value: &str) -> String {
        rules::rule_for(self).masker.apply_to(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
