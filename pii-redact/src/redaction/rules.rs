//! The rule registry.
//!
//! One row per [`Category`], binding the record key it is read from, its tier,
//! its classifier and its masking strategy. The redactor walks this table
//! generically, so adding a category only touches this file and the
//! `Category` enum.

use std::borrow::Cow;

use crate::category::{Category, Tier};
use crate::detect;

use super::policy::{
    AtSign, KeepConfig, LocalPartConfig, MaskStrategy, REDACTED_ADDRESS, REDACTED_DEVICE_ID,
    REDACTED_EMAIL, REDACTED_IP, REDACTED_PASSPORT,
};

/// A single detection-and-masking rule.
#[derive(Debug)]
pub(crate) struct Rule {
    pub(crate) category: Category,
    /// Record key holding the value.
    pub(crate) field: &'static str,
    pub(crate) tier: Tier,
    pub(crate) classifier: fn(&str) -> bool,
    pub(crate) masker: MaskStrategy,
}

const fn full(placeholder: &'static str) -> MaskStrategy {
    MaskStrategy::Full {
        placeholder: Cow::Borrowed(placeholder),
    }
}

/// All rules, indexed by `Category` discriminant.
pub(crate) static RULES: [Rule; 9] = [
    Rule {
        category: Category::Phone,
        field: "phone",
        tier: Tier::Standalone,
        classifier: detect::is_phone,
        masker: MaskStrategy::keep_with(KeepConfig::both(2, 2, "XXXXXX")),
    },
    Rule {
        category: Category::NationalId,
        field: "aadhar",
        tier: Tier::Standalone,
        classifier: detect::is_national_id,
        masker: MaskStrategy::keep_with(KeepConfig::both(2, 2, "XXXXXXXX")),
    },
    Rule {
        category: Category::TravelDocument,
        field: "passport",
        tier: Tier::Standalone,
        classifier: detect::is_travel_document,
        // The classifier only admits 8-character values, so the placeholder
        // is never reached through the redactor.
        masker: MaskStrategy::ExactLength {
            length: 8,
            keep: KeepConfig::first(1, "XXXXXXX"),
            placeholder: REDACTED_PASSPORT,
        },
    },
    Rule {
        category: Category::PaymentHandle,
        field: "upi_id",
        tier: Tier::Standalone,
        classifier: detect::is_payment_handle,
        masker: MaskStrategy::local_part(LocalPartConfig::new(1, "XXX", AtSign::Last)),
    },
    Rule {
        category: Category::Name,
        field: "name",
        tier: Tier::Combinatorial,
        classifier: detect::is_name,
        masker: MaskStrategy::Words { filler: "XXX" },
    },
    Rule {
        category: Category::Email,
        field: "email",
        tier: Tier::Combinatorial,
        classifier: detect::is_email,
        masker: MaskStrategy::local_part(
            LocalPartConfig::new(2, "XXX", AtSign::First).with_fallback(REDACTED_EMAIL),
        ),
    },
    Rule {
        category: Category::Address,
        field: "address",
        tier: Tier::Combinatorial,
        classifier: detect::is_address,
        masker: full(REDACTED_ADDRESS),
    },
    Rule {
        category: Category::DeviceId,
        field: "device_id",
        tier: Tier::Combinatorial,
        classifier: detect::is_device_id,
        masker: full(REDACTED_DEVICE_ID),
    },
    Rule {
        category: Category::IpAddress,
        field: "ip_address",
        tier: Tier::Combinatorial,
        classifier: detect::is_ip_address,
        masker: full(REDACTED_IP),
    },
];

pub(crate) fn rule_for(category: Category) -> &'static Rule {
    &RULES[category as usize]
}
