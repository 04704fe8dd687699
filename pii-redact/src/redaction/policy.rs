//! Masking policies for string values.
//!
//! Policies are pure string transformations. They do not decide whether a value
//! is sensitive; the classifiers do that before a policy is ever applied.

use std::borrow::Cow;

/// Placeholder emitted for travel documents of unexpected length.
pub const REDACTED_PASSPORT: &str = "[REDACTED_PASSPORT]";
/// Placeholder emitted for emails whose local part is too short to mask.
pub const REDACTED_EMAIL: &str = "[REDACTED_EMAIL]";
/// Placeholder for postal addresses.
pub const REDACTED_ADDRESS: &str = "[REDACTED_ADDRESS]";
/// Placeholder for device identifiers.
pub const REDACTED_DEVICE_ID: &str = "[REDACTED_DEVICEID]";
/// Placeholder for IP addresses.
pub const REDACTED_IP: &str = "[REDACTED_IP]";

/// Keeps a visible prefix and suffix and replaces everything between them with
/// a fixed filler.
///
/// The filler does not scale with the hidden length, so the output never leaks
/// how many characters were removed. Segments are counted in Unicode scalar
/// values.
#[derive(Clone, Copy, Debug)]
pub struct KeepConfig {
    /// Number of leading characters to keep visible.
    visible_prefix: usize,
    /// Number of trailing characters to keep visible.
    visible_suffix: usize,
    /// Text inserted in place of the hidden middle.
    filler: &'static str,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` characters.
    #[must_use]
    pub const fn first(visible_prefix: usize, filler: &'static str) -> Self {
        Self {
            visible_prefix,
            visible_suffix: 0,
            filler,
        }
    }

    /// Keeps the first `visible_prefix` and last `visible_suffix` characters.
    ///
    /// On inputs shorter than `visible_prefix + visible_suffix` the two
    /// segments overlap; the filler is still inserted between them.
    #[must_use]
    pub const fn both(visible_prefix: usize, visible_suffix: usize, filler: &'static str) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            filler,
        }
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        let suffix_start = chars.len().saturating_sub(self.visible_suffix);

        let mut out = String::with_capacity(value.len() + self.filler.len());
        out.extend(chars.iter().take(self.visible_prefix));
        out.push_str(self.filler);
        out.extend(&chars[suffix_start..]);
        out
    }
}

/// Which `@` splits a handle into local part and domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtSign {
    /// The first `@`; everything after it is the domain.
    First,
    /// The last `@` that still has text after it, or the last `@` when none
    /// does.
    Last,
}

/// Masks the local part of an `local@domain` value and keeps the domain.
#[derive(Clone, Copy, Debug)]
pub struct LocalPartConfig {
    /// Number of leading local-part characters to keep visible.
    visible_prefix: usize,
    /// Text replacing the rest of the local part.
    filler: &'static str,
    split: AtSign,
    /// Emitted when the value is not a clean `local@domain`: the local part is
    /// shorter than `visible_prefix`, or the domain is empty or spans lines.
    /// `None` masks whatever local part exists instead.
    fallback: Option<&'static str>,
}

impl LocalPartConfig {
    #[must_use]
    pub const fn new(visible_prefix: usize, filler: &'static str, split: AtSign) -> Self {
        Self {
            visible_prefix,
            filler,
            split,
            fallback: None,
        }
    }

    /// Uses `placeholder` for values that cannot be split cleanly.
    #[must_use]
    pub const fn with_fallback(self, placeholder: &'static str) -> Self {
        Self {
            fallback: Some(placeholder),
            ..self
        }
    }

    /// Byte offset of the splitting `@`.
    fn split_at(&self, value: &str) -> Option<usize> {
        match self.split {
            AtSign::First => value.find('@'),
            AtSign::Last => value
                .match_indices('@')
                .map(|(at, _)| at)
                .filter(|&at| at + 1 < value.len())
                .last()
                .or_else(|| value.rfind('@')),
        }
    }

    fn is_clean(&self, local: &str, domain: &str) -> bool {
        local.chars().count() >= self.visible_prefix
            && !domain.is_empty()
            && !domain.contains('\n')
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let unsplit = || {
            self.fallback
                .map_or_else(|| value.to_string(), str::to_string)
        };
        let Some(at) = self.split_at(value) else {
            return unsplit();
        };

        let (local, domain) = (&value[..at], &value[at + 1..]);
        if self.fallback.is_some() && !self.is_clean(local, domain) {
            return unsplit();
        }

        let mut out: String = local.chars().take(self.visible_prefix).collect();
        out.push_str(self.filler);
        out.push_str(&value[at..]);
        out
    }
}

/// A masking strategy for string values.
///
/// Every strategy is total: it returns an owned `String` for any input and
/// never fails.
#[derive(Clone, Debug)]
pub enum MaskStrategy {
    /// Replace the entire value with a fixed placeholder.
    Full {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured segments visible around a fixed filler.
    Keep(KeepConfig),
    /// Apply `keep` only to values of exactly `length` characters, otherwise
    /// emit `placeholder`.
    ExactLength {
        length: usize,
        keep: KeepConfig,
        placeholder: &'static str,
    },
    /// Mask the local part of an `@`-separated value.
    LocalPart(LocalPartConfig),
    /// Mask every whitespace-separated word longer than one character down to
    /// its initial plus `filler`, then rejoin with single spaces.
    Words {
        /// Text appended to each word's initial.
        filler: &'static str,
    },
}

impl MaskStrategy {
    /// Constructs [`MaskStrategy::Full`] using a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub const fn keep_with(config: KeepConfig) -> Self {
        Self::Keep(config)
    }

    #[must_use]
    pub const fn local_part(config: LocalPartConfig) -> Self {
        Self::LocalPart(config)
    }

    /// Applies the strategy to `value`.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            MaskStrategy::Full { placeholder } => placeholder.clone().into_owned(),
            MaskStrategy::Keep(config) => config.apply_to(value),
            MaskStrategy::ExactLength {
                length,
                keep,
                placeholder,
            } => {
                if value.chars().count() == *length {
                    keep.apply_to(value)
                } else {
                    (*placeholder).to_string()
                }
            }
            MaskStrategy::LocalPart(config) => config.apply_to(value),
            MaskStrategy::Words { filler } => mask_words(value, filler),
        }
    }
}

fn mask_words(value: &str, filler: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match (chars.next(), chars.next()) {
                (Some(initial), Some(_)) => format!("{initial}{filler}"),
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
