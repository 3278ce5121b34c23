//! Extraction pattern sets.
//!
//! Two extraction policies exist: independent scans that can claim the same
//! span twice, and the stricter exclusive policy that erases claimed spans
//! between scans. Both are kept as named variants because their results
//! genuinely differ on overlapping input.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Policy selecting how the pattern classes interact during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternVariant {
    /// Tracking and order scans run independently over the original text.
    /// A character span can be claimed by both classes, and no loose
    /// scan runs.
    Independent,
    /// Each scan erases its matches before the next one runs, so spans are
    /// mutually exclusive; leftover 8+ alphanumeric runs fall through to
    /// the loose heuristic.
    #[default]
    Exclusive,
}

impl PatternVariant {
    /// Returns a human-readable name for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            PatternVariant::Independent => "Independent",
            PatternVariant::Exclusive => "Exclusive",
        }
    }
}

/// Compiled patterns for one variant.
pub(crate) struct PatternSet {
    /// Country-prefixed tracking code grammar.
    pub tracking: Regex,
    /// Six-digit-prefixed order code grammar.
    pub order: Regex,
}

impl PatternSet {
    pub(crate) fn for_variant(variant: PatternVariant) -> Self {
        match variant {
            // Prefix + 13 alphanumerics (15 total); orders are 6 digits +
            // exactly 8 alphanumerics (14 total), no letter requirement.
            PatternVariant::Independent => Self {
                tracking: Self::compile(r"(?:BR|CL|CO|MX|MY|PH|SG|TH|TW|VN)[A-Za-z0-9]{13}"),
                order: Self::compile(r"[0-9]{6}[A-Za-z0-9]{8}"),
            },
            // MX/CL/CO carry 16 alphanumerics (18 total), the rest 13
            // (15 total). Order tails may run to 9 characters; the
            // at-least-one-letter requirement is enforced by the extractor.
            PatternVariant::Exclusive => Self {
                tracking: Self::compile(
                    r"(?:MX|CL|CO)[A-Za-z0-9]{16}|(?:BR|MY|PH|SG|TH|TW|VN)[A-Za-z0-9]{13}",
                ),
                order: Self::compile(r"[0-9]{6}[A-Za-z0-9]{8,9}"),
            },
        }
    }

    fn compile(pattern: &str) -> Regex {
        Regex::new(pattern).expect("Invalid extraction pattern")
    }
}
