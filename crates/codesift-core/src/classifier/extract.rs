//! Identifier extraction engine.
//!
//! Scans pasted text for tracking codes, order codes, and loose identifiers.
//! Under the exclusive variant each scan blanks the spans it claimed in a
//! private working copy, so later scans cannot re-capture them.

use regex::Regex;

use super::code::Extraction;
use super::pattern::{PatternSet, PatternVariant};

/// Extracts and classifies identifiers from pasted text.
///
/// Patterns are compiled once at construction; `classify` is pure and safe
/// to call from any number of threads.
pub struct Extractor {
    variant: PatternVariant,
    patterns: PatternSet,
}

impl Extractor {
    /// Creates an extractor for the given pattern variant.
    pub fn new(variant: PatternVariant) -> Self {
        Self {
            variant,
            patterns: PatternSet::for_variant(variant),
        }
    }

    /// Returns the pattern variant this extractor was built with.
    pub fn variant(&self) -> PatternVariant {
        self.variant
    }

    /// Classifies `text` into tracking, order, and loose identifier lists.
    ///
    /// Never fails; text without matches yields three empty lists. Each
    /// list preserves first-occurrence order and keeps duplicates.
    pub fn classify(&self, text: &str) -> Extraction {
        let extraction = match self.variant {
            PatternVariant::Independent => self.classify_independent(text),
            PatternVariant::Exclusive => self.classify_exclusive(text),
        };
        tracing::debug!(
            tracking = extraction.tracking.len(),
            orders = extraction.orders.len(),
            loose = extraction.loose.len(),
            "classified input"
        );
        extraction
    }

    /// Both grammars scan the input text as-is; overlapping spans may be
    /// claimed twice.
    fn classify_independent(&self, text: &str) -> Extraction {
        Extraction {
            tracking: all_matches(&self.patterns.tracking, text),
            orders: all_matches(&self.patterns.order, text),
            loose: Vec::new(),
        }
    }

    fn classify_exclusive(&self, text: &str) -> Extraction {
        let mut scratch = text.to_string();
        let tracking = claim_matches(&self.patterns.tracking, &mut scratch);
        let orders = claim_orders(&self.patterns.order, &mut scratch);
        let loose = scan_loose(&scratch);
        Extraction {
            tracking,
            orders,
            loose,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(PatternVariant::default())
    }
}

fn all_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collects every match of `pattern` and blanks the claimed spans.
fn claim_matches(pattern: &Regex, scratch: &mut String) -> Vec<String> {
    let mut found = Vec::new();
    let mut spans = Vec::new();
    for m in pattern.find_iter(scratch) {
        found.push(m.as_str().to_string());
        spans.push((m.start(), m.end()));
    }
    for (start, end) in spans {
        blank_span(scratch, start, end);
    }
    found
}

/// Collects order-code matches whose 8-9 character tail contains at least
/// one letter, blanking the claimed spans.
///
/// A candidate with an all-digit tail is rejected and the scan resumes one
/// character past its start, matching what a lookahead would retry.
fn claim_orders(pattern: &Regex, scratch: &mut String) -> Vec<String> {
    let mut found = Vec::new();
    let mut spans = Vec::new();
    let mut at = 0;
    while let Some(m) = pattern.find_at(scratch, at) {
        let tail = &m.as_str()[6..];
        if tail.bytes().any(|b| b.is_ascii_alphabetic()) {
            found.push(m.as_str().to_string());
            spans.push((m.start(), m.end()));
            at = m.end();
        } else {
            at = m.start() + 1;
        }
    }
    for (start, end) in spans {
        blank_span(scratch, start, end);
    }
    found
}

/// Overwrites the byte span with spaces, preserving every other offset.
fn blank_span(scratch: &mut String, start: usize, end: usize) {
    scratch.replace_range(start..end, &" ".repeat(end - start));
}

/// Scans the working copy once, left to right, for maximal runs of 8+
/// alphanumerics and keeps those shaped like identifiers: every character
/// an ASCII digit or uppercase letter. Runs containing lowercase are
/// incidental text and are skipped.
fn scan_loose(scratch: &str) -> Vec<String> {
    let bytes = scratch.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
            i += 1;
        }
        let run = &scratch[start..i];
        if run.len() >= 8 && is_identifier_shaped(run) {
            found.push(run.to_string());
        }
    }
    found
}

fn is_identifier_shaped(run: &str) -> bool {
    run.bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::PatternVariant;

    fn exclusive() -> Extractor {
        Extractor::new(PatternVariant::Exclusive)
    }

    fn independent() -> Extractor {
        Extractor::new(PatternVariant::Independent)
    }

    // === Exclusive variant ===

    #[test]
    fn empty_text_yields_empty_extraction() {
        let extraction = exclusive().classify("");
        assert!(extraction.is_empty());
        assert!(extraction.tracking.is_empty());
        assert!(extraction.orders.is_empty());
        assert!(extraction.loose.is_empty());
    }

    #[test]
    fn text_without_identifiers_yields_empty_extraction() {
        let extraction = exclusive().classify("paste your order export here");
        assert!(extraction.is_empty());
    }

    #[test]
    fn classifies_mixed_paste() {
        let extraction = exclusive().classify("BR1234567890123 250313ABCDEFGH extra9Z");
        assert_eq!(extraction.tracking, vec!["BR1234567890123"]);
        assert_eq!(extraction.orders, vec!["250313ABCDEFGH"]);
        // "extra9Z" is below the 8-character loose threshold.
        assert!(extraction.loose.is_empty());
    }

    #[test]
    fn long_prefix_tracking_code_is_claimed_whole() {
        let extraction = exclusive().classify("shipment MX1234567890123456 arrived");
        assert_eq!(extraction.tracking, vec!["MX1234567890123456"]);
        assert!(extraction.orders.is_empty());
    }

    #[test]
    fn adjacent_codes_split_cleanly() {
        // No separator between the tracking code and the order code; the
        // blanked tracking span must not shift the order span.
        let extraction = exclusive().classify("BR1234567890123250313ABCDEFGH");
        assert_eq!(extraction.tracking, vec!["BR1234567890123"]);
        assert_eq!(extraction.orders, vec!["250313ABCDEFGH"]);
    }

    #[test]
    fn order_with_all_digit_tail_is_rejected() {
        // 6 digits + 8 digits satisfies the length grammar but has no
        // letter; the full 14-digit run falls through to loose instead.
        let extraction = exclusive().classify("25031312345678");
        assert!(extraction.orders.is_empty());
        assert_eq!(extraction.loose, vec!["25031312345678"]);
    }

    #[test]
    fn order_tail_takes_ninth_character_when_present() {
        let extraction = exclusive().classify("order 250313ABCDEFGHJ done");
        assert_eq!(extraction.orders, vec!["250313ABCDEFGHJ"]);
    }

    #[test]
    fn order_with_letter_only_in_ninth_position_is_accepted() {
        // The tail is 8 digits then a letter; the greedy 9-character tail
        // picks the letter up and the candidate passes.
        let extraction = exclusive().classify("25031312345678Z");
        assert_eq!(extraction.orders, vec!["25031312345678Z"]);
        assert!(extraction.loose.is_empty());
    }

    #[test]
    fn tracking_span_is_not_recaptured_as_order() {
        // The digit run inside the tracking code would satisfy the order
        // grammar if the claimed span were still visible.
        let extraction = exclusive().classify("SG12345678901234567890AB");
        assert_eq!(extraction.tracking, vec!["SG1234567890123"]);
        assert!(extraction
            .orders
            .iter()
            .all(|o| !extraction.tracking[0].contains(o.as_str())));
    }

    #[test]
    fn loose_accepts_digit_runs_and_uppercase_runs() {
        let extraction = exclusive().classify("ids: 123456789 and REF00123X");
        assert_eq!(extraction.loose, vec!["123456789", "REF00123X"]);
    }

    #[test]
    fn loose_rejects_lowercase_and_short_runs() {
        let extraction = exclusive().classify("checksum deadbeef00 label MiXeD1234 ref 1234567");
        assert!(extraction.loose.is_empty());
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let extraction = exclusive().classify("BR1234567890123 then BR1234567890123 again");
        assert_eq!(
            extraction.tracking,
            vec!["BR1234567890123", "BR1234567890123"]
        );
    }

    #[test]
    fn discovery_order_follows_source_positions() {
        let extraction =
            exclusive().classify("250313ABCDEFGH first, BR1234567890123 second, 250888ZYXWVUTS");
        assert_eq!(extraction.orders, vec!["250313ABCDEFGH", "250888ZYXWVUTS"]);
        assert_eq!(extraction.tracking, vec!["BR1234567890123"]);
    }

    #[test]
    fn claimed_spans_do_not_overlap() {
        let text = "MX1234567890123456 250313ABCDEFGH 99887766Z BR1234567890123";
        let extraction = exclusive().classify(text);
        // Every extracted code must still be locatable in the original
        // text, and the sum of claimed characters cannot exceed it.
        let claimed: usize = extraction
            .tracking
            .iter()
            .chain(&extraction.orders)
            .chain(&extraction.loose)
            .map(|code| {
                assert!(text.contains(code.as_str()));
                code.len()
            })
            .sum();
        assert!(claimed <= text.len());
        assert_eq!(extraction.total(), 4);
    }

    #[test]
    fn non_ascii_text_does_not_disturb_offsets() {
        let extraction = exclusive().classify("订单 BR1234567890123 编号 250313ABCDEFGH");
        assert_eq!(extraction.tracking, vec!["BR1234567890123"]);
        assert_eq!(extraction.orders, vec!["250313ABCDEFGH"]);
    }

    // === Independent variant ===

    #[test]
    fn independent_has_no_loose_class() {
        let extraction = independent().classify("plain 123456789012345 run");
        assert!(extraction.loose.is_empty());
    }

    #[test]
    fn independent_scans_may_double_count() {
        // TH + 14 digits: the first 15 characters form a tracking code and
        // the digit run also satisfies the order grammar. Both independent
        // scans claim the shared span.
        let text = "TH12345678901234";
        let extraction = independent().classify(text);
        assert_eq!(extraction.tracking, vec!["TH1234567890123"]);
        assert_eq!(extraction.orders, vec!["12345678901234"]);

        // The exclusive policy claims the span exactly once.
        let strict = exclusive().classify(text);
        assert_eq!(strict.tracking, vec!["TH1234567890123"]);
        assert!(strict.orders.is_empty());
        assert!(strict.loose.is_empty());
    }

    #[test]
    fn independent_order_has_no_letter_requirement() {
        let extraction = independent().classify("25031312345678");
        assert_eq!(extraction.orders, vec!["25031312345678"]);
    }
}
