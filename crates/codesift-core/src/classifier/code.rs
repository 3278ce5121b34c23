//! Identifier classes and extraction results.

use serde::{Deserialize, Serialize};

/// Classes an extracted identifier can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeClass {
    /// Country-prefixed shipment tracking code.
    Tracking,
    /// Date-prefixed order code.
    Order,
    /// Unmatched token accepted by the loose shape heuristic.
    Loose,
}

impl CodeClass {
    /// Returns all classes in their fixed display order.
    pub fn all() -> &'static [CodeClass] {
        &[CodeClass::Tracking, CodeClass::Order, CodeClass::Loose]
    }

    /// Returns a human-readable name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            CodeClass::Tracking => "Tracking codes",
            CodeClass::Order => "Order codes",
            CodeClass::Loose => "Loose ids",
        }
    }
}

/// Result of classifying pasted text.
///
/// Each list preserves first-occurrence order from the source text and keeps
/// duplicates. Under the exclusive pattern variant the three lists claim
/// pairwise non-overlapping character spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Shipment tracking codes.
    pub tracking: Vec<String>,
    /// Order codes.
    pub orders: Vec<String>,
    /// Loose identifiers that matched neither grammar.
    pub loose: Vec<String>,
}

impl Extraction {
    /// Returns the codes extracted for the given class.
    pub fn codes(&self, class: CodeClass) -> &[String] {
        match class {
            CodeClass::Tracking => &self.tracking,
            CodeClass::Order => &self.orders,
            CodeClass::Loose => &self.loose,
        }
    }

    /// Returns the number of codes extracted for the given class.
    pub fn count(&self, class: CodeClass) -> usize {
        self.codes(class).len()
    }

    /// Returns the total number of extracted codes across all classes.
    pub fn total(&self) -> usize {
        self.tracking.len() + self.orders.len() + self.loose.len()
    }

    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns a status line with per-class counts.
    pub fn summary(&self) -> String {
        format!(
            "tracking: {} | orders: {} | loose: {}",
            self.tracking.len(),
            self.orders.len(),
            self.loose.len()
        )
    }
}
