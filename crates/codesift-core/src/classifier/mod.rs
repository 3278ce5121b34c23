//! Identifier classification for pasted text.
//!
//! This module provides the extraction engine that pulls shipment tracking
//! codes, order codes, and loose identifiers out of unstructured text.

mod code;
mod extract;
mod pattern;

pub use code::{CodeClass, Extraction};
pub use extract::Extractor;
pub use pattern::PatternVariant;
