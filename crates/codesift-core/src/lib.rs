//! Codesift Core - identifier extraction and rendering.
//!
//! This crate provides the pure engine behind codesift: classifying pasted
//! text into shipment tracking codes, order codes, and loose identifiers,
//! and re-rendering the classified sets for spreadsheet paste or query
//! construction. It performs no I/O; the application crate wires it to the
//! console and clipboard.

pub mod classifier;
pub mod render;

pub use classifier::{CodeClass, Extraction, Extractor, PatternVariant};
pub use render::{render, ClassFilter, RenderMode, Rendered};
