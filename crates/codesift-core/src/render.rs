//! Rendering of classified identifier sets.
//!
//! Takes an [`Extraction`], narrows it by class filter, and produces one
//! text block in the selected output shape, plus a count and summary line
//! for status display.

use serde::{Deserialize, Serialize};

use crate::classifier::{CodeClass, Extraction};

/// Output shapes for the rendered identifier sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One identifier per line; tab-separated columns when more than one
    /// class is present. Pastes directly into a spreadsheet.
    #[default]
    Rows,
    /// Comma-joined, for batch query fields.
    CommaList,
    /// Single-quoted and comma-joined, for query IN lists.
    QuotedList,
}

impl RenderMode {
    /// Returns a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Rows => "Rows",
            RenderMode::CommaList => "Comma list",
            RenderMode::QuotedList => "Quoted list",
        }
    }
}

/// Narrows which identifier classes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassFilter {
    /// Keep every class.
    #[default]
    All,
    /// Keep tracking codes only.
    TrackingOnly,
    /// Keep order codes only.
    OrdersOnly,
}

impl ClassFilter {
    /// Returns true if the given class passes this filter.
    pub fn keeps(&self, class: CodeClass) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::TrackingOnly => class == CodeClass::Tracking,
            ClassFilter::OrdersOnly => class == CodeClass::Order,
        }
    }
}

/// A rendered text block plus status information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    /// The formatted output.
    pub text: String,
    /// Number of identifiers included.
    pub count: usize,
    /// Which class(es) were included, for status display.
    pub summary: String,
}

/// Renders the filtered extraction in the given mode.
///
/// With at most one non-empty class the output is a single column. With two
/// or more, `Rows` produces a tab-separated grid and the joined modes
/// produce one labeled block per class.
pub fn render(extraction: &Extraction, filter: ClassFilter, mode: RenderMode) -> Rendered {
    let columns = active_columns(extraction, filter);
    let count = columns.iter().map(|(_, codes)| codes.len()).sum();

    let text = if columns.len() <= 1 {
        let codes = columns.first().map(|(_, codes)| *codes).unwrap_or(&[]);
        join(codes, mode)
    } else {
        match mode {
            RenderMode::Rows => render_grid(&columns),
            RenderMode::CommaList | RenderMode::QuotedList => render_blocks(&columns, mode),
        }
    };

    let summary = summarize(&columns, count);
    Rendered {
        text,
        count,
        summary,
    }
}

/// Non-empty classes after filtering, in fixed class order.
fn active_columns(
    extraction: &Extraction,
    filter: ClassFilter,
) -> Vec<(CodeClass, &[String])> {
    CodeClass::all()
        .iter()
        .filter(|class| filter.keeps(**class))
        .map(|class| (*class, extraction.codes(*class)))
        .filter(|(_, codes)| !codes.is_empty())
        .collect()
}

/// Joins one ordered sequence per the mode rule.
fn join(codes: &[String], mode: RenderMode) -> String {
    match mode {
        RenderMode::Rows => codes.join("\n"),
        RenderMode::CommaList => codes.join(","),
        RenderMode::QuotedList => codes
            .iter()
            .map(|code| format!("'{}'", code))
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// One row per index up to the longest column, tab-separated, shorter
/// columns padded with empty cells.
fn render_grid(columns: &[(CodeClass, &[String])]) -> String {
    let rows = columns
        .iter()
        .map(|(_, codes)| codes.len())
        .max()
        .unwrap_or(0);
    (0..rows)
        .map(|i| {
            columns
                .iter()
                .map(|(_, codes)| codes.get(i).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One labeled block per class, blank-line separated.
fn render_blocks(columns: &[(CodeClass, &[String])], mode: RenderMode) -> String {
    columns
        .iter()
        .map(|(class, codes)| format!("{}:\n{}", class.name(), join(codes, mode)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn summarize(columns: &[(CodeClass, &[String])], count: usize) -> String {
    if columns.is_empty() {
        return "no identifiers".to_string();
    }
    let classes = columns
        .iter()
        .map(|(class, _)| class.name())
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{} identifiers ({})", count, classes)
}
