//! Codesift - pulls shipment tracking and order codes out of pasted text.
//!
//! Reads unstructured text from a file or stdin, classifies the embedded
//! identifiers, and prints them in a shape ready for spreadsheet paste or
//! query construction. The per-class counts go to stderr so piped output
//! stays clean.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use codesift_core::{render, ClassFilter, Extractor, PatternVariant, RenderMode};
use tracing_subscriber::EnvFilter;

use codesift_app::{clipboard, updater};

/// Codesift - extract shipment tracking and order codes from pasted text
#[derive(Parser, Debug)]
#[command(name = "codesift", version, about)]
struct Args {
    /// Input file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Which identifier classes to keep
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,

    /// Output shape
    #[arg(long, value_enum, default_value_t = ModeArg::Rows)]
    mode: ModeArg,

    /// Extraction policy
    #[arg(long, value_enum, default_value_t = VariantArg::Exclusive)]
    variant: VariantArg,

    /// Copy the rendered result to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Print the raw extraction as JSON instead of rendering
    #[arg(long)]
    json: bool,

    /// Check GitHub for a newer release and exit
    #[arg(long)]
    check_update: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Tracking codes, order codes, and loose ids
    All,
    /// Tracking codes only
    Tracking,
    /// Order codes only
    Orders,
}

impl From<FilterArg> for ClassFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ClassFilter::All,
            FilterArg::Tracking => ClassFilter::TrackingOnly,
            FilterArg::Orders => ClassFilter::OrdersOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One identifier per row, tab-separated columns
    Rows,
    /// Comma-joined for batch query fields
    Comma,
    /// Quoted and comma-joined for query IN lists
    Quoted,
}

impl From<ModeArg> for RenderMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Rows => RenderMode::Rows,
            ModeArg::Comma => RenderMode::CommaList,
            ModeArg::Quoted => RenderMode::QuotedList,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Claimed spans are excluded from later scans; unmatched runs fall
    /// through to the loose heuristic
    Exclusive,
    /// Tracking and order scans run independently over the original text
    Independent,
}

impl From<VariantArg> for PatternVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Exclusive => PatternVariant::Exclusive,
            VariantArg::Independent => PatternVariant::Independent,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if args.check_update {
        return run_update_check();
    }

    let text = read_input(args.input.as_deref())?;
    let extractor = Extractor::new(args.variant.into());
    let extraction = extractor.classify(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
        return Ok(());
    }

    let rendered = render(&extraction, args.filter.into(), args.mode.into());
    if !rendered.text.is_empty() {
        println!("{}", rendered.text);
    }
    eprintln!("{}", rendered.summary);

    if args.copy {
        match clipboard::copy(&rendered.text) {
            Ok(()) => eprintln!("copied to clipboard"),
            Err(clipboard::ClipboardError::Empty) => eprintln!("no content to copy"),
            Err(e) => anyhow::bail!("clipboard copy failed: {}", e),
        }
    }

    Ok(())
}

/// Initialize console logging on stderr.
fn init_logging(args: &Args) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "codesift_core={level},codesift_app={level},warn",
            level = args.log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the input text from a file or stdin.
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_update_check() -> anyhow::Result<()> {
    let current = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;
    let check = updater::check_for_updates(
        &current,
        updater::DEFAULT_REPO_OWNER,
        updater::DEFAULT_REPO_NAME,
    );

    if check.has_update {
        println!("update available: v{}", check.latest_version);
        if !check.download_url.is_empty() {
            println!("download: {}", check.download_url);
        }
        if !check.changelog.is_empty() {
            println!();
            println!("{}", check.changelog);
        }
    } else {
        println!("no update available (current: v{})", current);
    }

    Ok(())
}
