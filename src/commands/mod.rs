//! Subcommand handlers for the chatgrab binary.

pub mod completions;
pub mod config;
pub mod extract;
pub mod fetch;

use humansize::{format_size, DECIMAL};

use chatgrab::cli::OutputArgs;
use chatgrab::config::OutputSettings;
use chatgrab::extract::EmptyPartsPolicy;
use chatgrab::{Config, ExtractionConfig, Saved};

/// Extraction settings from config, with CLI overrides applied.
fn extraction_config(config: &Config, args: &OutputArgs) -> ExtractionConfig {
    let mut extraction = config.extract.clone();
    if args.skip_empty_parts {
        extraction.empty_parts = EmptyPartsPolicy::Skip;
    }
    extraction
}

/// Output settings from config, with CLI overrides applied.
fn output_settings(config: &Config, args: &OutputArgs) -> OutputSettings {
    let mut output = config.output.clone();
    if let Some(dir) = &args.out_dir {
        output.directory = dir.clone();
    }
    output
}

/// One-line summary of a saved transcript.
fn describe(saved: &Saved) -> String {
    format!(
        "Saved {} turn(s) to {} ({})",
        saved.turns,
        saved.path.display(),
        format_size(saved.bytes, DECIMAL)
    )
}
