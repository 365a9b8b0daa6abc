//! Transcript extraction pipeline for shared conversation pages.
//!
//! A shared conversation page embeds its full server response as a JSON
//! payload inside a `<script type="application/json">` element. This module
//! turns that page into an ordered list of [`Turn`]s in three forward-only
//! stages:
//!
//! 1. [`locate`] finds the embedded payload text in a parsed [`Document`]
//! 2. [`decode`] parses the payload and walks
//!    `props.pageProps.serverResponse.data.linear_conversation`
//! 3. [`normalize`] filters the conversation entries and selects the text of
//!    each qualifying turn
//!
//! Each stage is a pure function of its input. Locator and decoder failures
//! are fatal for the run; entries that cannot produce a turn are skipped
//! silently by the normalizer.
//!
//! # Module Structure
//!
//! - [`config`] - Normalizer policy configuration
//! - [`error`] - Fatal error taxonomy
//! - [`locator`] - Payload lookup in the parsed document
//! - [`decoder`] - Guarded traversal to the conversation entries
//! - [`normalizer`] - Per-entry filtering and content selection

mod config;
mod decoder;
mod error;
mod locator;
mod normalizer;

pub use config::{EmptyPartsPolicy, ExtractionConfig};
pub use decoder::{decode, ConversationEntry, CONVERSATION_PATH};
pub use error::{ExtractError, ShapeProblem};
pub use locator::{locate, Document};
pub use normalizer::{normalize, SkipReason};

use tracing::debug;

use crate::transcript::Turn;

/// Counters describing a single extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Entries found in the conversation list
    pub entries: usize,
    /// Turns emitted
    pub turns: usize,
    /// Entries dropped by the normalizer
    pub skipped: usize,
}

/// Result of running the whole pipeline over one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub turns: Vec<Turn>,
    pub stats: ExtractionStats,
}

/// Run locate, decode and normalize over an already parsed document.
pub fn extract_document(
    doc: &Document,
    config: &ExtractionConfig,
) -> Result<Extraction, ExtractError> {
    let payload = locate(doc)?;
    debug!(bytes = payload.len(), "located embedded payload");

    let entries = decode(&payload)?;
    let turns = normalize(&entries, config)?;

    let stats = ExtractionStats {
        entries: entries.len(),
        turns: turns.len(),
        skipped: entries.len() - turns.len(),
    };
    debug!(
        entries = stats.entries,
        turns = stats.turns,
        skipped = stats.skipped,
        "normalized conversation"
    );

    Ok(Extraction { turns, stats })
}

/// Parse raw page markup and run the pipeline over it.
pub fn extract(markup: &str, config: &ExtractionConfig) -> Result<Extraction, ExtractError> {
    let doc = Document::parse(markup);
    extract_document(&doc, config)
}
