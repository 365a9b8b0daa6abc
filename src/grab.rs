//! Fetch-extract-save orchestration for one or many share URLs.
//!
//! Every URL is an independent run: a failure is logged and recorded in the
//! [`BatchReport`] and the next URL is processed as usual.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::OutputSettings;
use crate::extract::{self, ExtractError, ExtractionConfig};
use crate::fetch::{conversation_id, FetchError, PageSource};
use crate::files::filename::{self, NameError};
use crate::transcript::{self, Turn};

/// Errors for a single grab run.
#[derive(Debug, thiserror::Error)]
pub enum GrabError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Cannot name transcript file: {0}")]
    Filename(#[from] NameError),

    #[error("Failed to save transcript: {0:#}")]
    Save(anyhow::Error),
}

/// A transcript written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    /// Source URL, or the input path for offline extraction
    pub source: String,
    /// Conversation id used to name the file
    pub id: String,
    pub path: PathBuf,
    pub turns: usize,
    pub bytes: u64,
}

/// Outcome of processing a list of URLs.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<Saved>,
    pub failed: Vec<(String, GrabError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.saved.len() + self.failed.len()
    }
}

/// Drives a [`PageSource`] through extraction and persistence.
pub struct Grabber<S> {
    source: S,
    extraction: ExtractionConfig,
    output: OutputSettings,
}

impl Grabber<()> {
    /// Grabber for pages that were saved beforehand; it never fetches.
    pub fn offline(extraction: ExtractionConfig, output: OutputSettings) -> Self {
        Self::new((), extraction, output)
    }
}

impl<S> Grabber<S> {
    pub fn new(source: S, extraction: ExtractionConfig, output: OutputSettings) -> Self {
        Self {
            source,
            extraction,
            output,
        }
    }

    /// Extract and save a transcript from already retrieved markup.
    pub fn grab_markup(&self, source: &str, id: &str, markup: &str) -> Result<Saved, GrabError> {
        let extraction = extract::extract(markup, &self.extraction)?;
        if extraction.turns.is_empty() {
            warn!(source, "conversation contains no text turns");
        }

        let name = filename::generate(
            id,
            &self.output.filename_template,
            self.output.id_max_length,
        )?;
        let path = self.output.directory.join(name);
        let bytes = self.save(&path, &extraction.turns)?;
        info!(path = %path.display(), turns = extraction.turns.len(), "saved conversation");

        Ok(Saved {
            source: source.to_string(),
            id: id.to_string(),
            path,
            turns: extraction.turns.len(),
            bytes,
        })
    }

    fn save(&self, path: &Path, turns: &[Turn]) -> Result<u64, GrabError> {
        transcript::save(path, turns).map_err(GrabError::Save)
    }
}

impl<S: PageSource> Grabber<S> {
    /// Fetch one share URL and save its transcript.
    pub fn grab(&self, url: &str) -> Result<Saved, GrabError> {
        let id = conversation_id(url)?;
        info!(url, "fetching conversation");
        let markup = self.source.fetch_page(url)?;
        self.grab_markup(url, &id, &markup)
    }

    /// Process `urls` one after another, pausing `delay` between requests.
    pub fn grab_all<I, U>(&self, urls: I, delay: Duration) -> BatchReport
    where
        I: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        let mut report = BatchReport::default();

        for (index, url) in urls.into_iter().enumerate() {
            let url = url.as_ref();
            if index > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }

            match self.grab(url) {
                Ok(saved) => report.saved.push(saved),
                Err(err) => {
                    error!(url, error = %err, "failed to grab conversation");
                    report.failed.push((url.to_string(), err));
                }
            }
        }

        report
    }
}

/// Parse a URL list: one URL per line, blank lines and `#` comments ignored.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
