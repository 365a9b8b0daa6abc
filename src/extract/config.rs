//! Configuration for the transcript extraction pipeline.

use serde::{Deserialize, Serialize};

/// What to do with an entry whose `content.parts` array is present but empty.
///
/// There is no fragment to select in that case. `Fail` aborts the whole run
/// with [`ExtractError::EmptySelection`](super::ExtractError::EmptySelection);
/// `Skip` drops the entry like any other unusable entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPartsPolicy {
    #[default]
    Fail,
    Skip,
}

/// Configuration for the content extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Policy for `parts: []`
    pub empty_parts: EmptyPartsPolicy,
}

impl ExtractionConfig {
    /// Config that skips entries with empty `parts` instead of failing.
    pub fn skipping_empty_parts() -> Self {
        Self {
            empty_parts: EmptyPartsPolicy::Skip,
        }
    }
}
