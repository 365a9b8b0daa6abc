//! Extraction errors.

use std::fmt;

/// Fatal errors for a single extraction run.
///
/// Entries that merely lack the fields needed for a turn are not errors; the
/// normalizer skips them. Every variant here aborts the run with no partial
/// transcript.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No embedded <script type=\"application/json\"> payload found in page")]
    PayloadNotFound,

    #[error("Embedded payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Unexpected payload shape at `{path}`: {problem}")]
    UnexpectedShape {
        /// The path segment where the lookup chain broke
        segment: &'static str,
        /// Dotted path from the payload root up to and including `segment`
        path: String,
        problem: ShapeProblem,
    },

    #[error("Conversation entry {index} has an empty `content.parts` list")]
    EmptySelection { index: usize },
}

/// Why a lookup along the conversation path failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeProblem {
    /// The key is not present in its parent object.
    Missing,
    /// The key is present but holds the wrong kind of value.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeProblem::Missing => write!(f, "key is missing"),
            ShapeProblem::WrongType { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
        }
    }
}
