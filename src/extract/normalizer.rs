//! Turn normalization: per-entry filtering and content selection.
//!
//! Only entries carrying a text message with a known author become turns.
//! Anything else (the empty root node, system scaffolding, tool calls, image
//! uploads) is dropped without error.
//!
//! # Content selection
//!
//! A text message stores its content as a `parts` list. The turn content is
//! the **last** element of that list. Earlier fragments are discarded and
//! are not concatenated, so a multi-part message is truncated to its final
//! fragment. The entry itself is left untouched.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use super::{ConversationEntry, EmptyPartsPolicy, ExtractError, ExtractionConfig};
use crate::transcript::Turn;

/// The only `content.content_type` that produces a turn.
const TEXT_CONTENT_TYPE: &str = "text";

/// Why an entry produced no turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `message` absent or null
    NoMessage,
    /// `message.author` absent
    NoAuthor,
    /// `message.author.role` absent or not a string
    NoRole,
    /// `message.content` absent
    NoContent,
    /// `content.content_type` is something other than `"text"`
    NotText(Option<String>),
    /// `content.parts` absent, null, or not a list
    NoParts,
    /// `content.parts` is an empty list
    EmptyParts,
    /// The selected fragment is not a string
    NonTextFragment,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMessage => write!(f, "no message"),
            SkipReason::NoAuthor => write!(f, "message has no author"),
            SkipReason::NoRole => write!(f, "author has no role"),
            SkipReason::NoContent => write!(f, "message has no content"),
            SkipReason::NotText(Some(kind)) => write!(f, "content type is {:?}", kind),
            SkipReason::NotText(None) => write!(f, "content type is missing"),
            SkipReason::NoParts => write!(f, "content has no parts"),
            SkipReason::EmptyParts => write!(f, "content parts are empty"),
            SkipReason::NonTextFragment => write!(f, "last content part is not text"),
        }
    }
}

/// Turn conversation entries into turns, preserving their order.
///
/// Each qualifying entry yields exactly one turn whose content is the last
/// element of `message.content.parts` (see the module docs). The input is
/// never mutated.
///
/// Returns [`ExtractError::EmptySelection`] only when an entry has an empty
/// `parts` list and `config.empty_parts` is [`EmptyPartsPolicy::Fail`].
pub fn normalize(
    entries: &[ConversationEntry],
    config: &ExtractionConfig,
) -> Result<Vec<Turn>, ExtractError> {
    let mut turns = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match turn_from_entry(entry) {
            Ok(turn) => turns.push(turn),
            Err(SkipReason::EmptyParts) if config.empty_parts == EmptyPartsPolicy::Fail => {
                return Err(ExtractError::EmptySelection { index });
            }
            Err(reason) => debug!(index, %reason, "skipping conversation entry"),
        }
    }

    Ok(turns)
}

/// Build the turn for a single entry, or say why there is none.
fn turn_from_entry(entry: &Value) -> Result<Turn, SkipReason> {
    let message = field(entry, "message").ok_or(SkipReason::NoMessage)?;
    let author = field(message, "author").ok_or(SkipReason::NoAuthor)?;
    let role = field(author, "role")
        .and_then(Value::as_str)
        .ok_or(SkipReason::NoRole)?;
    let content = field(message, "content").ok_or(SkipReason::NoContent)?;

    let content_type = field(content, "content_type").and_then(Value::as_str);
    if content_type != Some(TEXT_CONTENT_TYPE) {
        return Err(SkipReason::NotText(content_type.map(str::to_string)));
    }

    let parts = field(content, "parts")
        .and_then(Value::as_array)
        .ok_or(SkipReason::NoParts)?;
    let selected = parts.last().ok_or(SkipReason::EmptyParts)?;
    let text = selected.as_str().ok_or(SkipReason::NonTextFragment)?;

    Ok(Turn::new(role, text))
}

/// Object field lookup that treats JSON `null` as absent.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}
