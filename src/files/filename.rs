//! Transcript file names.
//!
//! A transcript is named after the conversation it holds. The template
//! (default `oai-chat-{id}`) carries exactly one `{id}` tag and `.json` is
//! appended unless the template already ends with it, so the same id and
//! template always produce the same name.

use thiserror::Error;

/// Transcript file extension.
pub const EXTENSION: &str = ".json";

/// Default template string.
pub const DEFAULT_TEMPLATE: &str = "oai-chat-{id}";

/// Default cap on the id component of a file name.
pub const DEFAULT_ID_MAX_LENGTH: usize = 100;

const ID_TAG: &str = "{id}";

/// Used when an id has no usable characters at all.
const FALLBACK_ID: &str = "conversation";

const MAX_FILE_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Filename template has no {{id}} tag")]
    MissingId,

    #[error("Filename template has more than one {{id}} tag")]
    RepeatedId,

    #[error("Unknown filename template tag: {{{0}}}")]
    UnknownTag(String),

    #[error("Unbalanced brace in filename template")]
    StrayBrace,

    #[error("Filename template cannot contain a path separator")]
    PathSeparator,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Invalid filename template: {0}")]
    Template(#[from] TemplateError),

    #[error("Filename too long: {length} bytes (max {max})")]
    TooLong { length: usize, max: usize },
}

/// Reduce a conversation id to `[A-Za-z0-9_-]`.
///
/// Runs of other characters become a single `-`, edge hyphens are trimmed and
/// the result is cut to `max_length` (at least 1). Share ids are UUIDs and pass
/// through unchanged.
pub fn sanitize_id(id: &str, max_length: usize) -> String {
    let mut cleaned = String::with_capacity(id.len());
    for c in id.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            cleaned.push(c);
        } else if !cleaned.ends_with('-') {
            cleaned.push('-');
        }
    }

    // ASCII only from here on, so byte truncation is safe
    let mut cleaned = cleaned.trim_matches('-').to_string();
    cleaned.truncate(max_length.max(1));
    let cleaned = cleaned.trim_end_matches('-');

    if cleaned.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        cleaned.to_string()
    }
}

/// A parsed template: literal text around a single `{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    prefix: String,
    suffix: String,
}

impl Default for FileTemplate {
    fn default() -> Self {
        Self {
            prefix: "oai-chat-".to_string(),
            suffix: String::new(),
        }
    }
}

impl FileTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut pieces = template.split(ID_TAG);
        let prefix = pieces.next().unwrap_or_default();
        let suffix = pieces.next().ok_or(TemplateError::MissingId)?;
        if pieces.next().is_some() {
            return Err(TemplateError::RepeatedId);
        }

        check_literal(prefix)?;
        check_literal(suffix)?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// File name for the conversation `id`.
    pub fn file_name(&self, id: &str, id_max_length: usize) -> Result<String, NameError> {
        let mut name = format!(
            "{}{}{}",
            self.prefix,
            sanitize_id(id, id_max_length),
            self.suffix
        );
        if !name.ends_with(EXTENSION) {
            name.push_str(EXTENSION);
        }

        if name.len() > MAX_FILE_NAME_LENGTH {
            return Err(NameError::TooLong {
                length: name.len(),
                max: MAX_FILE_NAME_LENGTH,
            });
        }
        Ok(name)
    }
}

/// Parse `template` and name the transcript for `id`.
pub fn generate(id: &str, template: &str, id_max_length: usize) -> Result<String, NameError> {
    FileTemplate::parse(template)?.file_name(id, id_max_length)
}

fn check_literal(text: &str) -> Result<(), TemplateError> {
    if text.contains(|c: char| c == '/' || c == '\\') {
        return Err(TemplateError::PathSeparator);
    }

    if let Some(open) = text.find('{') {
        let tag = &text[open + 1..];
        return Err(match tag.find('}') {
            Some(close) => TemplateError::UnknownTag(tag[..close].to_string()),
            None => TemplateError::StrayBrace,
        });
    }
    if text.contains('}') {
        return Err(TemplateError::StrayBrace);
    }

    Ok(())
}
