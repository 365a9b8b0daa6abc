//! Transcript turns and their on-disk JSON encoding.
//!
//! A transcript file is a JSON array of `{"role": ..., "content": ...}`
//! objects, indented with four spaces:
//!
//! ```json
//! [
//!     {
//!         "role": "user",
//!         "content": "Hi"
//!     }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation used for transcript files.
const INDENT: &[u8] = b"    ";

/// One role-tagged message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Author role as found in the page (`user`, `assistant`, `system`, ...)
    pub role: String,
    /// Message text
    pub content: String,
}

impl Turn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Encode turns as an indented JSON array with a trailing newline.
pub fn to_json(turns: &[Turn]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    turns
        .serialize(&mut serializer)
        .context("Failed to serialize transcript")?;
    buffer.push(b'\n');
    Ok(String::from_utf8(buffer)?)
}

/// Write turns to `path`, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub fn save<P: AsRef<Path>>(path: P, turns: &[Turn]) -> Result<u64> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let json = to_json(turns)?;
    fs::write(path, &json).with_context(|| format!("Failed to write transcript: {:?}", path))?;
    Ok(json.len() as u64)
}

/// Read a transcript file back into turns.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Turn>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid transcript: {:?}", path))
}
