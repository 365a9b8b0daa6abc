//! Guarded traversal from the decoded payload to the conversation entries.

use serde_json::Value;

use super::{ExtractError, ShapeProblem};

/// One element of the `linear_conversation` list, interpreted only by the
/// normalizer.
pub type ConversationEntry = Value;

/// Keys leading from the payload root to the conversation list.
///
/// Every value on the way must be an object; the last one must be an array.
pub const CONVERSATION_PATH: [&str; 5] = [
    "props",
    "pageProps",
    "serverResponse",
    "data",
    "linear_conversation",
];

/// Label used for the payload root in shape errors.
const ROOT_SEGMENT: &str = "$";

/// Parse the payload and return the conversation entries it contains.
pub fn decode(text: &str) -> Result<Vec<ConversationEntry>, ExtractError> {
    let mut current: Value = serde_json::from_str(text)?;
    let mut parent = ROOT_SEGMENT;

    for (depth, segment) in CONVERSATION_PATH.iter().copied().enumerate() {
        let mut map = match current {
            Value::Object(map) => map,
            other => return Err(wrong_type(parent, depth, "object", &other)),
        };
        current = map
            .remove(segment)
            .ok_or_else(|| shape_error(segment, depth + 1, ShapeProblem::Missing))?;
        parent = segment;
    }

    match current {
        Value::Array(entries) => Ok(entries),
        other => Err(wrong_type(
            parent,
            CONVERSATION_PATH.len(),
            "array",
            &other,
        )),
    }
}

/// Dotted path covering the first `depth` segments, `$` for the root.
fn path_to(depth: usize) -> String {
    if depth == 0 {
        ROOT_SEGMENT.to_string()
    } else {
        CONVERSATION_PATH[..depth].join(".")
    }
}

fn shape_error(segment: &'static str, depth: usize, problem: ShapeProblem) -> ExtractError {
    ExtractError::UnexpectedShape {
        segment,
        path: path_to(depth),
        problem,
    }
}

fn wrong_type(
    segment: &'static str,
    depth: usize,
    expected: &'static str,
    found: &Value,
) -> ExtractError {
    shape_error(
        segment,
        depth,
        ShapeProblem::WrongType {
            expected,
            found: kind_of(found),
        },
    )
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
