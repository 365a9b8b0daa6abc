//! Tests for transcript file naming.

use chatgrab::files::filename::{
    self, FileTemplate, NameError, TemplateError, DEFAULT_ID_MAX_LENGTH, DEFAULT_TEMPLATE,
};

// ============================================================================
// Id Sanitization Tests
// ============================================================================

#[test]
fn sanitize_keeps_uuid_ids() {
    assert_eq!(
        filename::sanitize_id("4ad82157-c4b9-421e-9e33-7902ea940d71", DEFAULT_ID_MAX_LENGTH),
        "4ad82157-c4b9-421e-9e33-7902ea940d71"
    );
}

#[test]
fn sanitize_keeps_underscores() {
    assert_eq!(filename::sanitize_id("chat_01", 100), "chat_01");
}

#[test]
fn sanitize_replaces_separators_and_dots() {
    assert_eq!(filename::sanitize_id("a/b\\c:d", 100), "a-b-c-d");
    assert_eq!(filename::sanitize_id("../secret", 100), "secret");
}

#[test]
fn sanitize_replaces_non_ascii() {
    assert_eq!(filename::sanitize_id("café 🚀 chat", 100), "caf-chat");
}

#[test]
fn sanitize_empty_results_fall_back() {
    assert_eq!(filename::sanitize_id("", 100), "conversation");
    assert_eq!(filename::sanitize_id("///", 100), "conversation");
}

#[test]
fn sanitize_truncates_to_max_length() {
    assert_eq!(filename::sanitize_id("4ad82157-c4b9", 8), "4ad82157");
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn template_requires_single_id_tag() {
    assert_eq!(
        FileTemplate::parse("oai-chat").unwrap_err(),
        TemplateError::MissingId
    );
    assert_eq!(
        FileTemplate::parse("{id}-{id}").unwrap_err(),
        TemplateError::RepeatedId
    );
}

#[test]
fn template_rejects_clock_tags() {
    assert_eq!(
        FileTemplate::parse("{date}-{id}").unwrap_err(),
        TemplateError::UnknownTag("date".to_string())
    );
    assert_eq!(
        FileTemplate::parse("{id}_{time:%H%M}").unwrap_err(),
        TemplateError::UnknownTag("time:%H%M".to_string())
    );
}

#[test]
fn template_rejects_stray_braces_and_separators() {
    assert_eq!(
        FileTemplate::parse("{{id}").unwrap_err(),
        TemplateError::StrayBrace
    );
    assert_eq!(
        FileTemplate::parse("{id}}").unwrap_err(),
        TemplateError::StrayBrace
    );
    assert_eq!(
        FileTemplate::parse("chats/{id}").unwrap_err(),
        TemplateError::PathSeparator
    );
}

#[test]
fn template_error_messages() {
    assert_eq!(
        TemplateError::UnknownTag("date".to_string()).to_string(),
        "Unknown filename template tag: {date}"
    );
    assert_eq!(
        TemplateError::MissingId.to_string(),
        "Filename template has no {id} tag"
    );
}

// ============================================================================
// Generate Function Tests
// ============================================================================

#[test]
fn generate_default_template() {
    let result = filename::generate("abc-123", DEFAULT_TEMPLATE, DEFAULT_ID_MAX_LENGTH).unwrap();
    assert_eq!(result, "oai-chat-abc-123.json");
}

#[test]
fn generate_is_deterministic() {
    let first = filename::generate("abc-123", "chat_{id}_v1", 100).unwrap();
    let second = filename::generate("abc-123", "chat_{id}_v1", 100).unwrap();
    assert_eq!(first, "chat_abc-123_v1.json");
    assert_eq!(first, second);
}

#[test]
fn generate_rejects_overlong_names() {
    let result = filename::generate(&"a".repeat(260), "{id}", 300);
    assert_eq!(
        result,
        Err(NameError::TooLong {
            length: 265,
            max: 255
        })
    );
}

#[test]
fn generate_accepts_name_at_limit() {
    let name = filename::generate(&"a".repeat(250), "{id}", 300).unwrap();
    assert_eq!(name.len(), 255);
}

#[test]
fn generate_with_invalid_template_returns_error() {
    let result = filename::generate("abc", "{unknown}", 100);
    assert!(matches!(result, Err(NameError::Template(_))));
}
