//! Tests for the grab runner with an in-memory page source.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use chatgrab::config::OutputSettings;
use chatgrab::fetch::{FetchError, PageSource};
use chatgrab::grab::parse_url_list;
use chatgrab::{transcript, ExtractError, ExtractionConfig, GrabError, Grabber};
use tempfile::TempDir;

use crate::helpers::{load_fixture, share_page_turns};

const SHARE_URL: &str = "https://chat.openai.com/share/4ad82157-c4b9-421e-9e33-7902ea940d71";

/// Serves canned pages and records every requested URL.
struct FakeSource {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeSource {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, page)| (url.to_string(), page.clone()))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl PageSource for &FakeSource {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

fn output_in(dir: &TempDir) -> OutputSettings {
    OutputSettings {
        directory: dir.path().to_path_buf(),
        ..OutputSettings::default()
    }
}

#[test]
fn grab_saves_transcript_named_after_id() {
    let temp = TempDir::new().unwrap();
    let source = FakeSource::new(&[(SHARE_URL, load_fixture("share_page.html"))]);
    let grabber = Grabber::new(&source, ExtractionConfig::default(), output_in(&temp));

    let saved = grabber.grab(SHARE_URL).unwrap();

    let expected_path = temp
        .path()
        .join("oai-chat-4ad82157-c4b9-421e-9e33-7902ea940d71.json");
    assert_eq!(saved.path, expected_path);
    assert_eq!(saved.id, "4ad82157-c4b9-421e-9e33-7902ea940d71");
    assert_eq!(saved.turns, 5);
    assert_eq!(saved.bytes, std::fs::metadata(&expected_path).unwrap().len());
    assert_eq!(transcript::load(&expected_path).unwrap(), share_page_turns());
}

#[test]
fn batch_continues_after_failures() {
    let temp = TempDir::new().unwrap();
    let source = FakeSource::new(&[
        ("https://chat.example/share/good-1", load_fixture("share_page.html")),
        ("https://chat.example/share/no-data", load_fixture("no_payload.html")),
        ("https://chat.example/share/good-2", load_fixture("share_page.html")),
    ]);
    let grabber = Grabber::new(&source, ExtractionConfig::default(), output_in(&temp));

    let urls = [
        "https://chat.example/share/good-1",
        "https://chat.example/share/missing",
        "not a url",
        "https://chat.example/share/no-data",
        "https://chat.example/share/good-2",
    ];
    let report = grabber.grab_all(urls, Duration::ZERO);

    assert!(!report.is_success());
    assert_eq!(report.total(), 5);

    let saved_ids: Vec<&str> = report.saved.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(saved_ids, ["good-1", "good-2"]);

    assert_eq!(report.failed.len(), 3);
    assert!(matches!(
        report.failed[0].1,
        GrabError::Fetch(FetchError::Status { status: 404, .. })
    ));
    assert!(matches!(
        report.failed[1].1,
        GrabError::Fetch(FetchError::InvalidUrl { .. })
    ));
    assert!(matches!(
        report.failed[2].1,
        GrabError::Extract(ExtractError::PayloadNotFound)
    ));

    // The invalid URL never reaches the source
    assert_eq!(source.requests.borrow().len(), 4);
    assert!(temp.path().join("oai-chat-good-1.json").exists());
    assert!(temp.path().join("oai-chat-good-2.json").exists());
    assert!(!temp.path().join("oai-chat-no-data.json").exists());
}

#[test]
fn batch_requests_in_input_order() {
    let temp = TempDir::new().unwrap();
    let page = load_fixture("share_page.html");
    let source = FakeSource::new(&[
        ("https://chat.example/share/b", page.clone()),
        ("https://chat.example/share/a", page),
    ]);
    let grabber = Grabber::new(&source, ExtractionConfig::default(), output_in(&temp));

    let urls = parse_url_list("https://chat.example/share/b\n# skip\nhttps://chat.example/share/a\n");
    let report = grabber.grab_all(&urls, Duration::from_millis(1));

    assert!(report.is_success());
    assert_eq!(*source.requests.borrow(), urls);
}

#[test]
fn custom_template_and_nested_directory() {
    let temp = TempDir::new().unwrap();
    let source = FakeSource::new(&[(SHARE_URL, load_fixture("share_page.html"))]);
    let output = OutputSettings {
        directory: temp.path().join("transcripts").join("2024"),
        filename_template: "chat_{id}".to_string(),
        id_max_length: 8,
    };
    let grabber = Grabber::new(&source, ExtractionConfig::default(), output);

    let saved = grabber.grab(SHARE_URL).unwrap();

    assert_eq!(
        saved.path,
        temp.path().join("transcripts").join("2024").join("chat_4ad82157.json")
    );
    assert!(saved.path.exists());
}

#[test]
fn offline_grabber_saves_markup() {
    let temp = TempDir::new().unwrap();
    let grabber = Grabber::offline(ExtractionConfig::default(), output_in(&temp));

    let saved = grabber
        .grab_markup("page.html", "saved page", &load_fixture("share_page.html"))
        .unwrap();

    assert_eq!(saved.path, temp.path().join("oai-chat-saved-page.json"));
    assert_eq!(saved.source, "page.html");
}

#[test]
fn fatal_extraction_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let grabber = Grabber::offline(ExtractionConfig::default(), output_in(&temp));

    let result = grabber.grab_markup("x", "x", &load_fixture("empty_parts.html"));

    assert!(matches!(
        result,
        Err(GrabError::Extract(ExtractError::EmptySelection { index: 1 }))
    ));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}
