//! Embedded payload lookup.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::ExtractError;

/// Media type of the embedded data block.
const PAYLOAD_MEDIA_TYPE: &str = "application/json";

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. Parsing is lenient and never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// `<script>` elements declaring the JSON media type, in document order.
    fn payload_scripts(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| is_payload_script(element))
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

fn is_payload_script(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    value.name().eq_ignore_ascii_case("script")
        && value
            .attr("type")
            .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(PAYLOAD_MEDIA_TYPE))
}

/// Return the text of the first `<script type="application/json">` element.
///
/// Later qualifying elements are ignored.
pub fn locate(doc: &Document) -> Result<String, ExtractError> {
    let mut scripts = doc.payload_scripts();
    let first = scripts.next().ok_or(ExtractError::PayloadNotFound)?;

    let ignored = scripts.count();
    if ignored > 0 {
        debug!(ignored, "ignoring additional JSON script elements");
    }

    Ok(first.text().collect())
}
