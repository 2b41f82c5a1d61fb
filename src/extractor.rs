//! Email and title extraction from page markup.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Title used when a document has no `<title>` element.
pub const UNKNOWN_TITLE: &str = "Desconocido";

/// Suffixes that mark a match as an asset file name rather than an address,
/// e.g. `logo@2x.png`.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// What was found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Trimmed text of the first `<title>`, or [`UNKNOWN_TITLE`].
    pub title: String,
    /// Distinct email addresses, sorted.
    pub emails: BTreeSet<String>,
}

/// Extracts the page title and the set of email addresses from `body`.
///
/// Never fails: malformed markup degrades to a placeholder title and a
/// body without addresses yields an empty set.
pub fn extract(body: &str) -> Extraction {
    Extraction {
        title: extract_title(body),
        emails: extract_emails(body),
    }
}

/// Returns every distinct email-shaped token in `body`.
pub fn extract_emails(body: &str) -> BTreeSet<String> {
    RE_EMAIL
        .find_iter(body)
        .map(|m| m.as_str())
        .filter(|email| !is_image_name(email))
        .map(str::to_string)
        .collect()
}

/// Returns the trimmed text of the first `<title>` element in `body`.
pub fn extract_title(body: &str) -> String {
    let document = Html::parse_document(body);
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

fn is_image_name(candidate: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| candidate.ends_with(ext))
}
