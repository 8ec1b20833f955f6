//! # pagesift
//!
//! Readability-style main-content extraction for captured web pages.
//!
//! Given arbitrary, uncontrolled HTML and the document's URL, pagesift
//! locates the main article content, strips navigation, advertisements,
//! and other chrome, extracts image and link records, and scores the
//! confidence of the result. No site-specific configuration is needed in
//! the common case: an ordered list of layout strategies with a mandatory
//! generic fallback keeps strategy selection total.
//!
//! Extraction never panics or errors across this boundary. Every call
//! returns an [`ExtractionResult`] carrying a title, the URL, and a
//! timestamp; degraded paths are reported through [`Outcome`] and the
//! result's `error` field rather than by raising.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagesift::extract;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here, long enough to be interesting
//! for the scoring gate when combined with its markup.</p></article></body></html>"#;
//!
//! let result = extract(html, "https://example.com/post");
//! assert_eq!(result.title, "My Article");
//! assert!(result.content_text.contains("Main content"));
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Two-pass content cleaning (unwanted removal, attribute stripping).
pub mod cleaning;

/// Media and link extraction from cleaned content.
pub mod media;

/// Quality assessment of the final content.
pub mod quality;

/// Candidate collection and scoring.
pub mod scoring;

/// Selector strategy registry.
pub mod strategy;

/// URL validation, resolution, and origin comparison.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{CleanerRules, Options, ScoreWeights};
pub use result::{
    ExtractedImage, ExtractedLink, ExtractionResult, Outcome, QualityMetrics,
};

use std::time::Duration;

/// Extract main content from an HTML document using standard options.
///
/// `url` is the document's location, used for base-URL resolution of
/// images and links, origin classification, and title fallbacks. The
/// call always returns a result object; inspect [`ExtractionResult::outcome`]
/// and `error` for degraded paths.
///
/// # Example
///
/// ```rust
/// use pagesift::{extract, Outcome};
///
/// let result = extract("<html><body></body></html>", "https://example.com/");
/// assert_eq!(result.outcome, Outcome::FallbackBody);
/// assert!(!result.title.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str, url: &str) -> ExtractionResult {
    extract_with_options(html, url, &Options::standard())
}

/// Extract main content with custom options.
///
/// When [`Options::timeout`] is set, extraction is raced against it as if
/// the caller had gone through [`extract_with_deadline`].
///
/// # Example
///
/// ```rust
/// use pagesift::{extract_with_options, Options};
///
/// let options = Options {
///     page_title: Some("Known Title".to_string()),
///     ..Options::standard()
/// };
/// let result = extract_with_options("<html><body></body></html>", "https://example.com/", &options);
/// assert_eq!(result.title, "Known Title");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, url: &str, options: &Options) -> ExtractionResult {
    match options.timeout {
        Some(deadline) => extract::run_with_deadline(html, url, options, deadline),
        None => extract::run(html, url, options),
    }
}

/// Extract main content, racing the computation against a deadline.
///
/// The explicit `deadline` argument overrides any [`Options::timeout`].
/// If the deadline elapses first, the returned result is an errored one
/// whose `error` signals a timeout. The in-flight computation is not
/// cancelled — its answer is discarded, so treat a timed-out extraction
/// as "answer discarded", not "computation stopped".
#[must_use]
pub fn extract_with_deadline(
    html: &str,
    url: &str,
    options: &Options,
    deadline: Duration,
) -> ExtractionResult {
    extract::run_with_deadline(html, url, options, deadline)
}

/// Extract main content from HTML bytes with automatic encoding detection.
///
/// Detects the charset from meta tags and transcodes to UTF-8 before
/// extraction; invalid characters are replaced rather than fatal.
///
/// # Example
///
/// ```rust
/// use pagesift::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
/// <body><article><h1>Caf\xE9</h1><p>short</p></article></body></html>";
/// let result = extract_bytes(html, "https://example.com/");
/// assert!(result.content_text.contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str) -> ExtractionResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, url)
}

/// Extract main content from HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], url: &str, options: &Options) -> ExtractionResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, url, options)
}
