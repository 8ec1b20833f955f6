//! Compiled regex patterns for class-token signals and text cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class-token signals used by the candidate scorer
// =============================================================================

/// Matches prose-style class tokens (Tailwind typography and variants).
pub static PROSE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|\s)prose(-[a-z0-9]+)*(\s|$)").expect("PROSE_CLASS regex")
});

/// Matches max-width utility tokens (`max-w-2xl`, `max-w-prose`, ...).
pub static MAX_WIDTH_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|\s)max-w-[a-z0-9\[\]%]+(\s|$)").expect("MAX_WIDTH_CLASS regex")
});

/// Matches horizontal-centering utility tokens.
pub static CENTERED_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|\s)(mx-auto|center|centered)(\s|$)").expect("CENTERED_CLASS regex")
});

/// Content-indicating vocabulary checked against the class attribute.
/// Each token present contributes an independent bonus.
pub const CONTENT_TOKENS: &[&str] = &["content", "article", "post", "entry", "main", "body"];

// =============================================================================
// Text cleanup
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Collapse all whitespace runs in `text` to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}
