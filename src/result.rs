//! Result types for extraction output.
//!
//! This module defines the structured output from content extraction:
//! the main content, media and link records, quality metrics, and the
//! outcome variant that tells the caller which path produced the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image found inside the extracted content.
///
/// `source_url` is always absolute, resolved against the originating
/// document's base URL. Images whose declared dimensions mark them as
/// decorative (icons, spacers) are filtered out before this record is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Absolute image URL (from `src` or `data-src`).
    pub source_url: String,

    /// Alt text, empty when the attribute is missing.
    pub alt_text: String,

    /// Declared width in logical pixels, if present.
    pub width: Option<u32>,

    /// Declared height in logical pixels, if present.
    pub height: Option<u32>,
}

/// A link found inside the extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLink {
    /// Absolute target URL. Anchors that fail resolution are dropped
    /// upstream, so this is never relative or malformed.
    pub target_url: String,

    /// Visible anchor text, whitespace-normalized.
    pub text: String,

    /// True when the resolved origin (scheme + host + port) differs from
    /// the document's own origin.
    pub is_external: bool,
}

/// Quality metrics for the final cleaned content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Number of whitespace-separated words in the content text.
    pub word_count: usize,

    /// Whether the content contains at least one heading or paragraph.
    pub has_structure: bool,

    /// Confidence score in `[0, 1]`, monotonic in length and structure.
    pub quality_score: f64,
}

/// Which pipeline path produced the result.
///
/// This makes the "always return a result object" contract explicit:
/// degraded paths return data rather than raising, and callers branch on
/// this variant to decide whether a degraded capture is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The happy path: a candidate validated, was cleaned and assessed.
    Full,

    /// No candidate validated; content was synthesized from the whole
    /// body text without cleaning or scoring. Low confidence.
    FallbackBody,

    /// A traversal failure or timeout was contained; `error` holds the
    /// reason and `content_text` is best-effort whole-document text.
    Errored,
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Full
    }
}

/// Result of content extraction from an HTML document.
///
/// Every extraction call produces one of these, including degraded and
/// errored paths. `title`, `url` and `extracted_at` are always populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document title: caller-supplied, or derived from the tree, or a
    /// URL-based fallback. Never empty.
    pub title: String,

    /// The URL the caller supplied for this document, echoed back.
    pub url: String,

    /// When this extraction ran.
    pub extracted_at: DateTime<Utc>,

    /// Main content as HTML (cleaned; raw body markup on fallback paths).
    pub content_html: String,

    /// Main content as plain text.
    pub content_text: String,

    /// Content images, decorative images already filtered out.
    pub images: Vec<ExtractedImage>,

    /// Content links with external/internal classification.
    pub links: Vec<ExtractedLink>,

    /// Quality assessment of the final content.
    pub quality: QualityMetrics,

    /// Which pipeline path produced this result.
    pub outcome: Outcome,

    /// Populated on the errored path with a descriptive reason.
    /// `content_text` may coexist with it as a best-effort fallback.
    pub error: Option<String>,
}

impl ExtractionResult {
    /// True for any non-happy-path result.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.outcome != Outcome::Full
    }
}
