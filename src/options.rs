//! Configuration options for content extraction.
//!
//! [`Options`] controls extraction behavior. The scoring weights and the
//! cleaner's unwanted/preserve lists are plain data injected here, so tests
//! can run the pipeline with custom rule sets deterministically.

use std::time::Duration;

/// Scoring weights for candidate assessment.
///
/// The defaults are empirically chosen values carried over from the
/// production heuristics; downstream behavior binds to their relative
/// ordering, not their absolute magnitudes, so tune with care.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Divisor applied to the raw word count before capping.
    pub word_divisor: f64,

    /// Cap on the normalized word-count signal, so very long pages do not
    /// dominate purely on size.
    pub word_cap: f64,

    /// Bonus per descendant paragraph element.
    pub paragraph: f64,

    /// Bonus per descendant heading element.
    pub heading: f64,

    /// Bonus when the element itself is an `<article>` container.
    pub article_container: f64,

    /// Bonus when the element itself is a `<main>` container.
    pub main_container: f64,

    /// Bonus for a prose-style class marker (e.g. Tailwind `prose`).
    pub prose_class: f64,

    /// Bonus for a max-width utility class marker.
    pub max_width_class: f64,

    /// Bonus for a center-alignment utility class marker.
    pub centered_class: f64,

    /// Bonus per content-vocabulary token present in the class attribute
    /// ("content", "article", "post", "entry", "main", "body").
    pub content_token: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            word_divisor: 5.0,
            word_cap: 500.0,
            paragraph: 20.0,
            heading: 30.0,
            article_container: 200.0,
            main_container: 150.0,
            prose_class: 150.0,
            max_width_class: 80.0,
            centered_class: 60.0,
            content_token: 80.0,
        }
    }
}

/// Selector lists driving the content cleaner.
///
/// Immutable configuration: the cleaner never mutates these, and swapping
/// them out is the supported way to test cleaning decisions in isolation.
#[derive(Debug, Clone)]
pub struct CleanerRules {
    /// Subtrees matching any of these selectors are detached.
    pub unwanted: Vec<String>,

    /// Matches that also match one of these survive the removal pass,
    /// even when an unwanted selector caught them.
    pub preserve: Vec<String>,
}

impl Default for CleanerRules {
    fn default() -> Self {
        let unwanted = [
            // Non-content machinery
            "script",
            "style",
            "noscript",
            "template",
            "iframe",
            "form",
            "button",
            // Page chrome
            "nav",
            "header",
            "footer",
            "aside",
            "[role='navigation']",
            "[role='banner']",
            "[role='complementary']",
            // Ad and tracking patterns
            "[class*='advert']",
            "[class*='sponsor']",
            "[class*='promo']",
            "[data-ad]",
            "[data-tracking]",
            // Engagement widgets
            "[class*='share-']",
            "[class*='social']",
            "[class*='related']",
            "[class*='newsletter']",
            "[class*='cookie']",
            "[class*='popup']",
            "[class*='sidebar']",
            "[id*='sidebar']",
            "[class*='comment']",
            "[class*='author']",
            // Hidden-by-style elements; requires inline style to still be
            // present, which is why removal runs before attribute stripping
            "[style*='display:none']",
            "[style*='display: none']",
            "[style*='visibility:hidden']",
        ];
        let preserve = [
            "[class*='author-bio']",
            "[class*='article-comment']",
            "[class*='citation']",
            "[class*='footnote']",
            "[role='note']",
        ];
        Self {
            unwanted: unwanted.iter().map(ToString::to_string).collect(),
            preserve: preserve.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagesift::Options;
///
/// let options = Options {
///     page_title: Some("Provided by the capture layer".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Title supplied by the capture collaborator. When absent, the title
    /// is derived from `<title>`, then the first `<h1>`, then the URL.
    ///
    /// Default: `None`
    pub page_title: Option<String>,

    /// Scoring weights for the candidate scorer.
    pub weights: ScoreWeights,

    /// Unwanted/preserve selector lists for the content cleaner.
    pub cleaner: CleanerRules,

    /// Minimum trimmed text length for a candidate to validate, unless a
    /// paragraph or heading descendant rescues it.
    ///
    /// Default: `100` (see [`Options::default`])
    pub min_candidate_chars: usize,

    /// Images with both declared dimensions at or below this value are
    /// treated as decorative UI chrome and dropped.
    ///
    /// Default: `20`
    pub decorative_max_dimension: u32,

    /// Optional deadline. When set, every entry point races extraction
    /// against it; the explicit argument of
    /// [`crate::extract_with_deadline`] overrides this field.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,
}

impl Options {
    /// Standard settings: default weights and rules, 100-char validity
    /// gate, 20px decorative threshold, no deadline.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            page_title: None,
            weights: ScoreWeights::default(),
            cleaner: CleanerRules::default(),
            min_candidate_chars: 100,
            decorative_max_dimension: 20,
            timeout: None,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::standard()
    }
}
