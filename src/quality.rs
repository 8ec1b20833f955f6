//! Quality assessment of the final cleaned content.
//!
//! Derives a bounded confidence score plus structural flags. The score is
//! a monotonic combination of normalized word count and a structure
//! indicator: more structured, longer content never scores lower than
//! less structured, shorter content, and the result always stays inside
//! the unit interval.

use dom_query::Selection;

use crate::dom;
use crate::result::QualityMetrics;
use crate::scoring::HEADING_SELECTOR;

/// Word count at which the length component saturates.
const WORD_SATURATION: f64 = 600.0;

/// Weight of the length component.
const LENGTH_WEIGHT: f64 = 0.7;

/// Weight of the structure component.
const STRUCTURE_WEIGHT: f64 = 0.3;

/// Assess the final content subtree.
#[must_use]
pub fn assess(content: &Selection) -> QualityMetrics {
    let text = dom::text_content(content);
    let word_count = text.split_whitespace().count();
    let has_structure =
        content.select("p").exists() || content.select(HEADING_SELECTOR).exists();

    QualityMetrics {
        word_count,
        has_structure,
        quality_score: score(word_count, has_structure),
    }
}

fn score(word_count: usize, has_structure: bool) -> f64 {
    let length = (word_count as f64 / WORD_SATURATION).min(1.0);
    let structure = if has_structure { 1.0 } else { 0.0 };
    (LENGTH_WEIGHT * length + STRUCTURE_WEIGHT * structure).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_stays_in_unit_interval() {
        assert_eq!(score(0, false), 0.0);
        assert!(score(usize::MAX, true) <= 1.0);
        assert!((score(10_000, true) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_monotonic_in_words_and_structure() {
        assert!(score(400, true) > score(100, true));
        assert!(score(100, true) > score(100, false));
        assert!(score(600, true) >= score(600, false));
    }

    #[test]
    fn assess_counts_words_and_detects_structure() {
        let doc = dom::parse("<div><h1>Title</h1><p>one two three</p></div>");
        let metrics = assess(&doc.select("div"));

        assert_eq!(metrics.word_count, 4);
        assert!(metrics.has_structure);
        assert!(metrics.quality_score > 0.0);
    }

    #[test]
    fn unstructured_short_text_scores_low_but_nonzero() {
        let doc = dom::parse("<div><span>a few plain words here</span></div>");
        let metrics = assess(&doc.select("div"));

        assert!(!metrics.has_structure);
        assert!(metrics.quality_score > 0.0);
        assert!(metrics.quality_score < 0.1);
    }

    #[test]
    fn empty_content_scores_zero() {
        let doc = dom::parse("<div></div>");
        let metrics = assess(&doc.select("div"));

        assert_eq!(metrics.word_count, 0);
        assert!(!metrics.has_structure);
        assert_eq!(metrics.quality_score, 0.0);
    }
}
