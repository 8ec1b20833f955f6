//! Candidate scoring.
//!
//! Given the selector groups of the chosen strategy, this module collects
//! candidate elements, applies a validity gate, and scores each candidate
//! by summing independently-weighted structural and semantic signals.
//! Candidates are ephemeral: constructed for one extraction pass and
//! dropped with it.

use std::collections::HashSet;

use dom_query::{Document, NodeId, Selection};
use tracing::trace;

use crate::dom;
use crate::options::{Options, ScoreWeights};
use crate::patterns::{CENTERED_CLASS, CONTENT_TOKENS, MAX_WIDTH_CLASS, PROSE_CLASS};
use crate::strategy::SelectorGroup;

/// Selector matching heading elements, shared by gate and scorer.
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// A document subtree considered as a possible main-content region.
pub struct Candidate<'a> {
    /// The candidate element.
    pub selection: Selection<'a>,

    /// Computed score, clamped to `>= 0`.
    pub score: f64,
}

/// Validity gate applied before scoring.
///
/// Rejects elements with fewer than `min_chars` trimmed characters of
/// text, unless a paragraph or heading descendant rescues short but
/// clearly structured content.
#[must_use]
pub fn validates(sel: &Selection, min_chars: usize) -> bool {
    let text = dom::text_content(sel);
    if text.trim().chars().count() >= min_chars {
        return true;
    }
    sel.select("p").exists() || sel.select(HEADING_SELECTOR).exists()
}

fn is_article_container(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("article")
        || dom::get_attribute(sel, "role").as_deref() == Some("article")
}

fn is_main_container(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("main")
        || dom::get_attribute(sel, "role").as_deref() == Some("main")
}

/// Score a single validated element.
///
/// Signals are summed independently: normalized word count (soft-capped so
/// huge pages cannot win on size alone), per-paragraph and per-heading
/// structural bonuses, semantic container bonuses, and class-name hints.
#[must_use]
pub fn score_element(sel: &Selection, weights: &ScoreWeights) -> f64 {
    let text = dom::text_content(sel);
    let words = text.split_whitespace().count() as f64;
    let mut score = (words / weights.word_divisor).min(weights.word_cap);

    let paragraphs = sel.select("p").length() as f64;
    let headings = sel.select(HEADING_SELECTOR).length() as f64;
    score += paragraphs * weights.paragraph;
    score += headings * weights.heading;

    if is_article_container(sel) {
        score += weights.article_container;
    } else if is_main_container(sel) {
        score += weights.main_container;
    }

    let class = dom::class_name(sel);
    if !class.is_empty() {
        if PROSE_CLASS.is_match(&class) {
            score += weights.prose_class;
        }
        if MAX_WIDTH_CLASS.is_match(&class) {
            score += weights.max_width_class;
        }
        if CENTERED_CLASS.is_match(&class) {
            score += weights.centered_class;
        }
        let lowered = class.to_ascii_lowercase();
        for token in CONTENT_TOKENS {
            if lowered.contains(token) {
                score += weights.content_token;
            }
        }
    }

    score.max(0.0)
}

/// Collect and score candidates for every selector of every group.
///
/// Groups and selectors are walked in priority order and each element is
/// considered once, so the returned order doubles as the tie-break order.
#[must_use]
pub fn score_candidates<'a>(
    doc: &'a Document,
    groups: &[SelectorGroup],
    options: &Options,
) -> Vec<Candidate<'a>> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut candidates = Vec::new();

    for group in groups {
        for selector in group.selectors {
            for node in doc.select(selector).nodes() {
                if !seen.insert(node.id) {
                    continue;
                }
                let selection = Selection::from(*node);
                if !validates(&selection, options.min_candidate_chars) {
                    trace!(
                        group = group.name,
                        selector = *selector,
                        "candidate rejected by validity gate"
                    );
                    continue;
                }
                let score = score_element(&selection, &options.weights);
                trace!(group = group.name, selector = *selector, score, "candidate scored");
                candidates.push(Candidate { selection, score });
            }
        }
    }

    candidates
}

/// Pick the highest-scoring candidate.
///
/// Strict-greater comparison keeps the earliest-found candidate on ties;
/// iteration order from [`score_candidates`] is the tie-break. Returns
/// `None` when no candidate validated, which signals the orchestrator to
/// take the whole-body fallback path.
#[must_use]
pub fn pick_best(candidates: Vec<Candidate<'_>>) -> Option<Candidate<'_>> {
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        match &best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SelectorGroup;

    fn options() -> Options {
        Options::standard()
    }

    const GROUPS: &[SelectorGroup] = &[SelectorGroup {
        name: "test",
        selectors: &["article", "div"],
    }];

    fn long_text(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn gate_rejects_short_unstructured_text() {
        let doc = dom::parse("<div>short</div>");
        assert!(!validates(&doc.select("div"), 100));
    }

    #[test]
    fn gate_accepts_long_text() {
        let html = format!("<div>{}</div>", "x".repeat(120));
        let doc = dom::parse(&html);
        assert!(validates(&doc.select("div"), 100));
    }

    #[test]
    fn gate_rescues_short_but_structured_content() {
        let doc = dom::parse("<div><h2>Title</h2><p>short</p></div>");
        assert!(validates(&doc.select("div"), 100));
    }

    #[test]
    fn score_is_monotonic_in_structure_and_length() {
        let rich = format!(
            "<div><h2>A</h2><h2>B</h2><p>{t}</p><p>{t}</p><p>{t}</p></div>",
            t = long_text(100)
        );
        let poor = format!("<div><h2>A</h2><p>{}</p></div>", long_text(50));

        let rich_doc = dom::parse(&rich);
        let poor_doc = dom::parse(&poor);
        let weights = ScoreWeights::default();

        let rich_score = score_element(&rich_doc.select("div"), &weights);
        let poor_score = score_element(&poor_doc.select("div"), &weights);
        assert!(rich_score >= poor_score, "{rich_score} < {poor_score}");
    }

    #[test]
    fn word_count_signal_is_capped() {
        let weights = ScoreWeights::default();
        let huge = format!("<div>{}</div>", long_text(100_000));
        let doc = dom::parse(&huge);
        let score = score_element(&doc.select("div"), &weights);

        // 100k words / 5 would be 20k without the cap.
        assert!(score <= weights.word_cap + weights.content_token * CONTENT_TOKENS.len() as f64);
    }

    #[test]
    fn semantic_article_outranks_plain_div() {
        let weights = ScoreWeights::default();
        let body = long_text(100);

        let article = dom::parse(&format!("<article><p>{body}</p></article>"));
        let div = dom::parse(&format!("<div><p>{body}</p></div>"));

        let article_score = score_element(&article.select("article"), &weights);
        let div_score = score_element(&div.select("div"), &weights);
        assert!(article_score > div_score);
        assert!((article_score - div_score - weights.article_container).abs() < 1e-9);
    }

    #[test]
    fn role_attributes_count_as_semantic_containers() {
        let weights = ScoreWeights::default();
        let body = long_text(100);

        let by_role = dom::parse(&format!("<div role=\"main\"><p>{body}</p></div>"));
        let plain = dom::parse(&format!("<div><p>{body}</p></div>"));

        let role_score = score_element(&by_role.select("div"), &weights);
        let plain_score = score_element(&plain.select("div"), &weights);
        assert!((role_score - plain_score - weights.main_container).abs() < 1e-9);
    }

    #[test]
    fn class_tokens_add_independent_bonuses() {
        let weights = ScoreWeights::default();
        let body = long_text(100);

        let hinted = dom::parse(&format!(
            "<div class=\"prose max-w-2xl mx-auto\"><p>{body}</p></div>"
        ));
        let plain = dom::parse(&format!("<div><p>{body}</p></div>"));

        let hinted_score = score_element(&hinted.select("div"), &weights);
        let plain_score = score_element(&plain.select("div"), &weights);
        let expected = weights.prose_class + weights.max_width_class + weights.centered_class;
        assert!((hinted_score - plain_score - expected).abs() < 1e-9);
    }

    #[test]
    fn content_vocabulary_scores_per_token() {
        let weights = ScoreWeights::default();
        let body = long_text(100);

        let two_tokens = dom::parse(&format!("<div class=\"post-content\"><p>{body}</p></div>"));
        let one_token = dom::parse(&format!("<div class=\"post-wrap\"><p>{body}</p></div>"));

        let two_score = score_element(&two_tokens.select("div"), &weights);
        let one_score = score_element(&one_token.select("div"), &weights);
        assert!((two_score - one_score - weights.content_token).abs() < 1e-9);
    }

    #[test]
    fn pick_best_returns_none_without_candidates() {
        assert!(pick_best(Vec::new()).is_none());
    }

    #[test]
    fn pick_best_keeps_earliest_on_ties() {
        let body = long_text(100);
        let html = format!("<article><p>{body}</p></article><div><p>{body}</p></div>");
        let doc = dom::parse(&html);

        let mut candidates = score_candidates(&doc, GROUPS, &options());
        assert_eq!(candidates.len(), 2);

        // Force a tie: the earlier candidate (article, first selector) must win.
        for candidate in &mut candidates {
            candidate.score = 42.0;
        }
        let best = pick_best(candidates).unwrap();
        assert_eq!(dom::tag_name(&best.selection), Some("article".to_string()));
    }

    #[test]
    fn score_candidates_skips_invalid_elements() {
        let doc = dom::parse("<div>tiny</div><article><p>Some short text</p></article>");
        let candidates = score_candidates(&doc, GROUPS, &options());

        // The bare div fails the gate; the article is rescued by its <p>.
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            dom::tag_name(&candidates[0].selection),
            Some("article".to_string())
        );
    }

    #[test]
    fn score_candidates_considers_each_element_once() {
        let body = long_text(100);
        let html = format!("<article><p>{body}</p></article>");
        let doc = dom::parse(&html);

        let groups: &[SelectorGroup] = &[SelectorGroup {
            name: "dup",
            selectors: &["article", "article"],
        }];
        let candidates = score_candidates(&doc, groups, &options());
        assert_eq!(candidates.len(), 1);
    }
}
