//! Selector strategy registry.
//!
//! A strategy pairs an applicability probe (URL pattern or structural
//! check) with a ranked list of named selector groups. Strategies form a
//! closed list evaluated in registration order; the generic fallback is
//! held separately and consulted last, which makes [`StrategyRegistry::select`]
//! total — it always returns a strategy, for any page.
//!
//! Strategies are pure data plus a predicate; none of them mutates the
//! tree.

use dom_query::Document;

/// A named, ordered list of CSS selectors.
///
/// Order within a group is a priority order: among candidates with equal
/// scores, the one found by the earlier selector wins.
#[derive(Debug, Clone, Copy)]
pub struct SelectorGroup {
    /// Human-readable group name, used in trace output.
    pub name: &'static str,

    /// Selectors in priority order.
    pub selectors: &'static [&'static str],
}

/// Applicability probe for a strategy.
///
/// A closed set of variants rather than open-ended predicates: this keeps
/// strategy selection enumerable and testable.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// Applicable when the document URL contains any of these fragments.
    UrlContains(&'static [&'static str]),

    /// Applicable when the tree contains a match for this selector.
    HasElement(&'static str),

    /// Always applicable; reserved for the generic fallback.
    Always,
}

/// A named rule set describing how to locate candidates for a class of
/// page layouts.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    /// Strategy name, used in trace output.
    pub name: &'static str,

    /// Applicability probe.
    pub probe: Probe,

    /// Selector groups in priority order.
    pub groups: &'static [SelectorGroup],
}

impl Strategy {
    /// Whether this strategy applies to the given URL and tree.
    #[must_use]
    pub fn is_applicable(&self, url: &str, doc: &Document) -> bool {
        match self.probe {
            Probe::UrlContains(fragments) => {
                let url = url.to_ascii_lowercase();
                fragments.iter().any(|f| url.contains(f))
            }
            Probe::HasElement(selector) => doc.select(selector).exists(),
            Probe::Always => true,
        }
    }
}

/// Documentation sites: recognized by URL shape, content lives in a
/// rendered-markdown container.
const DOCUMENTATION_SITE: Strategy = Strategy {
    name: "documentation-site",
    probe: Probe::UrlContains(&["/docs/", "/documentation/", "docs.", "/manual/", "/guide/"]),
    groups: &[SelectorGroup {
        name: "documentation-body",
        selectors: &[
            ".markdown-body",
            ".docs-content",
            "[class*='doc-content']",
            "main article",
            "main",
        ],
    }],
};

/// Pages using semantic article markup.
const SEMANTIC_ARTICLE: Strategy = Strategy {
    name: "semantic-article",
    probe: Probe::HasElement("article, [role='article']"),
    groups: &[
        SelectorGroup {
            name: "article-body",
            selectors: &[
                "article [itemprop='articleBody']",
                "[itemprop='articleBody']",
                "article .post-content",
                "article .entry-content",
            ],
        },
        SelectorGroup {
            name: "article-root",
            selectors: &["article", "[role='article']"],
        },
    ],
};

/// Modern app shells (Next.js/React-style roots) and semantic `<main>`.
const MODERN_APP_LAYOUT: Strategy = Strategy {
    name: "modern-app-layout",
    probe: Probe::HasElement("main, [role='main'], #__next, #root"),
    groups: &[
        SelectorGroup {
            name: "main-regions",
            selectors: &["main [class*='content']", "main article", "main", "[role='main']"],
        },
        SelectorGroup {
            name: "app-shell",
            selectors: &["#__next main", "#root main", "#__next", "#root"],
        },
    ],
};

/// Catch-all strategy, applicable to every page. Deliberately does not
/// include `body` in its groups: when even these markers find nothing,
/// the orchestrator takes the whole-body fallback path instead.
const GENERIC_FALLBACK: Strategy = Strategy {
    name: "generic-fallback",
    probe: Probe::Always,
    groups: &[
        SelectorGroup {
            name: "content-markers",
            selectors: &[
                "#content",
                ".content",
                "#main-content",
                ".main-content",
                ".post",
                ".entry",
                "#main",
            ],
        },
        SelectorGroup {
            name: "prose-blocks",
            selectors: &["[class*='prose']", "[class*='article']"],
        },
    ],
};

/// Ordered strategy list with a mandatory catch-all.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: Vec<Strategy>,
    fallback: Strategy,
}

impl StrategyRegistry {
    /// Build a registry from an ordered strategy list. The generic
    /// fallback is appended implicitly and always consulted last.
    #[must_use]
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies,
            fallback: GENERIC_FALLBACK,
        }
    }

    /// The standard registry: documentation sites first (URL is the most
    /// specific signal), then semantic article markup, then app shells.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![DOCUMENTATION_SITE, SEMANTIC_ARTICLE, MODERN_APP_LAYOUT])
    }

    /// Pick the first applicable strategy in registration order.
    ///
    /// Total: the catch-all fallback guarantees a result for every input.
    #[must_use]
    pub fn select(&self, url: &str, doc: &Document) -> &Strategy {
        self.strategies
            .iter()
            .find(|s| s.is_applicable(url, doc))
            .unwrap_or(&self.fallback)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn select_prefers_url_probe_for_docs_pages() {
        let doc = dom::parse("<html><body><article><p>x</p></article></body></html>");
        let registry = StrategyRegistry::standard();

        let strategy = registry.select("https://docs.example.com/docs/intro", &doc);
        assert_eq!(strategy.name, "documentation-site");
    }

    #[test]
    fn select_uses_structural_probe_for_article_markup() {
        let doc = dom::parse("<html><body><article><p>x</p></article></body></html>");
        let registry = StrategyRegistry::standard();

        let strategy = registry.select("https://example.com/post/1", &doc);
        assert_eq!(strategy.name, "semantic-article");
    }

    #[test]
    fn select_detects_app_shell_roots() {
        let doc = dom::parse(r#"<html><body><div id="__next"><main>x</main></div></body></html>"#);
        let registry = StrategyRegistry::standard();

        let strategy = registry.select("https://example.com/", &doc);
        assert_eq!(strategy.name, "modern-app-layout");
    }

    #[test]
    fn select_is_total_via_fallback() {
        let doc = dom::parse("<html><body><span>bare text</span></body></html>");
        let registry = StrategyRegistry::standard();

        let strategy = registry.select("https://example.com/", &doc);
        assert_eq!(strategy.name, "generic-fallback");
        assert!(matches!(strategy.probe, Probe::Always));
    }

    #[test]
    fn empty_registry_still_selects_fallback() {
        let doc = dom::parse("<html><body></body></html>");
        let registry = StrategyRegistry::new(Vec::new());

        assert_eq!(registry.select("", &doc).name, "generic-fallback");
    }

    #[test]
    fn url_probe_is_case_insensitive() {
        let doc = dom::parse("<html><body></body></html>");
        let strategy = DOCUMENTATION_SITE;
        assert!(strategy.is_applicable("https://example.com/DOCS/setup", &doc));
        assert!(!strategy.is_applicable("https://example.com/blog/1", &doc));
    }
}
