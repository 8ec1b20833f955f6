//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate covering the handful of
//! operations the extraction pipeline needs. Keeping them in one place
//! pins down the API surface the engine depends on and gives the rest of
//! the crate consistent names for attribute, text, and clone operations.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril so callers can hold zero-copy text slices
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get element class attribute, empty string when absent.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> String {
    get_attribute(sel, "class").unwrap_or_default()
}

/// Remove an attribute.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs.
///
/// Returns an empty vector for attribute-less nodes and empty selections.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril`; use `.to_string()` only when owned storage is
/// needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Detach elements from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Deep-clone an element into a standalone document.
///
/// The engine never mutates the host tree; every transforming pass works
/// on a clone produced here. The clone lands under the new document's
/// `<body>`.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    Document::from(outer_html(sel).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_read_attributes() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(tag_name(&div), Some("div".to_string()));
        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(class_name(&div), "container");
        assert_eq!(class_name(&doc.select("body")), "");
    }

    #[test]
    fn get_all_attributes_lists_pairs() {
        let doc = parse(r#"<a href="/x" class="link" title="T">Link</a>"#);
        let attrs = get_all_attributes(&doc.select("a"));

        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "href" && v == "/x"));
        assert!(attrs.iter().any(|(k, v)| k == "title" && v == "T"));
    }

    #[test]
    fn remove_detaches_subtree() {
        let doc = parse(r#"<div><span class="ad">ad</span><p>content</p></div>"#);
        remove(&doc.select(".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn clone_subtree_is_independent() {
        let doc = parse(r#"<article id="a"><p>text</p></article>"#);
        let clone = clone_subtree(&doc.select("article"));

        clone.select("p").remove();

        assert!(clone.select("p").is_empty());
        assert!(doc.select("p").exists(), "original tree must stay intact");
    }

    #[test]
    fn text_and_html_content() {
        let doc = parse(r#"<div>text <span>nested</span> more</div>"#);
        let div = doc.select("div");

        assert_eq!(text_content(&div), "text nested more".into());
        assert!(inner_html(&div).contains("<span>"));
        assert!(outer_html(&div).contains("<div>"));
    }

    #[test]
    fn operations_on_empty_selection_are_noops() {
        let doc = parse("<div>content</div>");
        let empty = doc.select("span");

        remove(&empty);
        remove_attribute(&empty, "id");

        assert_eq!(text_content(&empty), "".into());
        assert!(get_all_attributes(&empty).is_empty());
    }
}
