//! Media and link extraction from cleaned content.
//!
//! Walks the content subtree producing normalized image and link records.
//! Every reference is resolved against the document's base URL; items
//! that fail resolution are dropped and counted, never escalated — a bad
//! `href` should not sink an otherwise good extraction.

use dom_query::Selection;
use tracing::debug;
use url::Url;

use crate::dom;
use crate::patterns::normalize_whitespace;
use crate::result::{ExtractedImage, ExtractedLink};
use crate::url_utils::{is_absolute_url, resolve_reference, same_origin};

fn parse_dimension(sel: &Selection, attr: &str) -> Option<u32> {
    dom::get_attribute(sel, attr)
        .and_then(|v| v.trim().trim_end_matches("px").parse::<u32>().ok())
}

/// Extract content images, resolved to absolute URLs.
///
/// Images whose declared width and height are both at or below
/// `decorative_max` are treated as UI chrome (icons, spacers) and
/// dropped. Images lacking explicit dimensions are kept — they cannot be
/// proven decorative.
#[must_use]
pub fn extract_images(content: &Selection, base: &Url, decorative_max: u32) -> Vec<ExtractedImage> {
    let mut images = Vec::new();
    let mut dropped_decorative = 0usize;
    let mut dropped_unresolved = 0usize;

    for node in content.select("img").nodes() {
        let img = Selection::from(*node);

        let width = parse_dimension(&img, "width");
        let height = parse_dimension(&img, "height");
        if let (Some(w), Some(h)) = (width, height) {
            if w <= decorative_max && h <= decorative_max {
                dropped_decorative += 1;
                continue;
            }
        }

        let source = dom::get_attribute(&img, "src")
            .or_else(|| dom::get_attribute(&img, "data-src"))
            .unwrap_or_default();
        let Some(resolved) = resolve_reference(&source, base) else {
            dropped_unresolved += 1;
            continue;
        };

        images.push(ExtractedImage {
            source_url: resolved.to_string(),
            alt_text: dom::get_attribute(&img, "alt").unwrap_or_default(),
            width,
            height,
        });
    }

    if dropped_decorative + dropped_unresolved > 0 {
        debug!(dropped_decorative, dropped_unresolved, kept = images.len(), "image extraction");
    }
    images
}

/// Extract content links with external/internal classification.
///
/// Only navigable http(s) targets are kept: `mailto:`, `javascript:` and
/// other non-web schemes resolve fine but are not content links. Anchors
/// whose target cannot be resolved to a valid absolute URL are dropped
/// rather than propagated malformed. `is_external` compares the resolved
/// origin (scheme + host + port) to the document's own origin.
#[must_use]
pub fn extract_links(content: &Selection, base: &Url) -> Vec<ExtractedLink> {
    let mut links = Vec::new();
    let mut dropped = 0usize;

    for node in content.select("a").nodes() {
        let anchor = Selection::from(*node);
        let href = dom::get_attribute(&anchor, "href").unwrap_or_default();
        let Some(resolved) = resolve_reference(&href, base) else {
            dropped += 1;
            continue;
        };
        if !is_absolute_url(resolved.as_str()) {
            dropped += 1;
            continue;
        }

        let is_external = !same_origin(&resolved, base);
        links.push(ExtractedLink {
            target_url: resolved.to_string(),
            text: normalize_whitespace(&dom::text_content(&anchor)),
            is_external,
        });
    }

    if dropped > 0 {
        debug!(dropped, kept = links.len(), "link extraction");
    }
    links
}
