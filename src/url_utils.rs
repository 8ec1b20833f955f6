//! URL utilities for validation, resolution, and origin comparison.
//!
//! Media and link extraction resolve every reference against the
//! document's base URL; references that cannot be made absolute are
//! dropped by the callers rather than propagated in malformed form.

use url::Url;

/// Check whether a string is already a valid absolute http(s) URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    matches!(Url::parse(s), Ok(url) if url.host().is_some())
}

/// Resolve a possibly-relative reference against a base URL.
///
/// Returns `None` when the reference is empty or cannot be resolved to a
/// valid URL; callers treat that as a per-item resolution failure.
#[must_use]
pub fn resolve_reference(reference: &str, base: &Url) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    base.join(reference).ok()
}

/// Whether `target` shares the document origin (scheme + host + port).
#[must_use]
pub fn same_origin(target: &Url, base: &Url) -> bool {
    target.origin() == base.origin()
}

/// Extract the host from a URL string, for title fallbacks.
#[must_use]
pub fn host_of(url_str: &str) -> Option<String> {
    Url::parse(url_str.trim())
        .ok()
        .and_then(|url| url.host_str().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_requires_scheme_and_host() {
        assert!(is_absolute_url("https://example.com/a"));
        assert!(is_absolute_url("http://example.com"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("ftp://example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn resolve_relative_against_base() {
        let base = Url::parse("https://example.com/a/b").unwrap();

        let resolved = resolve_reference("/c", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/c");

        let nested = resolve_reference("c", &base).unwrap();
        assert_eq!(nested.as_str(), "https://example.com/a/c");
    }

    #[test]
    fn resolve_keeps_absolute_urls() {
        let base = Url::parse("https://example.com/a/b").unwrap();
        let resolved = resolve_reference("https://other.com/d", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://other.com/d");
    }

    #[test]
    fn resolve_rejects_empty_reference() {
        let base = Url::parse("https://example.com/").unwrap();
        assert!(resolve_reference("", &base).is_none());
        assert!(resolve_reference("   ", &base).is_none());
    }

    #[test]
    fn same_origin_compares_scheme_host_port() {
        let base = Url::parse("https://example.com/a").unwrap();

        let same = Url::parse("https://example.com/other").unwrap();
        assert!(same_origin(&same, &base));

        let other_host = Url::parse("https://other.com/a").unwrap();
        assert!(!same_origin(&other_host, &base));

        let other_scheme = Url::parse("http://example.com/a").unwrap();
        assert!(!same_origin(&other_scheme, &base));

        let other_port = Url::parse("https://example.com:8443/a").unwrap();
        assert!(!same_origin(&other_port, &base));
    }

    #[test]
    fn host_of_extracts_hostname() {
        assert_eq!(host_of("https://example.com/a/b"), Some("example.com".to_string()));
        assert_eq!(host_of("not a url"), None);
    }
}
