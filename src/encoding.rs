//! Character encoding detection and transcoding.
//!
//! Capture pipelines hand over raw bytes; this module sniffs the charset
//! declaration from meta tags and converts to UTF-8 before parsing,
//! replacing invalid sequences with the Unicode replacement character
//! rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the character encoding declared in the first 1 KiB of the page.
///
/// Falls back to UTF-8, the standard web default, when no declaration is
/// found or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&*META_CHARSET, &*HTTP_EQUIV_CHARSET] {
        if let Some(label) = pattern.captures(&head_str).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string, lossily.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
