//! Extraction orchestration.
//!
//! Sequences strategy selection, candidate scoring, cleaning, media
//! extraction, and quality assessment as an explicit stage progression:
//!
//! `Start -> StrategySelected -> Scored -> Cleaned -> MediaExtracted ->
//! Assessed -> Done`
//!
//! with `FallbackBody` reachable from `Scored` when no candidate
//! validates, and `Errored` reachable from any stage. The orchestrator is
//! the crate's containment boundary: traversal panics are caught here and
//! surfaced through the result's `error` field, so callers always get a
//! result object back — the capture pipeline has no other recovery path
//! mid-flow.

use std::any::Any;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use dom_query::{Document, Selection};
use tracing::{debug, warn};
use url::Url;

use crate::cleaning::Cleaner;
use crate::dom;
use crate::error::Error;
use crate::media;
use crate::options::Options;
use crate::patterns::normalize_whitespace;
use crate::quality;
use crate::result::{ExtractedImage, ExtractedLink, ExtractionResult, Outcome, QualityMetrics};
use crate::scoring::{pick_best, score_candidates};
use crate::strategy::StrategyRegistry;

/// Pipeline stage, tracked so errored results can name where they failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    StrategySelected,
    Scored,
    FallbackBody,
    Cleaned,
    MediaExtracted,
    Assessed,
}

impl Stage {
    fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::StrategySelected => "strategy selection",
            Self::Scored => "candidate scoring",
            Self::FallbackBody => "body fallback",
            Self::Cleaned => "cleaning",
            Self::MediaExtracted => "media extraction",
            Self::Assessed => "quality assessment",
        }
    }
}

struct PipelineOutput {
    content_html: String,
    content_text: String,
    images: Vec<ExtractedImage>,
    links: Vec<ExtractedLink>,
    quality: QualityMetrics,
    outcome: Outcome,
}

/// Run extraction on one document. Never panics across this boundary.
pub(crate) fn run(html: &str, url: &str, options: &Options) -> ExtractionResult {
    let document = dom::parse(html);
    let title = derive_title(&document, url, options);
    let stage = Cell::new(Stage::Start);

    let outcome = catch_unwind(AssertUnwindSafe(|| pipeline(&document, url, options, &stage)));

    match outcome {
        Ok(output) => ExtractionResult {
            title,
            url: url.to_string(),
            extracted_at: Utc::now(),
            content_html: output.content_html,
            content_text: output.content_text,
            images: output.images,
            links: output.links,
            quality: output.quality,
            outcome: output.outcome,
            error: None,
        },
        Err(payload) => {
            let error = Error::Traversal {
                stage: stage.get().name(),
                message: panic_message(payload.as_ref()),
            };
            warn!(%error, "extraction degraded to whole-document text");
            errored_result(title, url, error, whole_document_text(&document))
        }
    }
}

/// Race extraction against a deadline on a worker thread.
///
/// The host environment offers no preemption primitive, so a timeout is a
/// race on the result, not a hard abort: the worker keeps running and its
/// answer is discarded.
pub(crate) fn run_with_deadline(
    html: &str,
    url: &str,
    options: &Options,
    deadline: Duration,
) -> ExtractionResult {
    let (tx, rx) = mpsc::channel();
    let html = html.to_string();
    let url_owned = url.to_string();
    let supplied_title = options.page_title.clone();
    let worker_options = options.clone();

    thread::spawn(move || {
        let _ = tx.send(run(&html, &url_owned, &worker_options));
    });

    match rx.recv_timeout(deadline) {
        Ok(result) => result,
        Err(_) => {
            let error = Error::Timeout(deadline);
            warn!(%error, "extraction result discarded");
            errored_result(
                cheap_title(url, supplied_title.as_deref()),
                url,
                error,
                String::new(),
            )
        }
    }
}

fn pipeline(
    document: &Document,
    url: &str,
    options: &Options,
    stage: &Cell<Stage>,
) -> PipelineOutput {
    // The cell names the stage in progress, so a contained panic can
    // report where the pipeline was when it failed.
    stage.set(Stage::StrategySelected);
    let registry = StrategyRegistry::standard();
    let strategy = registry.select(url, document);
    debug!(strategy = strategy.name, "strategy selected");

    let base_url = Url::parse(url).ok();
    if base_url.is_none() {
        warn!(url, "base URL did not parse; media and links will be empty");
    }

    stage.set(Stage::Scored);
    let candidates = score_candidates(document, strategy.groups, options);
    debug!(candidates = candidates.len(), "candidates scored");

    let Some(best) = pick_best(candidates) else {
        stage.set(Stage::FallbackBody);
        debug!("no valid candidate; synthesizing from whole body");
        return fallback_body(document, base_url.as_ref(), options);
    };
    debug!(score = best.score, "best candidate picked");

    stage.set(Stage::Cleaned);
    // The engine only mutates its own clone, never the caller's tree.
    let working = dom::clone_subtree(&best.selection);
    Cleaner::new(options.cleaner.clone()).clean(&working);
    let content = working.select("body");

    stage.set(Stage::MediaExtracted);
    let (images, links) = extract_media(&content, base_url.as_ref(), options);

    stage.set(Stage::Assessed);
    let quality = quality::assess(&content);

    PipelineOutput {
        content_html: dom::inner_html(&content).trim().to_string(),
        content_text: normalize_whitespace(&dom::text_content(&content)),
        images,
        links,
        quality,
        outcome: Outcome::Full,
    }
}

/// Degraded path: no cleaning, no scoring — whole-body text plus media
/// and quality over the raw body subtree. Low confidence, but still a
/// well-formed result.
fn fallback_body(
    document: &Document,
    base_url: Option<&Url>,
    options: &Options,
) -> PipelineOutput {
    let body = document.select("body");
    let (images, links) = extract_media(&body, base_url, options);

    PipelineOutput {
        content_html: dom::inner_html(&body).trim().to_string(),
        content_text: normalize_whitespace(&dom::text_content(&body)),
        images,
        links,
        quality: quality::assess(&body),
        outcome: Outcome::FallbackBody,
    }
}

fn extract_media(
    content: &Selection,
    base_url: Option<&Url>,
    options: &Options,
) -> (Vec<ExtractedImage>, Vec<ExtractedLink>) {
    match base_url {
        Some(base) => (
            media::extract_images(content, base, options.decorative_max_dimension),
            media::extract_links(content, base),
        ),
        None => (Vec::new(), Vec::new()),
    }
}

fn errored_result(
    title: String,
    url: &str,
    error: Error,
    best_effort_text: String,
) -> ExtractionResult {
    ExtractionResult {
        title,
        url: url.to_string(),
        extracted_at: Utc::now(),
        content_html: String::new(),
        content_text: best_effort_text,
        images: Vec::new(),
        links: Vec::new(),
        quality: QualityMetrics::default(),
        outcome: Outcome::Errored,
        error: Some(error.to_string()),
    }
}

/// Derive a non-empty title: caller-supplied, `<title>`, first `<h1>`,
/// URL host, the URL itself, then a literal placeholder.
fn derive_title(document: &Document, url: &str, options: &Options) -> String {
    if let Some(title) = options.page_title.as_deref() {
        let title = title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
    }
    for selector in ["head title", "h1"] {
        let text = normalize_whitespace(&dom::text_content(&document.select(selector)));
        if !text.is_empty() {
            return text;
        }
    }
    cheap_title(url, None)
}

/// Title fallback that never touches the tree, usable on the timeout path.
fn cheap_title(url: &str, supplied: Option<&str>) -> String {
    if let Some(title) = supplied {
        let title = title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
    }
    if let Some(host) = crate::url_utils::host_of(url) {
        return host;
    }
    let url = url.trim();
    if url.is_empty() {
        "untitled".to_string()
    } else {
        url.to_string()
    }
}

fn whole_document_text(document: &Document) -> String {
    normalize_whitespace(&dom::text_content(&document.select("body")))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic during tree traversal".to_string()
    }
}
