use memchr::memchr_iter;
use tracing::debug;

use crate::{config::Thresholds, lang::PageMode, page::Page};

const ANCHOR: &str = "a";
const PARAGRAPH: &str = "p";

/// Raw (un-normalized) text to analyze for `mode`.
///
/// * Listing pages read anchor text, and only when there are enough
///   anchors; text that looks like unrendered template syntax is dropped.
/// * Content pages read paragraph text, falling back to the whole body when
///   paragraphs are too sparse.
///
/// An empty string means the page gave no usable sample.
pub fn body_sample(page: &dyn Page, mode: PageMode, t: &Thresholds) -> String {
    match mode {
        PageMode::Listing => listing_sample(page, t),
        PageMode::Content => content_sample(page, t),
    }
}

fn listing_sample(page: &dyn Page, t: &Thresholds) -> String {
    let anchors = page.select_count(ANCHOR);
    if anchors < t.min_listing_anchors {
        debug!(anchors, "too few anchors for a listing sample");
        return String::new();
    }

    let text = page.select_text(ANCHOR, anchors.min(t.max_sample_elements));
    if looks_like_template(&text, t.template_brace_limit) {
        debug!("anchor text looks like unrendered template, discarding");
        return String::new();
    }
    text
}

fn content_sample(page: &dyn Page, t: &Thresholds) -> String {
    let text = page.select_text(PARAGRAPH, t.max_sample_elements);
    let chars = text.chars().count();
    if chars < t.min_paragraph_chars {
        debug!(chars, "paragraph text too short, sampling whole body");
        return page.body_text();
    }
    text
}

#[inline]
fn looks_like_template(text: &str, limit: usize) -> bool {
    let bytes = text.as_bytes();
    memchr_iter(b'{', bytes).count() >= limit && memchr_iter(b'}', bytes).count() >= limit
}
