//! Read-only view of a fetched, decoded page.
//!
//! Detection only needs a handful of queries: attributes of the root
//! element, the first match of a selector, element counts, concatenated
//! element text, body text and a representative title. [`Page`] captures
//! that surface so callers with their own DOM can plug it in; [`HtmlPage`]
//! implements it on top of `scraper`.

use scraper::{ElementRef, Html, Node, Selector, node::Element};
use tracing::warn;

/// Document capability consumed by the detection cascade.
///
/// Text-returning methods must leave out noise (scripts, styles, hidden or
/// embedded content).
pub trait Page {
    /// Attribute of the root `<html>` element.
    fn root_attr(&self, name: &str) -> Option<String>;

    /// Attribute of the first element matching `selector`.
    ///
    /// Only the first match is consulted, even if a later one carries the
    /// attribute.
    fn select_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Number of elements matching `selector`.
    fn select_count(&self, selector: &str) -> usize;

    /// Text of the first `limit` matches of `selector`, concatenated without
    /// a separator.
    fn select_text(&self, selector: &str, limit: usize) -> String;

    /// Text of the whole `<body>`.
    fn body_text(&self) -> String;

    /// A representative page title, if any.
    fn title(&self) -> Option<String>;
}

/// Elements whose text never counts as page content.
const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "object", "embed", "svg",
];

#[inline]
fn is_noise(el: &Element) -> bool {
    NOISE_TAGS.contains(&el.name()) || el.attr("hidden").is_some()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(err) => {
            warn!(selector, error = ?err, "invalid selector, treating as no match");
            None
        }
    }
}

fn push_text(el: ElementRef<'_>, out: &mut String) {
    // Explicit stack: fetched pages can nest far deeper than the call stack allows
    let mut pending: Vec<_> = el.children().rev().collect();
    while let Some(node) = pending.pop() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) if is_noise(inner) => {}
            Node::Element(_) => pending.extend(node.children().rev()),
            _ => {}
        }
    }
}

#[inline]
fn is_visible(el: &ElementRef<'_>) -> bool {
    !is_noise(el.value())
        && !el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|a| is_noise(a.value()))
}

/// [`Page`] over a `scraper` document.
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    fn visible<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(sel).filter(is_visible)
    }

    fn first_text(&self, selector: &str) -> Option<String> {
        let sel = parse_selector(selector)?;
        let el = self.visible(&sel).next()?;
        let mut text = String::new();
        push_text(el, &mut text);
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl From<Html> for HtmlPage {
    fn from(html: Html) -> Self {
        Self { html }
    }
}

impl Page for HtmlPage {
    fn root_attr(&self, name: &str) -> Option<String> {
        self.html
            .root_element()
            .value()
            .attr(name)
            .map(str::to_string)
    }

    fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = parse_selector(selector)?;
        let first = self.html.select(&sel).next()?;
        first.value().attr(attr).map(str::to_string)
    }

    fn select_count(&self, selector: &str) -> usize {
        match parse_selector(selector) {
            Some(sel) => self.visible(&sel).count(),
            None => 0,
        }
    }

    fn select_text(&self, selector: &str, limit: usize) -> String {
        let mut text = String::new();
        if let Some(sel) = parse_selector(selector) {
            for el in self.visible(&sel).take(limit) {
                push_text(el, &mut text);
            }
        }
        text
    }

    fn body_text(&self) -> String {
        self.select_text("body", 1)
    }

    /// `<title>`, then `og:title`, then the first `<h1>`.
    fn title(&self) -> Option<String> {
        if let Some(title) = self.first_text("title") {
            return Some(title);
        }
        if let Some(og) = self.select_attr("meta[property='og:title' i]", "content") {
            let og = og.trim();
            if !og.is_empty() {
                return Some(og.to_string());
            }
        }
        self.first_text("h1")
    }
}
