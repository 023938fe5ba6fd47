//! Natural-language detection for fetched web pages.
//!
//! Signals are consulted in a fixed confidence order and the first one that
//! answers wins:
//!
//! 1. a legacy charset used by a single script (`GBK`, `SHIFT_JIS`, …),
//! 2. on listing pages, a Han-bearing title checked against anchor text,
//! 3. a markup declaration other than the default `en`,
//! 4. for UTF pages, Han / Latin ratios over a body sample, with a
//!    statistical model for ambiguous scripts.
//!
//! ```no_run
//! use pagelang::{PageMode, detect_html};
//!
//! let html = r#"<html lang="ja"><body><p>こんにちは</p></body></html>"#;
//! let result = detect_html(html, "UTF-8", PageMode::Content);
//! assert_eq!(result.map(|r| r.lang.to_string()), Some("ja".to_string()));
//! ```

pub mod config;
pub mod context;
pub mod detector;
pub mod lang;
pub mod normalize;
pub mod page;
pub mod pipeline;
pub mod sample;
pub mod script;
pub mod stage;
pub mod statistical;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, Thresholds};
pub use detector::{LangDetector, LangDetectorBuilder};
pub use lang::data::{
    ARA, DEU, ENG, FRA, HIN, ITA, JPN, KOR, MYA, POR, RUS, SPA, THA, VIE, ZHO, all_langs,
};
pub use lang::{DetectionSource, Lang, LangCode, LangResult, PageMode};
pub use page::{HtmlPage, Page};
pub use statistical::{CandidateSet, NoStatistical, StatisticalDetector};

#[cfg(feature = "lingua")]
pub use statistical::LinguaDetector;

use once_cell::sync::Lazy;

static DEFAULT_DETECTOR: Lazy<LangDetector> = Lazy::new(LangDetector::default);

/// Detect with the process-wide default detector.
pub fn detect(page: &dyn Page, charset: &str, mode: PageMode) -> Option<LangResult> {
    DEFAULT_DETECTOR.detect(page, charset, mode)
}

/// Parse `html` and detect with the process-wide default detector.
pub fn detect_html(html: &str, charset: &str, mode: PageMode) -> Option<LangResult> {
    DEFAULT_DETECTOR.detect_html(html, charset, mode)
}
