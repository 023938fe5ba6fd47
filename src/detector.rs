use crate::{
    config::{ConfigError, Thresholds},
    context::Context,
    lang::{LangResult, PageMode},
    page::{HtmlPage, Page},
    pipeline::Pipeline,
    stage::Input,
    statistical::StatisticalDetector,
};
use std::sync::Arc;

/// Language detector for fetched pages.
///
/// Holds only read-only state, so one instance can serve any number of
/// threads.
pub struct LangDetector {
    ctx: Context,
    pipeline: Pipeline,
}

impl LangDetector {
    pub fn builder() -> LangDetectorBuilder {
        LangDetectorBuilder::default()
    }

    /// Detect the language of `page`.
    ///
    /// `charset` is the resolved encoding label (may be empty). `None` means
    /// the language is unknown.
    pub fn detect(&self, page: &dyn Page, charset: &str, mode: PageMode) -> Option<LangResult> {
        let input = Input::new(page, charset, mode);
        self.pipeline.process(&input, &self.ctx)
    }

    /// Parse `html` with [`HtmlPage`] and detect.
    pub fn detect_html(&self, html: &str, charset: &str, mode: PageMode) -> Option<LangResult> {
        self.detect(&HtmlPage::parse(html), charset, mode)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.ctx.thresholds
    }
}

impl Default for LangDetector {
    fn default() -> Self {
        Self {
            ctx: Context::new(Thresholds::default(), default_statistical()),
            pipeline: Pipeline::default(),
        }
    }
}

#[cfg(feature = "lingua")]
fn default_statistical() -> Arc<dyn StatisticalDetector> {
    Arc::new(crate::statistical::LinguaDetector::new())
}

#[cfg(not(feature = "lingua"))]
fn default_statistical() -> Arc<dyn StatisticalDetector> {
    Arc::new(crate::statistical::NoStatistical)
}

#[derive(Default)]
pub struct LangDetectorBuilder {
    thresholds: Thresholds,
    statistical: Option<Arc<dyn StatisticalDetector>>,
}

impl LangDetectorBuilder {
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the statistical model. Defaults to `lingua` when the feature is
    /// enabled.
    pub fn statistical<T: StatisticalDetector + 'static>(mut self, detector: T) -> Self {
        self.statistical = Some(Arc::new(detector));
        self
    }

    /// Share an existing model instance.
    pub fn shared_statistical(mut self, detector: Arc<dyn StatisticalDetector>) -> Self {
        self.statistical = Some(detector);
        self
    }

    pub fn build(self) -> Result<LangDetector, ConfigError> {
        self.thresholds.validate()?;
        let statistical = self.statistical.unwrap_or_else(default_statistical);
        Ok(LangDetector {
            ctx: Context::new(self.thresholds, statistical),
            pipeline: Pipeline::default(),
        })
    }
}
