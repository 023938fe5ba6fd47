// src/pipeline.rs
use crate::{
    context::Context,
    lang::LangResult,
    stage::{BodyStage, CharsetStage, Input, MarkupStage, Stage, TitleStage},
};
use std::sync::Arc;
use tracing::debug;

/// Ordered cascade: the first stage that answers wins.
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Default for Pipeline {
    /// charset > listing title > non-`en` markup > body statistics.
    fn default() -> Self {
        let stages: Vec<Arc<dyn Stage>> = vec![
            Arc::new(CharsetStage),
            Arc::new(TitleStage),
            Arc::new(MarkupStage),
            Arc::new(BodyStage),
        ];
        Self::new(stages)
    }
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process(&self, input: &Input<'_>, ctx: &Context) -> Option<LangResult> {
        for stage in &self.stages {
            // Fast path: skip stages whose gate is closed
            if !stage.needs_apply(input, ctx) {
                continue;
            }

            if let Some(result) = stage.detect(input, ctx) {
                debug!(
                    stage = stage.name(),
                    lang = %result.lang,
                    source = %result.source,
                    "language detected"
                );
                return Some(result);
            }
        }

        debug!(charset = input.charset, mode = ?input.mode, "language undetermined");
        None
    }
}
