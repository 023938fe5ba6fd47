use crate::{
    context::Context,
    lang::{DetectionSource, LangResult, data::from_charset},
    stage::{Input, Stage},
};

/// Legacy charsets used by a single script decide immediately.
pub struct CharsetStage;

impl Stage for CharsetStage {
    fn name(&self) -> &'static str {
        "charset"
    }

    #[inline]
    fn needs_apply(&self, input: &Input<'_>, _: &Context) -> bool {
        !input.charset.is_empty()
    }

    fn detect(&self, input: &Input<'_>, _: &Context) -> Option<LangResult> {
        from_charset(input.charset).map(|lang| LangResult::new(lang, DetectionSource::Charset))
    }
}
