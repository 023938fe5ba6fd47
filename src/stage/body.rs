use tracing::{debug, trace};

use crate::{
    context::Context,
    lang::{
        DetectionSource, LangResult,
        data::{ENG, JPN, ZHO},
    },
    normalize::normalize_sample,
    sample::body_sample,
    script::ScriptProfile,
    stage::{Input, Stage},
    statistical::CandidateSet,
};

/// Body-text statistics for UTF pages whose markup is missing or says `en`.
pub struct BodyStage;

impl Stage for BodyStage {
    fn name(&self) -> &'static str {
        "body"
    }

    #[inline]
    fn needs_apply(&self, input: &Input<'_>, _: &Context) -> bool {
        input.charset.starts_with("UTF")
    }

    fn detect(&self, input: &Input<'_>, ctx: &Context) -> Option<LangResult> {
        let t = &ctx.thresholds;
        let raw = body_sample(input.page, input.mode, t);
        let sample = normalize_sample(&raw, t.sample_char_budget);
        classify_sample(&sample, ctx)
    }
}

/// Classify a normalized sample.
///
/// 1. Han-dominant (share ≥ `han_dominance`): Japanese when kana per Han
///    exceeds `kana_ratio`, else Chinese.
/// 2. Latin-dominant (share > `latin_dominance`): with more than
///    `latin_extended_gate` Latin-1 characters the Latin model decides,
///    otherwise English.
/// 3. Anything else goes to the non-Latin model.
pub fn classify_sample(sample: &str, ctx: &Context) -> Option<LangResult> {
    if sample.is_empty() {
        debug!("empty body sample");
        return None;
    }

    let t = &ctx.thresholds;
    let profile = ScriptProfile::of(sample);
    trace!(?profile, "body sample profile");

    if profile.han_rate() >= t.han_dominance {
        let lang = if profile.kana_per_han() > t.kana_ratio {
            JPN
        } else {
            ZHO
        };
        return Some(LangResult::new(lang, DetectionSource::BodyRatio));
    }

    let candidates = if profile.latin_rate() > t.latin_dominance {
        if profile.latin_extended <= t.latin_extended_gate {
            return Some(LangResult::new(ENG, DetectionSource::BodyRatio));
        }
        CandidateSet::Latin
    } else {
        CandidateSet::NonLatin
    };

    ctx.statistical
        .classify(sample, candidates)
        .map(|code| LangResult::new(code, DetectionSource::Statistical))
}
