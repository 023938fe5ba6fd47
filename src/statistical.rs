//! Hand-off to a statistical language model for scripts the ratio checks
//! cannot settle.

use crate::lang::{
    Lang, LangCode,
    data::{ARA, DEU, ENG, FRA, HIN, KOR, POR, RUS, SPA},
};

/// Restricted candidate groups the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSet {
    /// Neither Han- nor Latin-dominant text.
    NonLatin,
    /// Latin text with accented letters.
    Latin,
}

static NON_LATIN: &[Lang] = &[ARA, RUS, HIN, KOR];
static LATIN: &[Lang] = &[FRA, DEU, SPA, POR, ENG];

impl CandidateSet {
    #[inline]
    pub fn langs(self) -> &'static [Lang] {
        match self {
            Self::NonLatin => NON_LATIN,
            Self::Latin => LATIN,
        }
    }
}

/// A statistical detector restricted to a [`CandidateSet`].
///
/// Returns `None` when the model has no confident answer. Implementations are
/// shared across threads and must not need `&mut self`.
pub trait StatisticalDetector: Send + Sync {
    fn classify(&self, sample: &str, candidates: CandidateSet) -> Option<LangCode>;
}

/// Never confident. Used when no model is compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatistical;

impl StatisticalDetector for NoStatistical {
    #[inline]
    fn classify(&self, _sample: &str, _candidates: CandidateSet) -> Option<LangCode> {
        None
    }
}

#[cfg(feature = "lingua")]
pub use self::lingua_backend::LinguaDetector;

#[cfg(feature = "lingua")]
mod lingua_backend {
    use super::{CandidateSet, StatisticalDetector};
    use crate::lang::{Lang, LangCode};

    use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
    use once_cell::sync::OnceCell;
    use smallvec::SmallVec;
    use tracing::debug;

    /// `lingua` models, one detector per candidate group.
    ///
    /// Each detector is built on first use and then shared read-only; loading
    /// the per-language models is the only expensive step.
    #[derive(Default)]
    pub struct LinguaDetector {
        non_latin: OnceCell<LanguageDetector>,
        latin: OnceCell<LanguageDetector>,
    }

    impl LinguaDetector {
        pub fn new() -> Self {
            Self::default()
        }

        fn detector(&self, candidates: CandidateSet) -> &LanguageDetector {
            let cell = match candidates {
                CandidateSet::NonLatin => &self.non_latin,
                CandidateSet::Latin => &self.latin,
            };
            cell.get_or_init(|| {
                let languages: SmallVec<[Language; 5]> = candidates
                    .langs()
                    .iter()
                    .filter_map(|&lang| to_lingua(lang))
                    .collect();
                debug!(?candidates, count = languages.len(), "building lingua detector");
                LanguageDetectorBuilder::from_languages(&languages).build()
            })
        }
    }

    impl StatisticalDetector for LinguaDetector {
        fn classify(&self, sample: &str, candidates: CandidateSet) -> Option<LangCode> {
            if sample.trim().is_empty() {
                return None;
            }
            let language = self.detector(candidates).detect_language_of(sample)?;
            LangCode::parse(&language.iso_code_639_1().to_string())
        }
    }

    fn to_lingua(lang: Lang) -> Option<Language> {
        let language = match lang.code() {
            "ar" => Language::Arabic,
            "ru" => Language::Russian,
            "hi" => Language::Hindi,
            "ko" => Language::Korean,
            "fr" => Language::French,
            "de" => Language::German,
            "es" => Language::Spanish,
            "pt" => Language::Portuguese,
            "en" => Language::English,
            _ => return None,
        };
        Some(language)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_groups() {
        let codes = |set: CandidateSet| set.langs().iter().map(|l| l.code()).collect::<Vec<_>>();
        assert_eq!(codes(CandidateSet::NonLatin), ["ar", "ru", "hi", "ko"]);
        assert_eq!(codes(CandidateSet::Latin), ["fr", "de", "es", "pt", "en"]);
    }

    #[test]
    fn no_statistical_is_never_confident() {
        assert_eq!(NoStatistical.classify("anything", CandidateSet::Latin), None);
    }
}
