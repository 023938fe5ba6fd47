use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    context::Context,
    lang::{DetectionSource, LangCode, LangResult},
    page::Page,
    stage::{Input, Stage},
};

/// Meta tags that declare a language, in priority order.
pub const META_LANG_SELECTORS: &[&str] = &[
    "meta[http-equiv='content-language' i]",
    "meta[name='lang' i]",
];

// A bare two-letter code, or one followed by an alphabetic subtag.
static DECLARED_LANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)([a-z]{2}|[a-z]{2}-[a-z]+)$").expect("declared-language pattern is valid")
});

/// First valid language declaration of the page: root `lang`, root
/// `xml:lang`, then each of [`META_LANG_SELECTORS`].
///
/// Malformed values are skipped. The result may be `en`.
pub fn declared_lang(page: &dyn Page) -> Option<LangCode> {
    let root = ["lang", "xml:lang"].into_iter().map(|a| page.root_attr(a));
    let meta = META_LANG_SELECTORS
        .iter()
        .map(|sel| page.select_attr(sel, "content"));

    root.chain(meta).flatten().find_map(|value| {
        let value = value.trim();
        if DECLARED_LANG.is_match(value) {
            LangCode::parse(value)
        } else {
            None
        }
    })
}

/// Explicit markup declarations, trusted unless they say `en`.
///
/// `en` is the default most templates ship with, so it is left for the body
/// analysis to confirm.
pub struct MarkupStage;

impl Stage for MarkupStage {
    fn name(&self) -> &'static str {
        "markup"
    }

    #[inline]
    fn needs_apply(&self, _: &Input<'_>, _: &Context) -> bool {
        true
    }

    fn detect(&self, input: &Input<'_>, _: &Context) -> Option<LangResult> {
        declared_lang(input.page)
            .filter(|code| *code != "en")
            .map(|code| LangResult::new(code, DetectionSource::Markup))
    }
}
