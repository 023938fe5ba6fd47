use tracing::trace;

use crate::{
    context::Context,
    lang::{
        DetectionSource, LangResult, PageMode,
        data::{JPN, ZHO},
    },
    normalize::{normalize_sample, strip_signs},
    sample::body_sample,
    script::ScriptProfile,
    stage::{Input, Stage},
    unicode::is_han,
};

/// Listing-page title check.
///
/// Listing titles are short and templated (`日本語_新華網`), so Han in the
/// title says "Chinese or Japanese" but not which. The anchor sample breaks
/// the tie: enough kana means Japanese, otherwise Chinese.
pub struct TitleStage;

impl Stage for TitleStage {
    fn name(&self) -> &'static str {
        "title"
    }

    #[inline]
    fn needs_apply(&self, input: &Input<'_>, _: &Context) -> bool {
        input.mode.is_listing()
    }

    fn detect(&self, input: &Input<'_>, ctx: &Context) -> Option<LangResult> {
        let t = &ctx.thresholds;
        let title = input.page.title()?;
        let title = strip_signs(&title);
        let han = title.chars().filter(|&c| is_han(c)).count();
        if han < t.title_min_han {
            return None;
        }

        let raw = body_sample(input.page, PageMode::Listing, t);
        let sample = normalize_sample(&raw, t.sample_char_budget);
        let profile = ScriptProfile::of(&sample);
        let kana_rate = profile.kana_rate();
        trace!(title_han = han, kana_rate, "listing title check");

        let lang = if kana_rate > t.kana_ratio { JPN } else { ZHO };
        Some(LangResult::new(lang, DetectionSource::Title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{page::HtmlPage, testing::recording_context};

    fn listing_page(title: &str, anchor: &str, count: usize) -> HtmlPage {
        let anchors = format!("<a href=\"#\">{anchor}</a>").repeat(count);
        HtmlPage::parse(&format!(
            "<html><head><title>{title}</title></head><body>{anchors}</body></html>"
        ))
    }

    #[test]
    fn only_listing_pages() {
        let page = listing_page("新华网", "新闻", 20);
        let (ctx, _) = recording_context(None);
        assert!(!TitleStage.needs_apply(&Input::new(&page, "UTF-8", PageMode::Content), &ctx));
        assert!(TitleStage.needs_apply(&Input::new(&page, "UTF-8", PageMode::Listing), &ctx));
    }

    #[test]
    fn single_han_is_not_enough() {
        let page = listing_page("新 News", "新闻", 20);
        let (ctx, _) = recording_context(None);
        let input = Input::new(&page, "UTF-8", PageMode::Listing);
        assert_eq!(TitleStage.detect(&input, &ctx), None);
    }

    #[test]
    fn kana_in_anchors_means_japanese() {
        let page = listing_page("日本語_新華網", "ニュースを読む", 20);
        let (ctx, _) = recording_context(None);
        let input = Input::new(&page, "UTF-8", PageMode::Listing);
        let res = TitleStage.detect(&input, &ctx).unwrap();
        assert_eq!(res.lang, "ja");
        assert_eq!(res.source, DetectionSource::Title);
    }

    #[test]
    fn han_anchors_mean_chinese() {
        let page = listing_page("新华网", "国内新闻报道", 20);
        let (ctx, _) = recording_context(None);
        let input = Input::new(&page, "UTF-8", PageMode::Listing);
        assert_eq!(TitleStage.detect(&input, &ctx).unwrap().lang, "zh");
    }

    #[test]
    fn sparse_anchors_default_to_chinese() {
        // no sample, kana rate 0
        let page = listing_page("日本語ニュース", "ニュース", 3);
        let (ctx, _) = recording_context(None);
        let input = Input::new(&page, "UTF-8", PageMode::Listing);
        assert_eq!(TitleStage.detect(&input, &ctx).unwrap().lang, "zh");
    }

    #[test]
    fn never_calls_the_model() {
        let page = listing_page("新华网", "한국어 뉴스", 20);
        let (ctx, detector) = recording_context(Some("ko"));
        let input = Input::new(&page, "UTF-8", PageMode::Listing);
        assert_eq!(TitleStage.detect(&input, &ctx).unwrap().lang, "zh");
        assert_eq!(detector.call_count(), 0);
    }
}
