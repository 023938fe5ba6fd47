mod prop_tests {
    use crate::{
        DetectionSource, HtmlPage, LangDetector, PageMode, normalize::normalize_sample,
        script::ScriptProfile, testing::RecordingDetector, unicode::is_sign,
    };
    use proptest::prelude::*;

    fn fixed_detector() -> LangDetector {
        LangDetector::builder()
            .statistical(RecordingDetector::answering(Some("ru")))
            .build()
            .unwrap()
    }

    fn page_with(text: &str, listing: bool) -> HtmlPage {
        let body = if listing {
            text.split(' ').map(|w| format!("<a>{w}</a>")).collect::<String>()
        } else {
            format!("<p>{text}</p>")
        };
        HtmlPage::parse(&format!("<html><head><title>{text}</title></head><body>{body}</body></html>"))
    }

    proptest! {
        #[test]
        fn normalized_sample_invariants(s in "\\PC{0,3000}") {
            let out = normalize_sample(&s, 2048);
            prop_assert!(out.chars().count() <= 2048);
            prop_assert!(!out.chars().any(is_sign));
            prop_assert!(!out.contains(['\n', '\r', '\t']));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn normalize_is_idempotent_on_short_text(s in "[a-z 中あ,.!\\n\\t]{0,200}") {
            let once = normalize_sample(&s, 2048);
            let twice = normalize_sample(&once, 2048);
            // a removed sign can leave a new pair of spaces behind
            prop_assume!(!once.contains("  "));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rates_stay_in_unit_interval(s in "\\PC{0,500}") {
            let p = ScriptProfile::of(&s);
            for rate in [p.han_rate(), p.latin_rate(), p.kana_rate()] {
                prop_assert!((0.0..=1.0).contains(&rate));
            }
            prop_assert!(p.han + p.kana + p.latin + p.latin_extended <= p.total);
        }

        #[test]
        fn detection_is_deterministic(
            s in "[a-zA-Z一-龥ぁ-んア-ン가-힣 ]{0,300}",
            listing in any::<bool>(),
        ) {
            let detector = fixed_detector();
            let page = page_with(&s, listing);
            let mode = PageMode::from(listing);
            let first = detector.detect(&page, "UTF-8", mode);
            let second = detector.detect(&page, "UTF-8", mode);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn gbk_always_means_chinese(
            s in "[a-zA-Z一-龥ぁ-ん가-힣 ]{0,300}",
            listing in any::<bool>(),
        ) {
            let detector = fixed_detector();
            let page = page_with(&s, listing);
            let res = detector.detect(&page, "GBK", PageMode::from(listing)).unwrap();
            prop_assert_eq!(res.lang, "zh");
            prop_assert_eq!(res.source, DetectionSource::Charset);
        }
    }
}
