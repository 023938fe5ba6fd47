use crate::lang::Lang;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates constants and lookup tables from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $ident:ident, $code:literal, $name:literal, $key:literal, $name_zh:literal
    );* $(;)?) => {
        $(
            pub const $ident: Lang = Lang { code: $code, name: $name, name_zh: $name_zh };
        )*

        /// Two-letter code → language.
        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $code => $ident, )*
        };

        /// Lower-case English name → language.
        pub static NAME_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $key => $ident, )*
        };

        /// Chinese display name → language.
        pub static NAME_ZH_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $name_zh => $ident, )*
        };

        static ALL_LANGS: &[Lang] = &[$($ident),*];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
// ---------------------------------------------------------------------------
define_languages! {
    ZHO, "zh", "Chinese",    "chinese",    "中文";
    ENG, "en", "English",    "english",    "英语";
    JPN, "ja", "Japanese",   "japanese",   "日语";
    RUS, "ru", "Russian",    "russian",    "俄语";
    KOR, "ko", "Korean",     "korean",     "韩语";
    ARA, "ar", "Arabic",     "arabic",     "阿拉伯语";
    HIN, "hi", "Hindi",      "hindi",      "印地语";
    DEU, "de", "German",     "german",     "德语";
    FRA, "fr", "French",     "french",     "法语";
    SPA, "es", "Spanish",    "spanish",    "西班牙语";
    POR, "pt", "Portuguese", "portuguese", "葡萄牙语";
    ITA, "it", "Italian",    "italian",    "意大利语";
    THA, "th", "Thai",       "thai",       "泰语";
    VIE, "vi", "Vietnamese", "vietnamese", "越南语";
    MYA, "my", "Burmese",    "burmese",    "缅甸语";
}

/// Legacy multi-byte charsets that are only ever used for one script.
/// Keys are matched exactly.
pub static CHARSET_TABLE: Map<&'static str, Lang> = phf_map! {
    "GBK" => ZHO,
    "Big5" => ZHO,
    "ISO-2022-CN" => ZHO,
    "EUC-CN" => ZHO,
    "SHIFT_JIS" => JPN,
    "EUC-JP" => JPN,
    "ISO-2022-JP" => JPN,
    "KOI8-R" => RUS,
    "EUC-KR" => KOR,
    "ISO-2022-KR" => KOR,
};

#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

/// Look up a two-letter code. Case-insensitive.
pub fn from_code(code: &str) -> Option<Lang> {
    if let Some(lang) = LANG_TABLE.get(code) {
        return Some(*lang);
    }
    LANG_TABLE.get(code.to_ascii_lowercase().as_str()).copied()
}

/// Look up an English language name. ASCII case-insensitive.
pub fn from_name(name: &str) -> Option<Lang> {
    NAME_TABLE
        .get(name.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Look up a Chinese display name such as `日语`.
#[inline]
pub fn from_name_zh(name: &str) -> Option<Lang> {
    NAME_ZH_TABLE.get(name.trim()).copied()
}

#[inline]
pub fn from_charset(charset: &str) -> Option<Lang> {
    CHARSET_TABLE.get(charset).copied()
}
