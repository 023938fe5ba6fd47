// Character-class predicates used by sampling and ratio analysis.
// Script and category data come from ICU4X compiled tables, so every
// predicate works on decoded scalar values, never on bytes.

use icu_properties::{
    CodePointMapData,
    props::{GeneralCategory, GeneralCategoryGroup, Script},
};

#[inline(always)]
fn script_of(c: char) -> Script {
    CodePointMapData::<Script>::new().get(c)
}

/// Script=Han: ideographs plus iteration marks such as `々` and `〇`.
#[inline(always)]
pub fn is_han(c: char) -> bool {
    // ASCII and Latin-1 never carry Han
    if (c as u32) < 0x2E80 {
        return false;
    }
    script_of(c) == Script::Han
}

/// Script=Hiragana or Script=Katakana (including halfwidth forms).
///
/// The prolonged sound mark `ー` is Script=Common and is not counted.
#[inline(always)]
pub fn is_kana(c: char) -> bool {
    if (c as u32) < 0x3040 {
        return false;
    }
    matches!(script_of(c), Script::Hiragana | Script::Katakana)
}

/// `[a-zA-Z]`.
#[inline(always)]
pub const fn is_ascii_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

// Latin-1 Supplement block, U+0080–U+00FF.
#[inline(always)]
pub const fn is_latin1_supplement(c: char) -> bool {
    matches!(c as u32, 0x0080..=0x00FF)
}

/// General category P* (punctuation) or S* (symbol).
#[inline(always)]
pub fn is_sign(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    let gc: GeneralCategory = CodePointMapData::<GeneralCategory>::new().get(c);
    GeneralCategoryGroup::Punctuation.contains(gc) || GeneralCategoryGroup::Symbol.contains(gc)
}

#[inline(always)]
pub const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}
