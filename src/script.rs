use crate::unicode::{is_ascii_latin, is_han, is_kana, is_latin1_supplement};

/// Script-class counts over a normalized sample, gathered in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptProfile {
    /// Character count of the whole sample.
    pub total: usize,
    pub han: usize,
    pub kana: usize,
    pub latin: usize,
    pub latin_extended: usize,
}

impl ScriptProfile {
    pub fn of(sample: &str) -> Self {
        let mut profile = Self::default();
        for c in sample.chars() {
            profile.total += 1;
            if is_ascii_latin(c) {
                profile.latin += 1;
            } else if is_latin1_supplement(c) {
                profile.latin_extended += 1;
            } else if is_han(c) {
                profile.han += 1;
            } else if is_kana(c) {
                profile.kana += 1;
            }
        }
        profile
    }

    /// Han characters over all characters.
    #[inline]
    pub fn han_rate(&self) -> f64 {
        ratio(self.han, self.total)
    }

    /// ASCII Latin letters over all characters.
    #[inline]
    pub fn latin_rate(&self) -> f64 {
        ratio(self.latin, self.total)
    }

    /// Kana over all characters.
    #[inline]
    pub fn kana_rate(&self) -> f64 {
        ratio(self.kana, self.total)
    }

    /// Kana relative to Han.
    #[inline]
    pub fn kana_per_han(&self) -> f64 {
        ratio(self.kana, self.han)
    }
}

#[inline(always)]
fn ratio(count: usize, of: usize) -> f64 {
    if of == 0 {
        0.0
    } else {
        count as f64 / of as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_has_zero_rates() {
        let p = ScriptProfile::of("");
        assert_eq!(p, ScriptProfile::default());
        assert_eq!(p.han_rate(), 0.0);
        assert_eq!(p.latin_rate(), 0.0);
        assert_eq!(p.kana_rate(), 0.0);
        assert_eq!(p.kana_per_han(), 0.0);
    }

    #[test]
    fn counts_each_class_once() {
        let p = ScriptProfile::of("日本語のテキスト abc é");
        assert_eq!(p.han, 3);
        assert_eq!(p.kana, 5);
        assert_eq!(p.latin, 3);
        assert_eq!(p.latin_extended, 1);
        assert_eq!(p.total, 14);
    }

    #[test]
    fn rates_use_character_counts_not_bytes() {
        let p = ScriptProfile::of("中文中文ab");
        assert_eq!(p.han_rate(), 4.0 / 6.0);
        assert_eq!(p.latin_rate(), 2.0 / 6.0);
    }

    #[test]
    fn kana_per_han_without_han_is_zero() {
        let p = ScriptProfile::of("ひらがな");
        assert_eq!(p.kana, 4);
        assert_eq!(p.kana_per_han(), 0.0);
    }
}
