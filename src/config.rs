use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{0}` must be within 0.0..=1.0, got {1}")]
    RatioOutOfRange(&'static str, f64),

    #[error("`{0}` must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("min_listing_anchors ({min}) exceeds max_sample_elements ({max})")]
    AnchorBounds { min: usize, max: usize },
}

/// Every tunable constant of the cascade.
///
/// The defaults are empirical; changing them changes classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Han share of the sample at or above which text is CJK.
    pub han_dominance: f64,
    /// Latin-letter share of the sample above which text is Latin script.
    pub latin_dominance: f64,
    /// Kana share above which CJK text is Japanese.
    pub kana_ratio: f64,
    /// Listings with fewer anchors than this give no body sample.
    pub min_listing_anchors: usize,
    /// Anchors or paragraphs read at most.
    pub max_sample_elements: usize,
    /// Paragraph text shorter than this falls back to the whole body.
    pub min_paragraph_chars: usize,
    /// Characters kept after normalization.
    pub sample_char_budget: usize,
    /// Latin-1 Supplement characters above which the Latin model is asked.
    pub latin_extended_gate: usize,
    /// `{` and `}` each occurring this often marks leaked template syntax.
    pub template_brace_limit: usize,
    /// Han characters a listing title needs before it is trusted.
    pub title_min_han: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            han_dominance: 0.38,
            latin_dominance: 0.38,
            kana_ratio: 0.10,
            min_listing_anchors: 16,
            max_sample_elements: 64,
            min_paragraph_chars: 64,
            sample_char_budget: 2048,
            latin_extended_gate: 3,
            template_brace_limit: 5,
            title_min_han: 2,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("han_dominance", self.han_dominance),
            ("latin_dominance", self.latin_dominance),
            ("kana_ratio", self.kana_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange(name, value));
            }
        }
        if self.sample_char_budget == 0 {
            return Err(ConfigError::ZeroLimit("sample_char_budget"));
        }
        if self.max_sample_elements == 0 {
            return Err(ConfigError::ZeroLimit("max_sample_elements"));
        }
        if self.min_listing_anchors > self.max_sample_elements {
            return Err(ConfigError::AnchorBounds {
                min: self.min_listing_anchors,
                max: self.max_sample_elements,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Thresholds::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_ratios() {
        let t = Thresholds {
            kana_ratio: 1.5,
            ..Default::default()
        };
        assert_eq!(
            t.validate(),
            Err(ConfigError::RatioOutOfRange("kana_ratio", 1.5))
        );

        let t = Thresholds {
            han_dominance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(ConfigError::RatioOutOfRange("han_dominance", _))
        ));
    }

    #[test]
    fn rejects_zero_limits_and_inverted_bounds() {
        let t = Thresholds {
            sample_char_budget: 0,
            ..Default::default()
        };
        assert_eq!(t.validate(), Err(ConfigError::ZeroLimit("sample_char_budget")));

        let t = Thresholds {
            min_listing_anchors: 65,
            ..Default::default()
        };
        assert_eq!(
            t.validate(),
            Err(ConfigError::AnchorBounds { min: 65, max: 64 })
        );
    }
}
