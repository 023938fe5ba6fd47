pub mod data;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A known language with its display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
    pub name_zh: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
    #[inline(always)]
    pub const fn name_zh(&self) -> &'static str {
        self.name_zh
    }

    /// The two-letter code as a [`LangCode`].
    #[inline]
    pub const fn lang_code(&self) -> LangCode {
        let b = self.code.as_bytes();
        LangCode([b[0], b[1]])
    }
}

/// Two lower-case ASCII letters, e.g. `zh`, `ja`, `en`.
///
/// Markup declarations may carry codes outside the known table, so this is
/// kept separate from [`Lang`]; use [`LangCode::lang`] to resolve names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LangCode([u8; 2]);

impl LangCode {
    /// Build a code from the first two characters of `s`.
    ///
    /// Returns `None` unless both are ASCII letters. Case is folded.
    pub fn parse(s: &str) -> Option<Self> {
        let mut bytes = s.bytes();
        let a = bytes.next()?;
        let b = bytes.next()?;
        if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
            return None;
        }
        Some(Self([a.to_ascii_lowercase(), b.to_ascii_lowercase()]))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Resolve against the known language table.
    #[inline]
    pub fn lang(&self) -> Option<Lang> {
        data::from_code(self.as_str())
    }
}

impl fmt::Debug for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LangCode({})", self.as_str())
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for LangCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<Lang> for LangCode {
    fn from(lang: Lang) -> Self {
        lang.lang_code()
    }
}

/// Which cascade step produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionSource {
    /// Legacy charset that only one script ever uses.
    Charset,
    /// `lang` / `xml:lang` / meta declaration.
    Markup,
    /// Listing-page title heuristic.
    Title,
    /// Han / Latin ratio over the body sample.
    BodyRatio,
    /// Answer from the statistical model.
    Statistical,
}

impl DetectionSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Charset => "charset",
            Self::Markup => "markup",
            Self::Title => "title",
            Self::BodyRatio => "body-ratio",
            Self::Statistical => "statistical",
        }
    }
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown detection source `{0}`")]
pub struct UnknownSource(pub String);

impl FromStr for DetectionSource {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charset" => Ok(Self::Charset),
            "markup" => Ok(Self::Markup),
            "title" => Ok(Self::Title),
            "body-ratio" => Ok(Self::BodyRatio),
            "statistical" => Ok(Self::Statistical),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

/// A detected language and the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LangResult {
    pub lang: LangCode,
    pub source: DetectionSource,
}

impl LangResult {
    #[inline]
    pub fn new(lang: impl Into<LangCode>, source: DetectionSource) -> Self {
        Self {
            lang: lang.into(),
            source,
        }
    }
}

impl fmt::Display for LangResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.lang, self.source)
    }
}

/// Listing (index) pages are sampled from anchors, content pages from
/// paragraphs. Supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageMode {
    Listing,
    #[default]
    Content,
}

impl PageMode {
    #[inline(always)]
    pub const fn is_listing(self) -> bool {
        matches!(self, Self::Listing)
    }
}

impl From<bool> for PageMode {
    /// `true` means listing.
    fn from(listing: bool) -> Self {
        if listing { Self::Listing } else { Self::Content }
    }
}
