//! Text normalization: strip everything outside the kept alphabet, then lowercase.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Basic Cyrillic capitals and smalls, `А` through `я`.
pub const CYRILLIC_BASIC: RangeInclusive<char> = '\u{0410}'..='\u{044F}';

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(|| {
    Normalizer::new(&Alphabet::default()).expect("default alphabet builds a valid pattern")
});

/// Which letters survive normalization, beyond ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    all_alphabetic: bool,
    ranges: Vec<RangeInclusive<char>>,
}

impl Alphabet {
    /// ASCII letters and digits only.
    pub fn ascii() -> Self {
        Self { all_alphabetic: false, ranges: Vec::new() }
    }

    /// ASCII plus basic Cyrillic (`А-я`). `Ё`, `І`, `Ї`, `Є` and friends are not kept.
    pub fn cyrillic() -> Self {
        Self::ascii().with_range(CYRILLIC_BASIC)
    }

    /// Every Unicode alphabetic character and decimal digit.
    pub fn unicode() -> Self {
        Self { all_alphabetic: true, ranges: Vec::new() }
    }

    /// Keeps an additional inclusive code point range.
    pub fn with_range(mut self, range: RangeInclusive<char>) -> Self {
        self.ranges.push(range);
        self
    }

    /// Regex class matching every character that must be removed.
    fn strip_class(&self) -> String {
        let mut class = String::from(r"[^a-zA-Z0-9\s");
        if self.all_alphabetic {
            class.push_str(r"\p{Alphabetic}\p{Nd}");
        }
        for range in &self.ranges {
            class.push_str(&format!(
                r"\x{{{:X}}}-\x{{{:X}}}",
                *range.start() as u32,
                *range.end() as u32
            ));
        }
        class.push(']');
        class
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::cyrillic()
    }
}

/// Compiled normalizer for one [`Alphabet`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    strip: Regex,
    // strip class plus anything still uppercase after lowercasing
    residue: Regex,
}

impl Normalizer {
    pub fn new(alphabet: &Alphabet) -> Result<Self> {
        let class = alphabet.strip_class();
        let strip = Regex::new(&class)?;
        let residue = Regex::new(&format!(r"{class}|\p{{Uppercase}}"))?;
        Ok(Self { strip, residue })
    }

    /// Removes disallowed characters and lowercases the rest.
    ///
    /// Lowercasing can map a kept letter outside the alphabet (`İ` becomes
    /// `i` plus a combining dot) or leave it untouched when it has no
    /// lowercase form (`𝐀`, `ϒ`). Both are removed in a second pass, so the
    /// output holds no uppercase letters and normalizing it again is a no-op.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = self.strip.replace_all(text, "").to_lowercase();
        if self.residue.is_match(&lowered) {
            self.residue.replace_all(&lowered, "").into_owned()
        } else {
            lowered
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

/// Normalizes with the default (ASCII + basic Cyrillic) alphabet.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}
