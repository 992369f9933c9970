//! Analyzer settings and the command-line surface that fills them.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};
use crate::fetch::Source;
use crate::normalize::Alphabet;

/// Number of ranked words when nothing else is asked for.
pub const DEFAULT_TOP_N: NonZeroUsize = NonZeroUsize::new(10).unwrap();
/// Document analyzed when no source is given.
pub const DEFAULT_URL: &str = "https://www.gutenberg.org/files/1342/1342-0.txt";

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub top_n: NonZeroUsize,
    pub alphabet: Alphabet,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, alphabet: Alphabet::default() }
    }
}

/// Alphabet presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetPreset {
    Ascii,
    Cyrillic,
    Unicode,
}

impl From<AlphabetPreset> for Alphabet {
    fn from(preset: AlphabetPreset) -> Self {
        match preset {
            AlphabetPreset::Ascii => Alphabet::ascii(),
            AlphabetPreset::Cyrillic => Alphabet::cyrillic(),
            AlphabetPreset::Unicode => Alphabet::unicode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Count word frequencies in a document and chart the most common words.
#[derive(Parser, Debug)]
#[command(name = "word-freq", version, about)]
pub struct Cli {
    /// Document URL to fetch (repeatable). Defaults to Pride and Prejudice
    /// on Project Gutenberg when no --url or --file is given.
    #[arg(long = "url", env = "WORD_FREQ_URL")]
    pub urls: Vec<String>,

    /// Local document to read (repeatable); `-` reads stdin.
    #[arg(long = "file", env = "WORD_FREQ_FILE")]
    pub files: Vec<PathBuf>,

    /// How many of the most frequent words to show.
    #[arg(long, short = 'n', env = "WORD_FREQ_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: NonZeroUsize,

    /// Letters kept besides ASCII letters and digits.
    #[arg(long, env = "WORD_FREQ_ALPHABET", value_enum, default_value_t = AlphabetPreset::Cyrillic)]
    pub alphabet: AlphabetPreset,

    /// Extra code point range to keep, as hex `XXXX-YYYY` (repeatable).
    #[arg(long = "keep-range", env = "WORD_FREQ_KEEP_RANGE", value_delimiter = ',')]
    pub keep_ranges: Vec<String>,

    /// Width in cells of the longest chart bar.
    #[arg(long, env = "WORD_FREQ_WIDTH", default_value_t = 50)]
    pub width: usize,

    /// Output format.
    #[arg(long, env = "WORD_FREQ_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// HTTP timeout in seconds.
    #[arg(long, env = "WORD_FREQ_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Builds the analyzer settings, validating any extra ranges.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let alphabet = self
            .keep_ranges
            .iter()
            .map(|raw| parse_range(raw))
            .try_fold(Alphabet::from(self.alphabet), |alphabet, range| {
                range.map(|r| alphabet.with_range(r))
            })?;
        Ok(AnalyzerConfig { top_n: self.top_n, alphabet })
    }

    /// Files first, then URLs; the default document when neither is given.
    pub fn sources(&self) -> Vec<Source> {
        let mut sources: Vec<Source> = self
            .files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Source::Stdin
                } else {
                    Source::File(path.clone())
                }
            })
            .collect();
        sources.extend(self.urls.iter().cloned().map(Source::Url));
        if sources.is_empty() {
            sources.push(Source::Url(DEFAULT_URL.to_string()));
        }
        sources
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parses `XXXX-YYYY` (hex code points, inclusive) into a char range.
pub fn parse_range(raw: &str) -> Result<RangeInclusive<char>> {
    let invalid = || Error::InvalidRange(raw.to_string());
    let (start, end) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let to_char = |hex: &str| {
        let hex = hex.trim().trim_start_matches("U+").trim_start_matches("u+");
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    };
    match (to_char(start), to_char(end)) {
        (Some(start), Some(end)) if start <= end => Ok(start..=end),
        _ => Err(invalid()),
    }
}
