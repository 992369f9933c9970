//! normalize → tokenize → aggregate → rank, each stage run to completion
//! before the next starts.

use std::num::NonZeroUsize;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, debug_span, info};

use crate::aggregate::aggregate;
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::normalize::Normalizer;
use crate::rank::rank;
use crate::tokenize::tokenize;
use crate::word_types::{FrequencyMap, RankedWord};

/// Outcome of one analysis: the ranking plus the totals it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequencies {
    pub top_n: usize,
    pub total_words: u64,
    pub distinct_words: usize,
    pub words: Vec<RankedWord>,
}

impl WordFrequencies {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The ranking, or [`Error::NoData`] when the input held no words.
    ///
    /// Anything that draws the ranking needs at least one row and should go
    /// through here.
    pub fn ensure_data(&self) -> Result<&[RankedWord]> {
        if self.words.is_empty() {
            Err(Error::NoData)
        } else {
            Ok(&self.words)
        }
    }
}

/// Runs `f` as the named stage, logging how long it took.
fn stage<T>(name: &'static str, f: impl FnOnce() -> T) -> T {
    let _span = debug_span!("stage", stage = name).entered();
    let start = Instant::now();
    let out = f();
    debug!(elapsed = ?start.elapsed(), "stage done");
    out
}

/// A configured analyzer. Cheap to reuse across documents.
#[derive(Debug, Clone)]
pub struct Pipeline {
    normalizer: Normalizer,
    top_n: NonZeroUsize,
}

impl Pipeline {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(&config.alphabet)?,
            top_n: config.top_n,
        })
    }

    /// Normalizes, tokenizes and counts one document.
    pub fn count(&self, raw_text: &str) -> FrequencyMap {
        let normalized = stage("normalize", || self.normalizer.normalize(raw_text));
        let tokens = stage("tokenize", || tokenize(&normalized));
        stage("aggregate", || aggregate(&tokens))
    }

    /// Ranks already-counted words.
    pub fn rank(&self, freq: &FrequencyMap) -> WordFrequencies {
        let words = stage("rank", || rank(freq, self.top_n));
        let report = WordFrequencies {
            top_n: self.top_n.get(),
            total_words: freq.total(),
            distinct_words: freq.len(),
            words,
        };
        info!(
            total = report.total_words,
            distinct = report.distinct_words,
            ranked = report.words.len(),
            "analysis complete"
        );
        report
    }

    pub fn analyze(&self, raw_text: &str) -> WordFrequencies {
        self.rank(&self.count(raw_text))
    }
}

/// Analyzes `raw_text` with the default alphabet.
///
/// Never fails; text without words yields an empty ranking, which
/// [`WordFrequencies::ensure_data`] reports as [`Error::NoData`].
pub fn analyze(raw_text: &str, top_n: NonZeroUsize) -> WordFrequencies {
    let pipeline = Pipeline {
        normalizer: Normalizer::default(),
        top_n,
    };
    pipeline.analyze(raw_text)
}
