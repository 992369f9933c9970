//! Word frequency counting for a single document (or a handful of them).
//!
//! Text flows through four stages, each finishing before the next starts:
//! [`normalize()`] strips everything but the kept alphabet and lowercases,
//! [`tokenize()`] splits on whitespace, [`aggregate()`] counts each word and
//! [`rank()`] keeps the most frequent ones. [`Pipeline`] wires them together.
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! let report = word_freq::analyze("The cat sat. The CAT ran!", NonZeroUsize::new(2).unwrap());
//! let words: Vec<_> = report.words.iter().map(|w| (w.word.as_str(), w.count)).collect();
//! assert_eq!(words, vec![("the", 2u64), ("cat", 2)]);
//! ```

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod tokenize;
pub mod word_types;

pub use aggregate::aggregate;
pub use config::{AnalyzerConfig, Cli, DEFAULT_TOP_N};
pub use error::{Error, Result};
pub use fetch::{Fetcher, Source};
pub use normalize::{normalize, Alphabet, Normalizer};
pub use pipeline::{analyze, Pipeline, WordFrequencies};
pub use rank::rank;
pub use tokenize::tokenize;
pub use word_types::{FrequencyMap, RankedWord};
