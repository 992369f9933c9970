use std::path::PathBuf;

/// Errors surfaced by word-freq.
///
/// The counting stages themselves never fail; everything here belongs to the
/// boundaries around them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Fetching a document failed (transport error, bad URL or non-2xx status).
    #[error("retrieval failed for {source_name}: {message}")]
    Retrieval { source_name: String, message: String },
    /// Reading a local document failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The analysis produced no words, so there is nothing to display.
    #[error("no words found in input")]
    NoData,
    /// A `--keep-range` value could not be parsed.
    #[error("invalid code point range '{0}': expected XXXX-YYYY in hex with start <= end")]
    InvalidRange(String),
    /// The alphabet produced a character class the regex engine rejected.
    #[error("invalid alphabet pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Serializing a report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
