//! Document retrieval: HTTP, local files and stdin, decoded to text.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use encoding_rs::{Encoding, UTF_8};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Loads documents. Failures are reported once and never retried.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| retrieval("http client", err))?;
        Ok(Self { client })
    }

    pub fn fetch(&self, source: &Source) -> Result<String> {
        let start = Instant::now();
        let text = match source {
            Source::Url(raw) => self.fetch_url(raw)?,
            Source::File(path) => {
                let bytes = fs::read(path).map_err(|source| Error::Io { path: path.clone(), source })?;
                decode(&bytes, None)
            }
            Source::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|source| Error::Io { path: PathBuf::from("<stdin>"), source })?;
                decode(&bytes, None)
            }
        };
        info!(source = %source, bytes = text.len(), elapsed = ?start.elapsed(), "loaded document");
        Ok(text)
    }

    fn fetch_url(&self, raw: &str) -> Result<String> {
        let url = parse_http_url(raw)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|err| retrieval(raw, err))?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().map_err(|err| retrieval(raw, err))?;
        Ok(decode(&body, content_type.as_deref()))
    }
}

/// Accepts only absolute `http`/`https` URLs.
pub fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|err| retrieval(raw, format!("invalid URL: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(retrieval(raw, format!("unsupported scheme '{other}'"))),
    }
}

/// Decodes a body using the `charset` of `content_type`, a BOM, or UTF-8.
///
/// Malformed sequences become U+FFFD, which normalization later strips.
pub fn decode(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "replaced malformed input");
    }
    text.into_owned()
}

fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

fn retrieval(source: &str, err: impl fmt::Display) -> Error {
    Error::Retrieval { source_name: source.to_string(), message: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_charset_from_content_type() {
        assert_eq!(charset("text/plain; charset=utf-8"), Some("utf-8"));
        assert_eq!(charset("text/html;Charset=\"windows-1251\""), Some("windows-1251"));
        assert_eq!(charset("text/plain"), None);
    }

    #[test]
    fn decodes_declared_legacy_encoding() {
        // "Мир" in windows-1251
        let bytes = [0xCC, 0xE8, 0xF0];
        assert_eq!(decode(&bytes, Some("text/plain; charset=windows-1251")), "Мир");
    }

    #[test]
    fn bom_and_fallback_decode_as_utf8() {
        assert_eq!(decode(b"\xEF\xBB\xBFhello", None), "hello");
        assert_eq!(decode(b"ok\xFF", Some("text/plain")), "ok\u{FFFD}");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(parse_http_url("https://example.com/a.txt").is_ok());
        for raw in ["ftp://example.com/a.txt", "not a url", "/etc/passwd"] {
            assert!(matches!(parse_http_url(raw), Err(Error::Retrieval { .. })), "{raw}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let fetcher = Fetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher
            .fetch(&Source::File(PathBuf::from("does/not/exist.txt")))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn unreachable_host_is_retrieval_error() {
        let fetcher = Fetcher::new(Duration::from_secs(2)).unwrap();
        // Port 9 on localhost: connection refused without leaving the machine.
        let err = fetcher.fetch(&Source::Url("http://127.0.0.1:9/".into())).unwrap_err();
        assert!(matches!(err, Error::Retrieval { .. }), "{err}");
    }
}
