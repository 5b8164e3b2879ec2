//! HTTP GET of the article page.
//!
//! Uses the curl crate (libcurl). The body is collected in memory and decoded
//! as UTF-8; the HTML parser itself never rejects input, so a failed decode is
//! the only way a page is "unparseable".

use crate::config::HttpConfig;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    #[error("response from {url} is not valid UTF-8 HTML")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Anything that can turn a URL into HTML text.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Checks that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// libcurl-backed page source.
#[derive(Debug, Clone)]
pub struct CurlSource {
    http: HttpConfig,
}

impl CurlSource {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.http.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.http.max_redirections)?;
        easy.connect_timeout(Duration::from_secs(self.http.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.http.timeout_secs))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl PageSource for CurlSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        validate_url(url)?;

        let (code, body) = self.get(url).map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(code, bytes = body.len(), "fetched {}", url);

        if !(200..300).contains(&code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        String::from_utf8(body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
