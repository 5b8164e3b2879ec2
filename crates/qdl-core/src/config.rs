use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// HTTP client parameters for the page GET.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Value sent as `User-Agent`.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects to follow.
    pub max_redirections: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("qiita-dl/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
        }
    }
}

/// CSS selectors describing the article layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Code frames inside the article body, one per candidate.
    pub snippets: String,
    /// Language/filename label inside a frame.
    pub label: String,
    /// Snippet text inside a frame.
    pub body: String,
    /// Page title.
    pub title: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            snippets: "section[itemprop=articleBody] .code-frame".to_string(),
            label: ".code-lang".to_string(),
            body: "pre".to_string(),
            title: "title".to_string(),
        }
    }
}

/// Configuration for one run. Only read from disk when `--config` is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QdlConfig {
    pub http: HttpConfig,
    pub selectors: SelectorConfig,
}

/// Load configuration from `path`, or the built-in defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<QdlConfig> {
    let Some(path) = path else {
        return Ok(QdlConfig::default());
    };
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: QdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
