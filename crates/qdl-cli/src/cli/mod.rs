//! CLI for qiita-dl.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};
use qdl_core::config;
use qdl_core::job::SnippetJob;
use std::path::PathBuf;

use commands::run_download;

/// Download a code snippet published on Qiita.
#[derive(Debug, Parser)]
#[command(name = "qiita-dl", version)]
#[command(about = "Download a code snippet published on Qiita", long_about = None)]
pub struct Cli {
    /// Mark the downloaded snippet as executable.
    #[arg(short = 'x')]
    pub executable: bool,

    /// Overwrite an existing file.
    #[arg(short = 'f')]
    pub force: bool,

    /// Output filename (default: the snippet's label).
    #[arg(short = 'o', value_name = "NAME")]
    pub output: Option<String>,

    /// Output directory.
    #[arg(short = 'd', value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Pick the N-th snippet of the article (1-based).
    #[arg(short = 'n', value_name = "N", default_value_t = 0)]
    pub index: u32,

    /// TOML file overriding HTTP and selector settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Article URL.
    pub url: String,
}

impl Cli {
    pub fn job(&self) -> SnippetJob {
        SnippetJob {
            url: self.url.clone(),
            index: self.index,
            filename: self.output.clone(),
            dir: self.directory.clone(),
            executable: self.executable,
            force: self.force,
        }
    }

    pub fn run(&self) -> Result<()> {
        let cfg = config::load(self.config.as_deref())?;
        tracing::debug!("config: {:?}", cfg);
        run_download(&cfg, &self.job())
    }
}

#[cfg(test)]
mod tests;
