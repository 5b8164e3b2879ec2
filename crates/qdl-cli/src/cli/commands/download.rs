//! `qiita-dl <url>` – fetch the article and save one snippet.

use anyhow::Result;
use qdl_core::config::QdlConfig;
use qdl_core::document::Selectors;
use qdl_core::error::QdlError;
use qdl_core::fetch::CurlSource;
use qdl_core::job::{self, Report, SnippetJob};
use std::path::Path;

/// Prints progress to stdout.
struct ConsoleReport;

impl Report for ConsoleReport {
    fn title(&mut self, title: &str) {
        println!("Title: {title}");
    }

    fn saved(&mut self, path: &Path) {
        println!("Saved to {}", path.display());
    }
}

pub fn run_download(cfg: &QdlConfig, job: &SnippetJob) -> Result<()> {
    let selectors = Selectors::compile(&cfg.selectors)?;
    let source = CurlSource::new(cfg.http.clone());

    match job::run_job(&source, &selectors, job, &mut ConsoleReport) {
        Ok(_) => Ok(()),
        Err(err) => {
            if let QdlError::Ambiguous { listing } = &err {
                eprintln!("{} snippets in this article:", listing.len());
                for entry in listing {
                    eprintln!("{entry}");
                }
            }
            Err(err.into())
        }
    }
}
