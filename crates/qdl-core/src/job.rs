//! The sequential download pipeline:
//! fetch → select → disambiguate → resolve filename → resolve content → write.

use crate::document::{Page, Selectors};
use crate::error::QdlError;
use crate::fetch::PageSource;
use crate::output::{self, FileMode, OutputTarget};
use crate::select::{self, Selection};
use std::path::{Path, PathBuf};

/// One invocation's request, as parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetJob {
    pub url: String,
    /// 1-based snippet index; 0 picks the single labeled snippet.
    pub index: u32,
    /// Output filename override.
    pub filename: Option<String>,
    /// Output directory.
    pub dir: Option<PathBuf>,
    pub executable: bool,
    /// Replace an existing output file.
    pub force: bool,
}

/// Progress callbacks for user-facing output.
pub trait Report {
    /// Called once the page is parsed, before any selection can fail.
    fn title(&mut self, _title: &str) {}

    fn saved(&mut self, _path: &Path) {}
}

/// Runs `job` to completion and returns the path written.
pub fn run_job<S, R>(
    source: &S,
    selectors: &Selectors,
    job: &SnippetJob,
    report: &mut R,
) -> Result<PathBuf, QdlError>
where
    S: PageSource + ?Sized,
    R: Report + ?Sized,
{
    let html = source.fetch(&job.url)?;
    let page = Page::parse(&html);
    report.title(&page.title(selectors));

    let candidates = page.candidates(selectors);
    tracing::debug!(count = candidates.len(), "snippet candidates");
    if candidates.is_empty() {
        return Err(QdlError::NoSnippets);
    }

    let snippet = match select::select(&candidates, job.index) {
        Selection::Unique(i) => &candidates[i],
        Selection::NotFound => return Err(QdlError::NoSnippets),
        Selection::Ambiguous => {
            return Err(QdlError::Ambiguous {
                listing: select::listing(&candidates),
            })
        }
    };
    tracing::debug!(label = %snippet.label.trim(), "selected snippet");

    let filename = output::resolve_filename(job.filename.as_deref(), &snippet.label)?;
    let target = OutputTarget {
        path: output::output_path(job.dir.as_deref(), &filename),
        mode: FileMode::from_executable(job.executable),
    };

    if snippet.body.is_empty() {
        return Err(QdlError::EmptyContent);
    }

    output::write_snippet(&target, &snippet.body, job.force)?;
    report.saved(&target.path);
    Ok(target.path)
}
