//! Fatal conditions of a snippet download. None are retried.

use crate::document::SelectorError;
use crate::fetch::FetchError;
use crate::select::ListingEntry;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QdlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("no snippets found")]
    NoSnippets,

    /// Carries every candidate so the caller can show them.
    #[error("too many snippets are there; specify one with -n")]
    Ambiguous { listing: Vec<ListingEntry> },

    #[error("could not detect filename; specify with -o")]
    NoFilename,

    #[error("could not find content")]
    EmptyContent,

    #[error("file {} exists; overwrite with -f", .path.display())]
    Exists { path: PathBuf },

    #[error("rm {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
