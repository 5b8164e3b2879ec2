//! Output filename, permissions, and the guarded write.

use crate::error::QdlError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits requested for the saved file (the process umask still applies).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// rw for owner/group/other.
    Standard,
    /// rwx for owner/group/other.
    Executable,
}

impl FileMode {
    pub fn from_executable(executable: bool) -> Self {
        if executable {
            FileMode::Executable
        } else {
            FileMode::Standard
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            FileMode::Standard => 0o666,
            FileMode::Executable => 0o777,
        }
    }
}

/// Where and how the snippet is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub mode: FileMode,
}

/// Chooses the output filename: a non-empty `explicit` name wins, otherwise
/// the trimmed label made safe as a single path component.
pub fn resolve_filename(explicit: Option<&str>, label: &str) -> Result<String, QdlError> {
    if let Some(name) = explicit.filter(|n| !n.is_empty()) {
        return Ok(name.to_string());
    }
    let name = sanitize_label(label.trim());
    if name.is_empty() || name == "." || name == ".." {
        return Err(QdlError::NoFilename);
    }
    Ok(name)
}

/// Replaces NUL, `/`, `\` and control characters with `_`.
fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Joins the optional output directory with `name`.
pub fn output_path(dir: Option<&Path>, name: &str) -> PathBuf {
    match dir {
        Some(d) if !d.as_os_str().is_empty() => d.join(name),
        _ => PathBuf::from(name),
    }
}

/// Writes `content` to `target.path`.
///
/// An existing file is an error unless `force` is set, in which case it is
/// removed first. The new file is created exclusively.
pub fn write_snippet(target: &OutputTarget, content: &str, force: bool) -> Result<(), QdlError> {
    let path = &target.path;

    if path.exists() {
        if !force {
            return Err(QdlError::Exists { path: path.clone() });
        }
        tracing::warn!(path = %path.display(), "removing existing file");
        fs::remove_file(path).map_err(|source| QdlError::Remove {
            path: path.clone(),
            source,
        })?;
    }

    let mut file = open_new(path, target.mode).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            QdlError::Exists { path: path.clone() }
        } else {
            QdlError::Write {
                path: path.clone(),
                source,
            }
        }
    })?;
    file.write_all(content.as_bytes())
        .map_err(|source| QdlError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        mode = %format!("{:o}", target.mode.bits()),
        "snippet written"
    );
    Ok(())
}

#[cfg(unix)]
fn open_new(path: &Path, mode: FileMode) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode.bits())
        .open(path)
}

#[cfg(not(unix))]
fn open_new(path: &Path, _mode: FileMode) -> io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create_new(true).open(path)
}
