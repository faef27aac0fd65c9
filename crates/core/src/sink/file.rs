//! Sink that writes each document to an HTML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{DocumentSink, SinkError};

/// Turns a document title into a file name stem: lowercase ASCII letters
/// and digits separated by single dashes.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("report");
    }
    slug
}

/// Writes `<dir>/<slug(title)>.html`, replacing an existing file.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Creates a sink for an existing directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a document with this title is written to.
    #[must_use]
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{}.html", slugify(title)))
    }
}

impl DocumentSink for FileSink {
    fn deliver(&self, markup: &str, title: &str) -> Result<(), SinkError> {
        if !self.dir.is_dir() {
            return Err(SinkError::unavailable(format!(
                "output directory {} does not exist",
                self.dir.display()
            )));
        }

        let path = self.path_for(title);
        fs::write(&path, markup).map_err(|err| match err.kind() {
            std::io::ErrorKind::PermissionDenied => SinkError::unavailable(format!(
                "output directory {} is not writable",
                self.dir.display()
            )),
            _ => SinkError::io(&path, err),
        })?;

        info!(path = %path.display(), bytes = markup.len(), "Wrote report document");
        Ok(())
    }
}
