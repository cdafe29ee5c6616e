use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::TocOptions;
use crate::table::TableOfContents;

/// Failure to read a fragment or an options file.
///
/// Building a table of contents cannot fail; only getting the input can.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was requested
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// The options file is not valid options JSON.
    #[error("invalid options in {}: {source}", path.display())]
    Options {
        /// The options file
        path: PathBuf,
        /// The deserialization error
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a fragment from `path` and build its table of contents.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_table_of_contents(
    path: impl AsRef<Path>,
    options: &TocOptions,
) -> Result<TableOfContents, LoadError> {
    let html = read(path.as_ref())?;
    Ok(TableOfContents::with_options(&html, options))
}

/// Read [`TocOptions`] from a JSON file. Missing fields take their defaults.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Options`] if it does not hold valid options.
pub fn load_options(path: impl AsRef<Path>) -> Result<TocOptions, LoadError> {
    let path = path.as_ref();
    let json = read(path)?;
    serde_json::from_str(&json).map_err(|source| LoadError::Options {
        path: path.to_path_buf(),
        source,
    })
}
