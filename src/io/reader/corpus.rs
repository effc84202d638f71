/*! Corpus reader

The trainer reads the whole corpus at once.
!*/
use std::path::Path;

use log::info;

use crate::error::Error;

/// Read the corpus at `path` into memory.
///
/// # Errors
/// - [Error::CorpusNotFound] if there is no file at `path`,
/// - [Error::EmptyCorpus] if the file is empty or only holds whitespace,
/// - [Error::Io] on other errors, including invalid UTF-8.
pub fn read_corpus(path: &Path) -> Result<String, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::CorpusNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    if text.trim().is_empty() {
        return Err(Error::EmptyCorpus(path.to_path_buf()));
    }

    info!(
        "read corpus {:?} ({} bytes, {} lines)",
        path,
        text.len(),
        text.lines().count()
    );
    Ok(text)
}
