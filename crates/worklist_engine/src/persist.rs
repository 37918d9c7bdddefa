use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use umya_spreadsheet::Spreadsheet;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("xlsx serialization failed: {0}")]
    Xlsx(String),
}

/// Atomically save a workbook by serializing to a temp file in the target
/// directory and renaming it into place.
pub fn save_workbook_atomic(book: &Spreadsheet, target: &Path) -> Result<(), PersistError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    umya_spreadsheet::writer::xlsx::write(book, tmp.path())
        .map_err(|err| PersistError::Xlsx(err.to_string()))?;

    // Replace any existing file; rename would fail on Windows otherwise.
    if target.exists() {
        fs::remove_file(target)?;
    }
    tmp.persist(target).map_err(|err| PersistError::Io(err.error))?;
    Ok(())
}
