// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Make sure exports can be written into `dir`.
///
/// - Se la directory NON esiste → viene creata
/// - Se il path esiste ma è un file → errore
pub(crate) fn ensure_output_dir(dir: &Path) -> AppResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(AppError::Export(format!(
            "output path '{}' is not a directory",
            dir.display()
        )));
    }

    fs::create_dir_all(dir)?;
    info(format!("Created output directory {}", dir.display()));
    Ok(())
}
