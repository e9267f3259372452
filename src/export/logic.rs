// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_output_dir;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::layout::PageGeometry;
use crate::export::model::ExportRecord;
use crate::export::pdf_export::export_pdf;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one widget's log into `dir`, under the widget's fixed file
    /// name (`feeding_logs.pdf`, `sleep_logs.csv`, ...). An existing file is
    /// replaced. Returns the path written.
    pub fn export<R: ExportRecord>(
        entries: &[R],
        format: ExportFormat,
        dir: &Path,
        geometry: &PageGeometry,
    ) -> AppResult<PathBuf> {
        if entries.is_empty() {
            return Err(AppError::EmptyLog(R::KIND.label()));
        }

        ensure_output_dir(dir)?;
        let path = dir.join(R::KIND.file_name(format));

        match format {
            ExportFormat::Pdf => export_pdf(entries, geometry, &path)?,
            ExportFormat::Csv => export_csv(entries, &path)?,
            ExportFormat::Json => export_json(entries, &path)?,
        }

        Ok(path)
    }
}
