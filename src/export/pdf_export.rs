// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::layout::{PageGeometry, layout};
use crate::export::model::ExportRecord;
use crate::export::notify_export_success;
use crate::export::pdf::PdfSink;
use crate::export::sink::{DocumentSink, replay};
use crate::ui::messages::info;
use std::path::Path;

/// Lay the log out against the sink's page height, replay it and save.
pub(crate) fn export_to_sink<R: ExportRecord>(
    entries: &[R],
    geometry: &PageGeometry,
    sink: &mut dyn DocumentSink,
    path: &Path,
) -> AppResult<usize> {
    let geo = geometry.clone().with_page_height(sink.page_height());
    let commands = layout(entries, &geo);

    replay(&commands, sink);
    sink.save(path)?;

    Ok(commands.len())
}

/// Export PDF usando PdfSink.
pub(crate) fn export_pdf<R: ExportRecord>(
    entries: &[R],
    geometry: &PageGeometry,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut sink = PdfSink::with_page_size(geometry.width, geometry.height);
    let n = export_to_sink(entries, geometry, &mut sink, path)?;
    tracing::debug!(commands = n, entries = entries.len(), "pdf written");

    notify_export_success("PDF", path);
    Ok(())
}
