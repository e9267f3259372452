// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ExportRecord;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<R: ExportRecord>(entries: &[R], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<R::Row> = entries.iter().map(R::row).collect();
    let json_data = serde_json::to_string_pretty(&rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv<R: ExportRecord>(entries: &[R], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for entry in entries {
        wtr.serialize(entry.row())?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
