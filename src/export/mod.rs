// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod layout;
pub mod logic;
pub mod model;
pub mod pdf;
mod pdf_export;
pub mod sink;

pub use layout::{DrawCommand, PageCursor, PageGeometry, layout};
pub use logic::ExportLogic;
pub use model::ExportRecord;
pub use pdf::PdfSink;
pub use sink::{DocumentSink, replay};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which widget a log belongs to. Fixes the document title and file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    Feeding,
    Sleep,
    Diaper,
}

impl LogKind {
    pub fn title(&self) -> &'static str {
        match self {
            LogKind::Feeding => "Feeding Logs",
            LogKind::Sleep => "Sleep Logs",
            LogKind::Diaper => "Diaper Change Logs",
        }
    }

    /// Name used in messages ("the sleep log is empty").
    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Feeding => "feeding",
            LogKind::Sleep => "sleep",
            LogKind::Diaper => "diaper change",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            LogKind::Feeding => "feeding_logs",
            LogKind::Sleep => "sleep_logs",
            LogKind::Diaper => "diaper_change_logs",
        }
    }

    /// `feeding_logs.pdf`, `sleep_logs.csv`, ...
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem(), format.as_str())
    }
}
