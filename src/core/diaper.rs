//! Diaper widget: type selection, optional photo, notes.

use super::logbook::Logbook;
use crate::errors::{AppError, AppResult};
use crate::imaging::{self, EncodedImage};
use crate::models::{DiaperKind, DiaperLogEntry};
use chrono::{DateTime, Local};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiaperForm {
    kind: Option<DiaperKind>,
    selected_at: Option<DateTime<Local>>,
    image: Option<Arc<EncodedImage>>,
    notes: String,
}

impl DiaperForm {
    pub fn kind(&self) -> Option<DiaperKind> {
        self.kind
    }

    pub fn selected_at(&self) -> Option<DateTime<Local>> {
        self.selected_at
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[derive(Debug)]
pub struct DiaperTracker {
    image_max_width: u32,
    image_quality: f32,
    form: DiaperForm,
    log: Logbook<DiaperLogEntry>,
}

impl Default for DiaperTracker {
    fn default() -> Self {
        Self::new(imaging::DEFAULT_MAX_WIDTH, imaging::DEFAULT_QUALITY)
    }
}

impl DiaperTracker {
    pub fn new(image_max_width: u32, image_quality: f32) -> Self {
        Self {
            image_max_width,
            image_quality,
            form: DiaperForm::default(),
            log: Logbook::new(),
        }
    }

    pub fn form(&self) -> &DiaperForm {
        &self.form
    }

    pub fn log(&self) -> &Logbook<DiaperLogEntry> {
        &self.log
    }

    /// The change is timestamped when its type is picked.
    pub fn select(&mut self, kind: DiaperKind, at: DateTime<Local>) {
        self.form.kind = Some(kind);
        self.form.selected_at = Some(at);
    }

    pub fn attach_image(&mut self, image: EncodedImage) {
        self.form.image = Some(Arc::new(image));
    }

    /// Recompress the file at `path` and attach it. The previous attachment
    /// is kept if the file can't be decoded.
    pub fn attach_file(&mut self, path: &Path) -> AppResult<&EncodedImage> {
        let img = imaging::compress_file(path, self.image_max_width, self.image_quality)?;
        let slot = self.form.image.insert(Arc::new(img));
        Ok(&**slot)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.form.notes = notes.into();
    }

    /// Append an entry and clear the form. A diaper type is required.
    pub fn commit(&mut self) -> AppResult<&DiaperLogEntry> {
        let kind = self
            .form
            .kind
            .ok_or(AppError::MissingRequiredField("diaper type"))?;
        let timestamp = self.form.selected_at.unwrap_or_else(Local::now);

        let entry = DiaperLogEntry {
            timestamp,
            kind,
            image: self.form.image.take(),
            notes: self.form.notes.trim().to_string(),
        };

        self.form = DiaperForm::default();
        tracing::info!(%kind, image = entry.has_image(), "diaper change logged");
        Ok(self.log.append(entry))
    }
}
