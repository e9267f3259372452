//! Paginated layout of a log: entries in, draw commands out.
//!
//! Coordinates are millimetres from the top-left corner of the page. A line
//! written at `y` occupies `[y, y + line_height]`; when that would cross the
//! printable height the cursor moves to the top of a new page first.

use super::model::ExportRecord;
use crate::imaging::{EncodedImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
    pub bottom_margin: f32,
    pub line_height: f32,
    pub entry_gap: f32,
    pub font_size: f32,
    /// Side of the square box attachments are fitted into.
    pub image_box: f32,
}

impl Default for PageGeometry {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            top: 20.0,
            left: 10.0,
            bottom_margin: 20.0,
            line_height: 10.0,
            entry_gap: 10.0,
            font_size: 12.0,
            image_box: 50.0,
        }
    }
}

impl PageGeometry {
    pub fn printable_height(&self) -> f32 {
        self.height - self.bottom_margin
    }

    /// Same geometry on a page of a different height (as reported by a sink).
    pub fn with_page_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFontSize(f32),
    Text {
        content: String,
        x: f32,
        y: f32,
    },
    NewPage,
    Image {
        image: Arc<EncodedImage>,
        format: ImageFormat,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// Running vertical cursor that breaks pages as content is placed.
#[derive(Debug)]
pub struct PageCursor<'g> {
    geo: &'g PageGeometry,
    y: f32,
    commands: Vec<DrawCommand>,
}

impl<'g> PageCursor<'g> {
    pub fn new(geo: &'g PageGeometry) -> Self {
        Self {
            geo,
            y: geo.top,
            commands: Vec::new(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.commands.push(DrawCommand::SetFontSize(size));
    }

    // Content taller than a whole page is placed anyway instead of paging forever.
    fn make_room(&mut self, height: f32) {
        if self.y + height > self.geo.printable_height() && self.y > self.geo.top {
            self.commands.push(DrawCommand::NewPage);
            self.y = self.geo.top;
        }
    }

    pub fn line(&mut self, content: impl Into<String>) {
        self.make_room(self.geo.line_height);
        self.commands.push(DrawCommand::Text {
            content: content.into(),
            x: self.geo.left,
            y: self.y,
        });
        self.y += self.geo.line_height;
    }

    pub fn image(&mut self, image: &Arc<EncodedImage>) {
        let (w, h) = fit_box(image, self.geo.image_box);
        self.make_room(h);
        self.commands.push(DrawCommand::Image {
            image: Arc::clone(image),
            format: image.format,
            x: self.geo.left,
            y: self.y,
            w,
            h,
        });
        self.y += h;
    }

    pub fn gap(&mut self, height: f32) {
        self.y += height;
    }

    pub fn finish(self) -> Vec<DrawCommand> {
        self.commands
    }
}

/// Largest size with the image's aspect ratio that fits a `side`×`side` box.
fn fit_box(image: &EncodedImage, side: f32) -> (f32, f32) {
    let aspect = image.aspect();
    if aspect >= 1.0 {
        (side / aspect, side)
    } else {
        (side, side * aspect)
    }
}

/// Lay out a whole log: title, then each entry's lines, its image if any,
/// and a gap.
pub fn layout<R: ExportRecord>(entries: &[R], geo: &PageGeometry) -> Vec<DrawCommand> {
    let mut cursor = PageCursor::new(geo);
    cursor.set_font_size(geo.font_size);
    cursor.line(R::KIND.title());

    for (i, entry) in entries.iter().enumerate() {
        for line in entry.lines(i + 1) {
            cursor.line(line);
        }
        if let Some(img) = entry.image() {
            cursor.image(img);
        }
        cursor.gap(geo.entry_gap);
    }

    cursor.finish()
}
