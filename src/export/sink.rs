//! Document sink: the writer end of an export.

use super::layout::DrawCommand;
use crate::errors::AppResult;
use crate::imaging::{EncodedImage, ImageFormat};
use std::path::Path;

/// Accepts ordered draw commands and produces a file. Coordinates are in
/// document units from the top-left corner of the current page.
pub trait DocumentSink {
    fn set_font_size(&mut self, size: f32);

    fn write_text(&mut self, content: &str, x: f32, y: f32);

    fn add_page(&mut self);

    #[allow(clippy::too_many_arguments)]
    fn add_image(
        &mut self,
        image: &EncodedImage,
        format: ImageFormat,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    );

    fn page_height(&self) -> f32;

    fn save(&mut self, path: &Path) -> AppResult<()>;
}

/// Feed `commands` to `sink` in order.
pub fn replay(commands: &[DrawCommand], sink: &mut dyn DocumentSink) {
    for cmd in commands {
        match cmd {
            DrawCommand::SetFontSize(size) => sink.set_font_size(*size),
            DrawCommand::Text { content, x, y } => sink.write_text(content, *x, *y),
            DrawCommand::NewPage => sink.add_page(),
            DrawCommand::Image {
                image,
                format,
                x,
                y,
                w,
                h,
            } => sink.add_image(image, *format, *x, *y, *w, *h),
        }
    }
}
