#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use babylog::errors::AppResult;
use babylog::export::DocumentSink;
use babylog::imaging::{EncodedImage, ImageFormat};
use chrono::{DateTime, Local, TimeZone};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub fn bl() -> Command {
    cargo_bin_cmd!("babylog")
}

/// `babylog` pointed at a config file that doesn't exist (defaults only)
/// and exporting into `out`.
pub fn bl_in(out: &Path) -> Command {
    let mut cmd = bl();
    cmd.arg("--config")
        .arg(out.join("missing.conf"))
        .arg("--out")
        .arg(out);
    cmd
}

pub fn ts(h: u32, m: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 14, h, m, 0)
        .earliest()
        .expect("valid local time")
}

/// PNG bytes of a `w`×`h` gradient.
pub fn png_fixture(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(w, h, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode png fixture");
    buf
}

/// Sink that records every call as a line of text.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub page_height: f32,
    pub calls: Vec<String>,
    pub saved_to: Option<PathBuf>,
}

impl RecordingSink {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            ..Default::default()
        }
    }

    pub fn pages(&self) -> usize {
        1 + self.calls.iter().filter(|c| *c == "add_page").count()
    }
}

impl DocumentSink for RecordingSink {
    fn set_font_size(&mut self, size: f32) {
        self.calls.push(format!("font {size}"));
    }

    fn write_text(&mut self, content: &str, x: f32, y: f32) {
        self.calls.push(format!("text {x},{y} {content}"));
    }

    fn add_page(&mut self) {
        self.calls.push("add_page".to_string());
    }

    fn add_image(
        &mut self,
        image: &EncodedImage,
        format: ImageFormat,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) {
        self.calls.push(format!(
            "image {:?} {}x{} at {x},{y} size {w}x{h}",
            format, image.width, image.height
        ));
    }

    fn page_height(&self) -> f32 {
        self.page_height
    }

    fn save(&mut self, path: &Path) -> AppResult<()> {
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}
