use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::imaging;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Recompress an image file to a bounded-size JPEG.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compress {
        input,
        output,
        max_width,
        quality,
        data_uri,
    } = cmd
    {
        let max_width = max_width.unwrap_or(cfg.image_max_width);
        let quality = quality.unwrap_or(cfg.image_quality);
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(AppError::InvalidAmount(format!(
                "quality must be in (0, 1], got {quality}"
            )));
        }

        let img = imaging::compress_file(Path::new(input), max_width, quality)?;
        fs::write(output, &img.bytes)?;

        success(format!(
            "Compressed {} → {} ({}x{}, {} bytes)",
            input,
            output,
            img.width,
            img.height,
            img.bytes.len()
        ));

        if *data_uri {
            println!("{}", img.data_uri());
        }
    }
    Ok(())
}
