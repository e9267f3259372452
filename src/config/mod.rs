use crate::core::sleep::SleepPolicy;
use crate::errors::{AppError, AppResult};
use crate::export::PageGeometry;
use crate::imaging;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where exported files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Feeding timer tick period.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default)]
    pub sleep_policy: SleepPolicy,
    #[serde(default = "default_image_max_width")]
    pub image_max_width: u32,
    #[serde(default = "default_image_quality")]
    pub image_quality: f32,
    #[serde(default)]
    pub page: PageGeometry,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_tick_millis() -> u64 {
    1000
}
fn default_image_max_width() -> u32 {
    imaging::DEFAULT_MAX_WIDTH
}
fn default_image_quality() -> f32 {
    imaging::DEFAULT_QUALITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            tick_millis: default_tick_millis(),
            sleep_policy: SleepPolicy::default(),
            image_max_width: default_image_max_width(),
            image_quality: default_image_quality(),
            page: PageGeometry::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.babylog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".babylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("babylog.conf")
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }

    pub fn output_dir(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.output_dir)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from `path`, or return defaults if the file doesn't
    /// exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the default configuration file.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.image_quality > 0.0 && self.image_quality <= 1.0) {
            return Err(AppError::Config(format!(
                "image_quality must be in (0, 1], got {}",
                self.image_quality
            )));
        }
        if self.image_max_width == 0 {
            return Err(AppError::Config("image_max_width must be positive".into()));
        }
        let p = &self.page;
        let fields = [
            ("width", p.width),
            ("height", p.height),
            ("top", p.top),
            ("left", p.left),
            ("bottom_margin", p.bottom_margin),
            ("line_height", p.line_height),
            ("entry_gap", p.entry_gap),
            ("font_size", p.font_size),
            ("image_box", p.image_box),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "page.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("line_height", p.line_height),
            ("font_size", p.font_size),
            ("image_box", p.image_box),
        ] {
            if value == 0.0 {
                return Err(AppError::Config(format!("page.{name} must be positive")));
            }
        }
        if p.printable_height() <= p.top {
            return Err(AppError::Config(
                "page geometry leaves no room for a single line".into(),
            ));
        }
        Ok(())
    }
}
