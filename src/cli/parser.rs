use crate::core::sleep::SleepPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for babylog
#[derive(Parser)]
#[command(
    name = "babylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log feedings, sleep and diaper changes from the terminal and export them to PDF",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.babylog/babylog.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the export directory
    #[arg(global = true, long = "out", value_name = "DIR")]
    pub out: Option<String>,

    /// Defaults to `session`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive logging session (reads commands from stdin)
    Session,

    /// Compute a sleep duration between two times of day
    Duration {
        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long, value_enum, help = "Override the configured sleep policy")]
        policy: Option<SleepPolicy>,
    },

    /// Recompress an image the way diaper photos are stored
    Compress {
        /// Input image (PNG or JPEG)
        input: String,

        /// Output JPEG file
        output: String,

        #[arg(long = "max-width", help = "Maximum width in pixels")]
        max_width: Option<u32>,

        #[arg(long, help = "JPEG quality between 0 and 1")]
        quality: Option<f32>,

        #[arg(long = "data-uri", help = "Also print the image as a data URI")]
        data_uri: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with the defaults")]
        init: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
