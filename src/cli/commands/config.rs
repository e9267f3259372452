use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Config {
        print_config,
        init,
        path,
    }) = &cli.command
    {
        // Path del file di configurazione
        let file = cli
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if *path {
            println!("{}", file.display());
        }

        // ---- INIT CONFIG ----
        if *init {
            if file.exists() {
                warning(format!(
                    "Configuration file {} already exists, left untouched.",
                    file.display()
                ));
            } else {
                Config::default().save_to(&file)?;
                success(format!("Config file: {}", file.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info("Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if !*path && !*init && !*print_config {
            warning("Nothing to do: use --print, --init or --path.");
        }
    }

    Ok(())
}
