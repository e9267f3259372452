use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sleep;
use crate::errors::AppResult;

/// Print the duration between two times of day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duration { start, end, policy } = cmd {
        let policy = policy.unwrap_or(cfg.sleep_policy);
        let d = sleep::duration(start, end, policy)?;
        println!("{d}");
    }
    Ok(())
}
