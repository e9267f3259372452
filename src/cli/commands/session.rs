use crate::cli::session::Session;
use crate::config::Config;
use crate::errors::AppResult;
use std::io;

/// Run an interactive session on stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(cfg);
    tracing::debug!(out_dir = %session.out_dir().display(), "session started");

    let stdin = io::stdin();
    session.run(stdin.lock())
}
