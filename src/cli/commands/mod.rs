pub mod compress;
pub mod config;
pub mod duration;
pub mod session;
