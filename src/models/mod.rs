pub mod channel;
pub mod diaper_kind;
pub mod entries;

pub use channel::Channel;
pub use diaper_kind::DiaperKind;
pub use entries::{DiaperLogEntry, FeedingLogEntry, SleepLogEntry};
