pub mod diaper;
pub mod feeding;
pub mod logbook;
pub mod sleep;
pub mod ticker;
pub mod timer;

pub use diaper::DiaperTracker;
pub use feeding::FeedingTracker;
pub use logbook::Logbook;
pub use sleep::{SleepPolicy, SleepTracker};
pub use timer::{FeedingTimer, TimerState, TimerStatus};
