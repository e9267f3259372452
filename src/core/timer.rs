//! Breastfeeding timer.
//!
//! Two counters, one per channel, of which at most one accumulates at any
//! time. Accumulation is driven by a [`Ticker`]: the host polls the timer and
//! every whole tick period elapsed since the last poll adds one second to the
//! active channel.
//!
//! ```text
//! Idle ──start(c)──▶ Running(c) ──pause──▶ Paused(c) ──start(c')──▶ Running(c')
//!   ▲                   │ start(other)          │
//!   │                   ▼                       │
//!   └────reset────── Running(other) ◀───────────┘
//! ```

use super::ticker::{TickHandle, Ticker};
use crate::models::Channel;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub active_channel: Option<Channel>,
    pub left_seconds: u64,
    pub right_seconds: u64,
    pub running: bool,
}

impl TimerState {
    pub fn seconds(&self, channel: Channel) -> u64 {
        match channel {
            Channel::Left => self.left_seconds,
            Channel::Right => self.right_seconds,
        }
    }

    fn seconds_mut(&mut self, channel: Channel) -> &mut u64 {
        match channel {
            Channel::Left => &mut self.left_seconds,
            Channel::Right => &mut self.right_seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.left_seconds + self.right_seconds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running(Channel),
    Paused(Channel),
}

#[derive(Debug, Clone, Default)]
pub struct FeedingTimer {
    state: TimerState,
    ticker: Ticker,
}

impl FeedingTimer {
    pub fn new(tick: Duration) -> Self {
        Self {
            state: TimerState::default(),
            ticker: Ticker::new(tick),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        match (self.state.active_channel, self.state.running) {
            (Some(c), true) => TimerStatus::Running(c),
            (Some(c), false) => TimerStatus::Paused(c),
            (None, _) => TimerStatus::Idle,
        }
    }

    pub fn seconds(&self, channel: Channel) -> u64 {
        self.state.seconds(channel)
    }

    /// Handle of the running schedule, for hosts that deliver ticks themselves.
    pub fn tick_handle(&self) -> Option<TickHandle> {
        self.ticker.handle()
    }

    /// Start (or resume) accumulation on `channel`.
    ///
    /// A running channel is stopped first. Starting the channel that is
    /// already running keeps the current schedule untouched.
    pub fn start(&mut self, channel: Channel, now: Instant) -> TickHandle {
        if self.state.running && self.state.active_channel == Some(channel) {
            self.poll(now);
            if let Some(handle) = self.ticker.handle() {
                return handle;
            }
        }

        self.stop(now);
        self.state.active_channel = Some(channel);
        self.state.running = true;
        tracing::debug!(%channel, "feeding timer started");
        self.ticker.schedule(now)
    }

    /// Stop accumulating. Counters and the active channel are kept.
    pub fn pause(&mut self, now: Instant) {
        self.stop(now);
        tracing::debug!(
            left = self.state.left_seconds,
            right = self.state.right_seconds,
            "feeding timer paused"
        );
    }

    /// Back to `Idle` with both counters at zero.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.state = TimerState::default();
    }

    /// Apply every tick due at `now`. Returns the seconds added.
    pub fn poll(&mut self, now: Instant) -> u64 {
        if !self.state.running {
            return 0;
        }
        let Some(channel) = self.state.active_channel else {
            return 0;
        };

        let n = self.ticker.due(now);
        *self.state.seconds_mut(channel) += n;
        n
    }

    /// Deliver a single tick fired by an external interval.
    ///
    /// Ticks carrying a stale handle (taken before a pause, reset or channel
    /// switch) are ignored. Hosts use either this or [`poll`](Self::poll),
    /// never both on the same schedule.
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        if !self.state.running || !self.ticker.is_current(handle) {
            return false;
        }
        match self.state.active_channel {
            Some(channel) => {
                *self.state.seconds_mut(channel) += 1;
                true
            }
            None => false,
        }
    }

    fn stop(&mut self, now: Instant) {
        self.poll(now);
        self.ticker.cancel();
        self.state.running = false;
    }
}
