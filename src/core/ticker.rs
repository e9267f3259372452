//! Cancelable recurring tick.
//!
//! There is no thread behind a `Ticker`: the owner schedules it, the event
//! loop polls it with the current instant and gets back how many whole periods
//! have elapsed since the last one it consumed. Cancelling bumps the
//! generation, so a `TickHandle` taken before the cancel no longer matches and
//! any late tick fired through it is dropped.

use std::time::{Duration, Instant};

/// Identifies one scheduling of a `Ticker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    generation: u64,
    next_due: Instant,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    generation: u64,
    armed: Option<Armed>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        // a zero period would fire an unbounded number of ticks per poll
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            generation: 0,
            armed: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Current handle, if a schedule is active.
    pub fn handle(&self) -> Option<TickHandle> {
        self.armed.map(|a| TickHandle {
            generation: a.generation,
        })
    }

    /// Arm the ticker; the first tick is due one period after `now`.
    /// Any previous schedule is cancelled first.
    pub fn schedule(&mut self, now: Instant) -> TickHandle {
        self.cancel();
        self.armed = Some(Armed {
            generation: self.generation,
            next_due: now + self.period,
        });
        TickHandle {
            generation: self.generation,
        }
    }

    /// Stop the schedule. Outstanding handles become stale.
    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            tracing::trace!(generation = self.generation, "tick schedule cancelled");
        }
        self.generation += 1;
    }

    pub fn is_current(&self, handle: TickHandle) -> bool {
        matches!(self.armed, Some(a) if a.generation == handle.generation)
    }

    /// Consume every tick due at `now` and return how many there were.
    pub fn due(&mut self, now: Instant) -> u64 {
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        if now < armed.next_due {
            return 0;
        }

        let late = now.duration_since(armed.next_due);
        // capped so the next due instant stays representable
        let behind = (late.as_nanos() / self.period.as_nanos()).min(u128::from(u32::MAX - 1));
        let count = 1 + behind as u32;
        armed.next_due = armed
            .next_due
            .checked_add(self.period.saturating_mul(count))
            .unwrap_or(now);
        u64::from(count)
    }
}
