//! Per-question countdown.
//!
//! The event loop is the only clock: it measures elapsed wall time and feeds
//! it in through [`CountdownTimer::advance`]. The timer itself is plain
//! state, so "cancelling" it is a state change and a stale tick can never
//! touch a discarded countdown. At most one countdown is live per session.

use serde::{Deserialize, Serialize};

use crate::constants::MS_PER_SECOND;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    remaining_ms: u64,
    running: bool,
}

impl CountdownTimer {
    /// A cancelled (inert) timer.
    pub fn idle() -> Self {
        Self {
            remaining_ms: 0,
            running: false,
        }
    }

    /// Restart the countdown from a fresh budget. Any previous countdown is
    /// implicitly cancelled; there is never more than one live.
    pub fn start(&mut self, seconds: u32) {
        self.remaining_ms = u64::from(seconds) * MS_PER_SECOND;
        self.running = true;
    }

    /// Advance by elapsed milliseconds. Returns true exactly once, on the
    /// tick where the countdown reaches zero. Does nothing while paused or
    /// cancelled.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
        if self.remaining_ms == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Freeze the countdown, keeping the remaining budget.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue a paused countdown from where it left off. Resuming an
    /// expired or cancelled timer (zero budget) leaves it inert.
    pub fn resume(&mut self) {
        if self.remaining_ms > 0 {
            self.running = true;
        }
    }

    /// Stop and discard the countdown entirely.
    pub fn cancel(&mut self) {
        self.remaining_ms = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whole seconds left, rounded up so the display never shows 0 while
    /// time remains.
    pub fn remaining_seconds(&self) -> u32 {
        (self.remaining_ms.div_ceil(MS_PER_SECOND)) as u32
    }
}
