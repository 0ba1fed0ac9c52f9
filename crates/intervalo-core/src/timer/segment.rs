//! Countdown for a single phase.
//!
//! A segment never accumulates per-tick decrements. Elapsed time is always
//! `paused_offset + (now - resumed_at)`, which is the same as measuring from a
//! reference instant `now - paused_offset` taken at the last start. A poll
//! after the host was throttled for ten seconds therefore lands on the
//! correct remaining time instead of continuing from a stale value.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused -> Running)* -> Completed
//!   ^________________ reset() ____________________|
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Handle for a scheduled recomputation. Any state change after the token
/// was issued makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentToken(u64);

/// What one poll observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentTick {
    /// New whole-second value to display, only when it changed.
    pub second: Option<u64>,
    /// Set once, on the poll that completes the segment. Carries how far past
    /// the end the clock already is.
    pub overshoot_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentTimer {
    duration_ms: u64,
    state: SegmentState,
    /// Elapsed time banked before the current running stretch.
    paused_offset_ms: u64,
    resumed_at_ms: u64,
    last_second: Option<u64>,
    #[serde(skip)]
    generation: u64,
}

impl SegmentTimer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            state: SegmentState::Idle,
            paused_offset_ms: 0,
            resumed_at_ms: 0,
            last_second: None,
            generation: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SegmentState {
        self.state
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.state {
            SegmentState::Running => self
                .paused_offset_ms
                .saturating_add(now_ms.saturating_sub(self.resumed_at_ms)),
            SegmentState::Paused => self.paused_offset_ms,
            SegmentState::Idle | SegmentState::Completed => 0,
        }
    }

    /// Remaining time. A completed segment reports its full duration again
    /// so it reads as fresh.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }

    /// 0.0 .. 1.0 progress through the segment.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return if self.state == SegmentState::Running { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms(now_ms) as f64 / self.duration_ms as f64).min(1.0)
    }

    /// Angle interpolated linearly from `start_deg` to `end_deg` over the
    /// segment, pinned to `end_deg` once the duration has elapsed.
    pub fn arc_angle(&self, now_ms: u64, start_deg: f64, end_deg: f64) -> f64 {
        start_deg + (end_deg - start_deg) * self.progress(now_ms)
    }

    pub fn last_notified_second(&self) -> Option<u64> {
        self.last_second
    }

    /// Token for the next scheduled poll, if running.
    pub fn token(&self) -> Option<SegmentToken> {
        (self.state == SegmentState::Running).then_some(SegmentToken(self.generation))
    }

    pub fn is_current(&self, token: SegmentToken) -> bool {
        self.state == SegmentState::Running && token.0 == self.generation
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, now_ms: u64) -> bool {
        self.start_with_carry(now_ms, 0)
    }

    /// Start with `carry_ms` already counted as elapsed. Used when the
    /// previous segment finished between polls, so the overshoot belongs to
    /// this one. Ignored when resuming from Paused.
    pub fn start_with_carry(&mut self, now_ms: u64, carry_ms: u64) -> bool {
        match self.state {
            SegmentState::Running => return false,
            SegmentState::Idle | SegmentState::Completed => {
                self.paused_offset_ms = carry_ms;
            }
            SegmentState::Paused => {}
        }
        self.resumed_at_ms = now_ms;
        self.state = SegmentState::Running;
        self.generation += 1;
        true
    }

    pub fn pause(&mut self, now_ms: u64) -> bool {
        if self.state != SegmentState::Running {
            return false;
        }
        self.paused_offset_ms = self.elapsed_ms(now_ms);
        self.state = SegmentState::Paused;
        self.generation += 1;
        true
    }

    /// Back to Idle. Returns the full-duration second when it differs from
    /// what observers last saw, so the caller can restore the display.
    pub fn reset(&mut self) -> Option<u64> {
        self.state = SegmentState::Idle;
        self.paused_offset_ms = 0;
        self.resumed_at_ms = 0;
        self.generation += 1;

        let full = whole_seconds(self.duration_ms);
        match self.last_second {
            Some(shown) if shown != full => {
                self.last_second = Some(full);
                Some(full)
            }
            _ => None,
        }
    }

    /// Recompute from the clock.
    pub fn poll(&mut self, now_ms: u64) -> SegmentTick {
        if self.state != SegmentState::Running {
            return SegmentTick::default();
        }

        let elapsed = self.elapsed_ms(now_ms);
        let done = elapsed >= self.duration_ms;
        let current = if done {
            0
        } else {
            whole_seconds(self.duration_ms - elapsed)
        };

        let second = if self.last_second != Some(current) {
            self.last_second = Some(current);
            Some(current)
        } else {
            None
        };

        let overshoot_ms = done.then(|| {
            self.complete();
            elapsed - self.duration_ms
        });

        SegmentTick {
            second,
            overshoot_ms,
        }
    }

    fn complete(&mut self) {
        self.state = SegmentState::Completed;
        self.paused_offset_ms = 0;
        self.resumed_at_ms = 0;
        self.generation += 1;
    }
}

/// Milliseconds to the nearest whole second.
pub(crate) fn whole_seconds(ms: u64) -> u64 {
    ms.saturating_add(500) / 1000
}
