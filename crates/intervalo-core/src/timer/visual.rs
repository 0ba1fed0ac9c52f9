//! Presentation state derived from the run.
//!
//! The controller never touches a display. It hands out a [`VisualState`]
//! and the rendering layer applies it.

use serde::{Deserialize, Serialize};

use super::controller::RunState;
use super::sequence::PhaseKind;

/// Which main label is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    /// Before the first start: the "Ready" caption.
    Standby,
    /// Ready countdown digits.
    ReadyCount,
    Activity,
    Interval,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualState {
    pub display: Display,
    /// Alternating orientation of the countdown area.
    pub flipped: bool,
    /// Whether the activity/interval summary rows are highlighted.
    pub activity_highlighted: bool,
    pub interval_highlighted: bool,
    /// Whether the pause/reset/start controls should accept input.
    pub controls: Controls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
}

/// Map a run position onto what should be shown.
pub fn visual_state(
    run_state: RunState,
    kind: Option<PhaseKind>,
    flipped: bool,
) -> VisualState {
    let display = match (run_state, kind) {
        (RunState::Finished, _) => Display::Finished,
        (RunState::Idle, _) | (_, None) => Display::Standby,
        (_, Some(PhaseKind::Ready)) => Display::ReadyCount,
        (_, Some(PhaseKind::Activity)) => Display::Activity,
        (_, Some(PhaseKind::Interval)) => Display::Interval,
    };

    let controls = match run_state {
        RunState::Idle => Controls {
            start: true,
            pause: false,
            reset: false,
        },
        RunState::Running => Controls {
            start: false,
            pause: true,
            reset: false,
        },
        RunState::Paused => Controls {
            start: true,
            pause: false,
            reset: true,
        },
        RunState::Finished => Controls {
            start: false,
            pause: false,
            reset: true,
        },
    };

    VisualState {
        display,
        flipped: flipped && run_state != RunState::Finished,
        activity_highlighted: display == Display::Activity,
        interval_highlighted: display == Display::Interval,
        controls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_standby() {
        let v = visual_state(RunState::Idle, Some(PhaseKind::Ready), false);
        assert_eq!(v.display, Display::Standby);
        assert!(v.controls.start);
        assert!(!v.controls.pause);
    }

    #[test]
    fn running_interval_highlights_interval() {
        let v = visual_state(RunState::Running, Some(PhaseKind::Interval), true);
        assert_eq!(v.display, Display::Interval);
        assert!(v.interval_highlighted);
        assert!(!v.activity_highlighted);
        assert!(v.flipped);
    }

    #[test]
    fn finished_clears_flip_and_disables_start() {
        let v = visual_state(RunState::Finished, None, true);
        assert_eq!(v.display, Display::Finished);
        assert!(!v.flipped);
        assert!(!v.controls.start);
        assert!(!v.controls.pause);
        assert!(v.controls.reset);
    }
}
