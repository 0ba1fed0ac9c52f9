use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{PhaseKind, RunState, VisualState};

/// Remaining whole seconds of one phase changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUpdate {
    pub phase_index: usize,
    pub kind: PhaseKind,
    pub remaining_secs: u64,
}

/// Continuous progress through the running phase, once per poll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub phase_index: usize,
    pub kind: PhaseKind,
    /// 0.0 .. 1.0
    pub fraction: f64,
    /// Arc end angle in degrees.
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetUpdate {
    pub current: u32,
    pub total: u32,
}

/// Whole-workout countdown, Ready excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalUpdate {
    pub remaining_secs: u64,
    pub total_secs: u64,
}

/// A phase became the active one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub phase_index: usize,
    pub kind: PhaseKind,
    pub visual: VisualState,
}

/// Sound cue identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    CountDown,
    CountUp,
    Finish,
}

impl Cue {
    pub fn id(&self) -> &'static str {
        match self {
            Cue::CountDown => "count-down",
            Cue::CountUp => "count-up",
            Cue::Finish => "finish",
        }
    }
}

/// Audio sink. Fire-and-forget: implementations must not block and must
/// tolerate the same cue arriving in rapid succession.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Every notification in serializable form, for logs and JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    RunStateChanged {
        state: RunState,
        at: DateTime<Utc>,
    },
    PhaseStarted {
        phase_index: usize,
        kind: PhaseKind,
        visual: VisualState,
        at: DateTime<Utc>,
    },
    TimeUpdated {
        phase_index: usize,
        kind: PhaseKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SetUpdated {
        current: u32,
        total: u32,
        at: DateTime<Utc>,
    },
    TotalUpdated {
        remaining_secs: u64,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    CuePlayed {
        cue: Cue,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: RunState,
        phase_index: usize,
        kind: Option<PhaseKind>,
        remaining_ms: u64,
        current_set: u32,
        set_count: u32,
        total_remaining_secs: u64,
        visual: VisualState,
        at: DateTime<Utc>,
    },
}

impl From<&TimeUpdate> for Event {
    fn from(u: &TimeUpdate) -> Self {
        Event::TimeUpdated {
            phase_index: u.phase_index,
            kind: u.kind,
            remaining_secs: u.remaining_secs,
            at: Utc::now(),
        }
    }
}

impl From<&SetUpdate> for Event {
    fn from(u: &SetUpdate) -> Self {
        Event::SetUpdated {
            current: u.current,
            total: u.total,
            at: Utc::now(),
        }
    }
}

impl From<&TotalUpdate> for Event {
    fn from(u: &TotalUpdate) -> Self {
        Event::TotalUpdated {
            remaining_secs: u.remaining_secs,
            total_secs: u.total_secs,
            at: Utc::now(),
        }
    }
}

impl From<&PhaseTransition> for Event {
    fn from(t: &PhaseTransition) -> Self {
        Event::PhaseStarted {
            phase_index: t.phase_index,
            kind: t.kind,
            visual: t.visual,
            at: Utc::now(),
        }
    }
}

impl From<&Cue> for Event {
    fn from(cue: &Cue) -> Self {
        Event::CuePlayed {
            cue: *cue,
            at: Utc::now(),
        }
    }
}

impl From<&RunState> for Event {
    fn from(state: &RunState) -> Self {
        Event::RunStateChanged {
            state: *state,
            at: Utc::now(),
        }
    }
}
