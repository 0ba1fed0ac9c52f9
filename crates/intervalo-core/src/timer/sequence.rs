use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Ready,
    Activity,
    Interval,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Ready => "ready",
            PhaseKind::Activity => "activity",
            PhaseKind::Interval => "interval",
        }
    }
}

/// Shared per-kind configuration. Every Activity phase in a sequence points
/// at the same Activity template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTemplate {
    pub kind: PhaseKind,
    pub duration_secs: u32,
}

impl PhaseTemplate {
    /// Uses saturating arithmetic so absurd durations cannot overflow.
    pub fn duration_ms(&self) -> u64 {
        u64::from(self.duration_secs).saturating_mul(1000)
    }
}

/// One slot in a built sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub ordinal: usize,
    /// Index into [`PhaseSequence::templates`].
    pub template: usize,
}

/// Input to [`PhaseSequence::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub ready_secs: u32,
    pub activity_secs: u32,
    pub interval_secs: u32,
    pub set_count: u32,
    pub include_trailing_interval: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            ready_secs: 5,
            activity_secs: 20,
            interval_secs: 10,
            set_count: 8,
            include_trailing_interval: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSequence {
    templates: Vec<PhaseTemplate>,
    phases: Vec<Phase>,
    set_count: u32,
}

const READY: usize = 0;
const ACTIVITY: usize = 1;
const INTERVAL: usize = 2;

impl PhaseSequence {
    /// Build the phase list for one workout.
    ///
    /// One Ready phase, then `set_count - 1` rounds of Activity followed by
    /// Interval, then the final Activity, then an optional trailing Interval.
    /// Intervals are left out entirely when `interval_secs` is zero.
    pub fn build(config: &SequenceConfig) -> Result<Self> {
        if config.set_count < 1 {
            return Err(CoreError::invalid(
                "set_count",
                format!("must be at least 1, got {}", config.set_count),
            ));
        }

        let templates = vec![
            PhaseTemplate {
                kind: PhaseKind::Ready,
                duration_secs: config.ready_secs,
            },
            PhaseTemplate {
                kind: PhaseKind::Activity,
                duration_secs: config.activity_secs,
            },
            PhaseTemplate {
                kind: PhaseKind::Interval,
                duration_secs: config.interval_secs,
            },
        ];
        let with_intervals = config.interval_secs > 0;

        let mut slots = vec![READY];
        for _ in 1..config.set_count {
            slots.push(ACTIVITY);
            if with_intervals {
                slots.push(INTERVAL);
            }
        }
        slots.push(ACTIVITY);
        if config.include_trailing_interval && with_intervals {
            slots.push(INTERVAL);
        }

        let phases = slots
            .into_iter()
            .enumerate()
            .map(|(ordinal, template)| Phase { ordinal, template })
            .collect();

        Ok(Self {
            templates,
            phases,
            set_count: config.set_count,
        })
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn set_count(&self) -> u32 {
        self.set_count
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn templates(&self) -> &[PhaseTemplate] {
        &self.templates
    }

    pub fn template_at(&self, index: usize) -> Option<&PhaseTemplate> {
        self.phases
            .get(index)
            .and_then(|p| self.templates.get(p.template))
    }

    pub fn kind_at(&self, index: usize) -> Option<PhaseKind> {
        self.template_at(index).map(|t| t.kind)
    }

    pub fn kinds(&self) -> Vec<PhaseKind> {
        (0..self.len()).filter_map(|i| self.kind_at(i)).collect()
    }

    pub fn count_of(&self, kind: PhaseKind) -> usize {
        (0..self.len())
            .filter(|&i| self.kind_at(i) == Some(kind))
            .count()
    }

    pub fn has_interval(&self) -> bool {
        self.count_of(PhaseKind::Interval) > 0
    }

    /// Workout length in seconds, Ready excluded.
    pub fn total_secs(&self) -> u64 {
        self.remaining_after_secs(0)
    }

    /// Seconds of non-Ready phases strictly after `index`.
    pub fn remaining_after_secs(&self, index: usize) -> u64 {
        (index + 1..self.len())
            .filter_map(|i| self.template_at(i))
            .filter(|t| t.kind != PhaseKind::Ready)
            .map(|t| u64::from(t.duration_secs))
            .sum()
    }
}
