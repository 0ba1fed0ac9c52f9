//! Persisted workout settings.
//!
//! Five keys live in the flat store, all durations in whole seconds:
//! `activityTime`, `intervalTime`, `setNumber`, `hasLastInterval` and
//! `useSound`. Missing keys fall back to defaults; present but malformed
//! keys are configuration errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Config, KeyValueStore};
use crate::clock::Clock;
use crate::error::{CoreError, Result};
use crate::timer::{ArcAngles, PhaseSequence, SequenceConfig, TimerController};

/// Store keys.
pub mod keys {
    pub const ACTIVITY_TIME: &str = "activityTime";
    pub const INTERVAL_TIME: &str = "intervalTime";
    pub const SET_NUMBER: &str = "setNumber";
    pub const HAS_LAST_INTERVAL: &str = "hasLastInterval";
    pub const USE_SOUND: &str = "useSound";
}

/// Serializes with the store key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSettings {
    #[serde(rename = "activityTime")]
    pub activity_secs: u32,
    #[serde(rename = "intervalTime")]
    pub interval_secs: u32,
    #[serde(rename = "setNumber")]
    pub set_count: u32,
    #[serde(rename = "hasLastInterval")]
    pub has_last_interval: bool,
    #[serde(rename = "useSound")]
    pub use_sound: bool,
}

impl Default for WorkoutSettings {
    fn default() -> Self {
        Self {
            activity_secs: 20,
            interval_secs: 10,
            set_count: 8,
            has_last_interval: true,
            use_sound: true,
        }
    }
}

impl WorkoutSettings {
    /// Read settings from `store`.
    ///
    /// A stored activity of zero seconds is bumped to one.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let defaults = Self::default();
        let mut settings = Self {
            activity_secs: read_u32(store, keys::ACTIVITY_TIME, defaults.activity_secs)?,
            interval_secs: read_u32(store, keys::INTERVAL_TIME, defaults.interval_secs)?,
            set_count: read_u32(store, keys::SET_NUMBER, defaults.set_count)?,
            has_last_interval: read_bool(store, keys::HAS_LAST_INTERVAL, defaults.has_last_interval)?,
            use_sound: read_bool(store, keys::USE_SOUND, defaults.use_sound)?,
        };
        if settings.activity_secs == 0 {
            tracing::debug!("stored activity time is zero, using 1s");
            settings.activity_secs = 1;
        }
        Ok(settings)
    }

    /// Write all five keys. The caller decides when to flush.
    pub fn store<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.set(keys::ACTIVITY_TIME, Value::from(self.activity_secs));
        store.set(keys::INTERVAL_TIME, Value::from(self.interval_secs));
        store.set(keys::SET_NUMBER, Value::from(self.set_count));
        store.set(keys::HAS_LAST_INTERVAL, Value::Bool(self.has_last_interval));
        store.set(keys::USE_SOUND, Value::Bool(self.use_sound));
    }

    pub fn sequence_config(&self, ready_secs: u32) -> SequenceConfig {
        SequenceConfig {
            ready_secs,
            activity_secs: self.activity_secs,
            interval_secs: self.interval_secs,
            set_count: self.set_count,
            include_trailing_interval: self.has_last_interval,
        }
    }

    /// Workout length in seconds, ready count excluded.
    pub fn total_secs(&self) -> u64 {
        let activity = u64::from(self.activity_secs);
        let interval = u64::from(self.interval_secs);
        let sets = u64::from(self.set_count);
        let trailing = if self.has_last_interval { interval } else { 0 };
        activity * sets + interval * sets.saturating_sub(1) + trailing
    }

    /// Build a controller for these settings using the timing in `config`.
    pub fn controller<C: Clock>(&self, config: &Config, clock: C) -> Result<TimerController<C>> {
        let sequence = PhaseSequence::build(&self.sequence_config(config.timer.ready_secs))?;
        let arc = ArcAngles {
            start_deg: config.timer.arc_start_deg,
            end_deg: config.timer.arc_end_deg,
        };
        Ok(TimerController::new(sequence, clock).with_arc(arc))
    }
}

/// Split seconds into (minutes, seconds).
pub(crate) fn split_secs(secs: u32) -> (u32, u32) {
    (secs / 60, secs % 60)
}

fn read_u32<S: KeyValueStore + ?Sized>(store: &S, key: &str, default: u32) -> Result<u32> {
    let parsed = match store.get(key) {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            CoreError::invalid(key, format!("expected a whole number of seconds, got {n}"))
        })?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::invalid(key, format!("expected an integer, got {s:?}")))?,
        Some(other) => {
            return Err(CoreError::invalid(key, format!("expected an integer, got {other}")));
        }
    };
    u32::try_from(parsed).map_err(|_| CoreError::invalid(key, format!("{parsed} is out of range")))
}

fn read_bool<S: KeyValueStore + ?Sized>(store: &S, key: &str, default: bool) -> Result<bool> {
    match store.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => s
            .parse::<bool>()
            .map_err(|_| CoreError::invalid(key, format!("expected true or false, got {s:?}"))),
        Some(other) => Err(CoreError::invalid(key, format!("expected a boolean, got {other}"))),
    }
}
