//! Settings editor backed by pickers.
//!
//! Durations are edited as separate minute and second pickers. Sets and
//! minutes stop at their bounds; seconds wrap and are shown zero-padded.

use serde::{Deserialize, Serialize};

use super::settings::split_secs;
use super::{KeyValueStore, WorkoutSettings};
use crate::error::{CoreError, Result};
use crate::picker::{Picker, PickerConfig, PickerTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsField {
    Sets,
    ActivityMinutes,
    ActivitySeconds,
    IntervalMinutes,
    IntervalSeconds,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::Sets,
        SettingsField::ActivityMinutes,
        SettingsField::ActivitySeconds,
        SettingsField::IntervalMinutes,
        SettingsField::IntervalSeconds,
    ];

    fn picker_config(self) -> PickerConfig {
        match self {
            SettingsField::Sets => PickerConfig::bounded(1, 20, false),
            SettingsField::ActivityMinutes | SettingsField::IntervalMinutes => {
                PickerConfig::bounded(0, 30, false)
            }
            SettingsField::ActivitySeconds | SettingsField::IntervalSeconds => {
                PickerConfig::looped(0, 59, true)
            }
        }
    }
}

#[derive(Debug)]
pub struct SettingsForm {
    sets: Picker,
    activity_min: Picker,
    activity_sec: Picker,
    interval_min: Picker,
    interval_sec: Picker,
    has_last_interval: bool,
    use_sound: bool,
}

impl SettingsForm {
    /// Seed every picker from `settings`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if a stored value does not fit its picker, e.g.
    /// an activity longer than 30:59.
    pub fn new(settings: &WorkoutSettings, tuning: PickerTuning) -> Result<Self> {
        let picker = |field: SettingsField| form_picker(field, field.picker_config(), tuning);
        let mut form = Self {
            sets: picker(SettingsField::Sets)?,
            activity_min: picker(SettingsField::ActivityMinutes)?,
            activity_sec: picker(SettingsField::ActivitySeconds)?,
            interval_min: picker(SettingsField::IntervalMinutes)?,
            interval_sec: picker(SettingsField::IntervalSeconds)?,
            has_last_interval: settings.has_last_interval,
            use_sound: settings.use_sound,
        };
        form.sets.set(i64::from(settings.set_count))?;
        form.set_activity(settings.activity_secs)?;
        form.set_interval(settings.interval_secs)?;
        Ok(form)
    }

    pub fn picker(&self, field: SettingsField) -> &Picker {
        match field {
            SettingsField::Sets => &self.sets,
            SettingsField::ActivityMinutes => &self.activity_min,
            SettingsField::ActivitySeconds => &self.activity_sec,
            SettingsField::IntervalMinutes => &self.interval_min,
            SettingsField::IntervalSeconds => &self.interval_sec,
        }
    }

    /// For routing pointer input to one picker.
    pub fn picker_mut(&mut self, field: SettingsField) -> &mut Picker {
        match field {
            SettingsField::Sets => &mut self.sets,
            SettingsField::ActivityMinutes => &mut self.activity_min,
            SettingsField::ActivitySeconds => &mut self.activity_sec,
            SettingsField::IntervalMinutes => &mut self.interval_min,
            SettingsField::IntervalSeconds => &mut self.interval_sec,
        }
    }

    pub fn set_activity(&mut self, secs: u32) -> Result<()> {
        let (min, sec) = split_secs(secs);
        self.activity_min.set(i64::from(min))?;
        self.activity_sec.set(i64::from(sec))
    }

    pub fn set_interval(&mut self, secs: u32) -> Result<()> {
        let (min, sec) = split_secs(secs);
        self.interval_min.set(i64::from(min))?;
        self.interval_sec.set(i64::from(sec))
    }

    pub fn set_sets(&mut self, sets: u32) -> Result<()> {
        self.sets.set(i64::from(sets))
    }

    pub fn set_has_last_interval(&mut self, value: bool) {
        self.has_last_interval = value;
    }

    pub fn set_use_sound(&mut self, value: bool) {
        self.use_sound = value;
    }

    /// Settings as currently shown, without the one-second activity floor.
    pub fn current(&self) -> WorkoutSettings {
        WorkoutSettings {
            activity_secs: picker_secs(&self.activity_min, &self.activity_sec),
            interval_secs: picker_secs(&self.interval_min, &self.interval_sec),
            set_count: picker_u32(&self.sets),
            has_last_interval: self.has_last_interval,
            use_sound: self.use_sound,
        }
    }

    /// Write the form to `store` and flush.
    ///
    /// A 0:00 activity is moved to 0:01 on the seconds picker first, so the
    /// form shows what was saved.
    pub fn commit<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<WorkoutSettings> {
        if self.activity_min.get() == 0 && self.activity_sec.get() == 0 {
            tracing::debug!("activity time 0:00, stepping seconds to 1");
            self.activity_sec.up(1);
        }
        let settings = self.current();
        settings.store(store);
        store.flush()?;
        tracing::info!(
            activity = settings.activity_secs,
            interval = settings.interval_secs,
            sets = settings.set_count,
            "settings saved"
        );
        Ok(settings)
    }
}

/// Form values are stored unsigned, so a picker that could go negative is
/// a configuration error.
fn form_picker(field: SettingsField, config: PickerConfig, tuning: PickerTuning) -> Result<Picker> {
    if config.min < 0 {
        return Err(CoreError::invalid(
            format!("{field:?}"),
            format!("minimum {} is below zero", config.min),
        ));
    }
    Picker::new(config, tuning)
}

/// Only called on pickers built by `form_picker`, whose values are never
/// negative.
fn picker_u32(picker: &Picker) -> u32 {
    debug_assert!(picker.get() >= 0, "form picker went negative");
    u32::try_from(picker.get()).unwrap_or(0)
}

fn picker_secs(minutes: &Picker, seconds: &Picker) -> u32 {
    picker_u32(minutes)
        .saturating_mul(60)
        .saturating_add(picker_u32(seconds))
}
