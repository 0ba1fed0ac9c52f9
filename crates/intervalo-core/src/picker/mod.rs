//! Rotary value picker.
//!
//! A bounded integer selector driven by pointer input. Dragging past the
//! dead zone steps the value by one; releasing quickly adds a flick of up to
//! `max_flick_step` more, scaled linearly by release velocity. Looping
//! pickers wrap from max to min and back.
//!
//! ## Usage
//!
//! ```ignore
//! let mut seconds = Picker::new(PickerConfig::looped(0, 59, true), PickerTuning::default())?;
//! seconds.set(58)?;
//! seconds.up(5);
//! assert_eq!(seconds.get(), 3);
//! ```

mod gesture;
mod window;

pub use gesture::{Flick, PickerTuning, PointerKind};
pub use window::{Bounds, ValueWindow};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::observer::Subject;
use gesture::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    pub min: i64,
    pub max: i64,
    pub loop_enabled: bool,
    pub zero_padded: bool,
}

impl PickerConfig {
    pub fn bounded(min: i64, max: i64, zero_padded: bool) -> Self {
        Self {
            min,
            max,
            loop_enabled: false,
            zero_padded,
        }
    }

    pub fn looped(min: i64, max: i64, zero_padded: bool) -> Self {
        Self {
            min,
            max,
            loop_enabled: true,
            zero_padded,
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            min: self.min,
            max: self.max,
            looped: self.loop_enabled,
        }
    }
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickOutcome {
    pub elapsed_ms: u64,
    pub velocity: f64,
    /// Steps the flick asked for.
    pub steps: u32,
    /// Steps actually taken after clamping at the bounds.
    pub applied: u32,
}

#[derive(Debug)]
pub struct Picker {
    config: PickerConfig,
    tuning: PickerTuning,
    value: i64,
    window: ValueWindow,
    gesture: Option<Gesture>,
    changes: Subject<i64>,
}

impl Picker {
    /// Create a picker resting on its minimum.
    pub fn new(config: PickerConfig, tuning: PickerTuning) -> Result<Self> {
        if config.min > config.max {
            return Err(CoreError::invalid(
                "picker",
                format!("min {} exceeds max {}", config.min, config.max),
            ));
        }
        Ok(Self {
            config,
            tuning,
            value: config.min,
            window: ValueWindow::new(config.bounds(), tuning.window_radius, config.min),
            gesture: None,
            changes: Subject::new("picker"),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn get(&self) -> i64 {
        self.value
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn label(&self) -> String {
        crate::format::value_label(self.value, self.config.zero_padded)
    }

    /// Labels of the visible strip, current value in the middle.
    pub fn window_labels(&self) -> Vec<String> {
        self.window.labels(self.config.zero_padded)
    }

    pub fn window(&self) -> &ValueWindow {
        &self.window
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Subscribers hear every value change.
    pub fn changes_mut(&mut self) -> &mut Subject<i64> {
        &mut self.changes
    }

    // ── Value changes ────────────────────────────────────────────────

    /// Jump to `value`. Values outside the bounds are rejected and leave
    /// the picker untouched, for looping pickers too.
    pub fn set(&mut self, value: i64) -> Result<()> {
        if !self.config.bounds().contains(value) {
            tracing::warn!(
                value,
                min = self.config.min,
                max = self.config.max,
                "picker value out of range, ignored"
            );
            return Err(CoreError::OutOfRange {
                value,
                min: self.config.min,
                max: self.config.max,
            });
        }
        if value != self.value {
            self.value = value;
            self.window.rebuild(value);
            self.changes.notify(&value);
        }
        Ok(())
    }

    /// Move up by `step`. Returns how many positions were actually moved,
    /// which is less than `step` when a bounded picker hits its maximum.
    pub fn up(&mut self, step: u32) -> u32 {
        self.move_by(i64::from(step))
    }

    /// Move down by `step`; see [`Picker::up`].
    pub fn down(&mut self, step: u32) -> u32 {
        self.move_by(-i64::from(step))
    }

    fn move_by(&mut self, delta: i64) -> u32 {
        let bounds = self.config.bounds();
        let (next, moved) = if bounds.looped {
            (bounds.normalize(self.value + delta), delta)
        } else {
            let target = (self.value + delta).clamp(bounds.min, bounds.max);
            (target, target - self.value)
        };
        if moved == 0 {
            return 0;
        }

        self.window.shift(moved);
        let previous = self.value;
        self.value = next;
        if next != previous {
            self.changes.notify(&next);
        }
        moved.unsigned_abs() as u32
    }

    // ── Pointer input ────────────────────────────────────────────────

    pub fn pointer_down(&mut self, kind: PointerKind, y: f64, at_ms: u64) {
        self.gesture = Some(Gesture::new(kind, y, at_ms));
    }

    /// Feed a drag sample. Returns the signed number of steps taken.
    /// Moves without a preceding press (a hovering mouse) do nothing.
    pub fn pointer_move(&mut self, y: f64) -> i64 {
        let Some(gesture) = self.gesture.as_mut() else {
            return 0;
        };
        let dead_zone = self.tuning.dead_zone(gesture.kind);
        match gesture.sample(y, dead_zone) {
            1 => i64::from(self.up(1)),
            -1 => -i64::from(self.down(1)),
            _ => 0,
        }
    }

    /// Finish the gesture and apply any flick. `None` when no gesture was
    /// in progress.
    pub fn pointer_up(&mut self, at_ms: u64) -> Option<FlickOutcome> {
        let gesture = self.gesture.take()?;
        let elapsed_ms = at_ms.saturating_sub(gesture.start_ms);
        let flick = self.tuning.flick(gesture.displacement(), elapsed_ms);

        let applied = if flick.steps == 0 {
            0
        } else if flick.velocity > 0.0 {
            self.up(flick.steps)
        } else {
            self.down(flick.steps)
        };
        tracing::debug!(
            elapsed_ms,
            velocity = flick.velocity,
            steps = flick.steps,
            value = self.value,
            "picker release"
        );

        Some(FlickOutcome {
            elapsed_ms,
            velocity: flick.velocity,
            steps: flick.steps,
            applied,
        })
    }

    /// The pointer left the widget mid-drag; treated as a release.
    pub fn pointer_leave(&mut self, at_ms: u64) -> Option<FlickOutcome> {
        self.pointer_up(at_ms)
    }
}
