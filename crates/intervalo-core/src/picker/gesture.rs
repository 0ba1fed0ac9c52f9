//! Drag and flick physics.
//!
//! The y axis grows downward, so a finger moving up the screen produces a
//! positive displacement and scrolls the value up.

use serde::{Deserialize, Serialize};

/// Input device that produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Calibration knobs for how a picker feels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerTuning {
    /// Movement, in display units, before a mouse drag steps once.
    #[serde(default = "default_mouse_dead_zone")]
    pub mouse_dead_zone: f64,
    /// Same for touch input.
    #[serde(default = "default_touch_dead_zone")]
    pub touch_dead_zone: f64,
    /// Release velocity (units per second) per flick step.
    #[serde(default = "default_velocity_divisor")]
    pub velocity_divisor: f64,
    #[serde(default = "default_max_flick_step")]
    pub max_flick_step: u32,
    /// Gestures longer than this are slow drags and get no flick.
    #[serde(default = "default_slow_drag_cutoff_ms")]
    pub slow_drag_cutoff_ms: u64,
    /// Slots drawn on each side of the current value.
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
}

fn default_mouse_dead_zone() -> f64 {
    5.0
}
fn default_touch_dead_zone() -> f64 {
    10.0
}
fn default_velocity_divisor() -> f64 {
    100.0
}
fn default_max_flick_step() -> u32 {
    7
}
fn default_slow_drag_cutoff_ms() -> u64 {
    500
}
fn default_window_radius() -> usize {
    7
}

impl Default for PickerTuning {
    fn default() -> Self {
        Self {
            mouse_dead_zone: default_mouse_dead_zone(),
            touch_dead_zone: default_touch_dead_zone(),
            velocity_divisor: default_velocity_divisor(),
            max_flick_step: default_max_flick_step(),
            slow_drag_cutoff_ms: default_slow_drag_cutoff_ms(),
            window_radius: default_window_radius(),
        }
    }
}

impl PickerTuning {
    pub fn dead_zone(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse_dead_zone,
            PointerKind::Touch => self.touch_dead_zone,
        }
    }

    /// Average velocity and step count for a release.
    ///
    /// `velocity = displacement * 1000 / elapsed_ms` and
    /// `steps = round(|velocity| / divisor)` capped at `max_flick_step`.
    /// A zero-length or slow gesture yields no steps.
    pub fn flick(&self, displacement: f64, elapsed_ms: u64) -> Flick {
        if elapsed_ms == 0 || elapsed_ms > self.slow_drag_cutoff_ms {
            return Flick {
                velocity: 0.0,
                steps: 0,
            };
        }
        let velocity = displacement * 1000.0 / elapsed_ms as f64;
        let raw = (velocity.abs() / self.velocity_divisor).round();
        let steps = raw.min(f64::from(self.max_flick_step)) as u32;
        Flick { velocity, steps }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flick {
    /// Signed, display units per second; positive scrolls up.
    pub velocity: f64,
    pub steps: u32,
}

/// One press-drag-release in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Gesture {
    pub kind: PointerKind,
    pub start_y: f64,
    pub start_ms: u64,
    /// Most recent sample. Dead-zone checks measure from here.
    pub latest_y: f64,
}

impl Gesture {
    pub fn new(kind: PointerKind, y: f64, at_ms: u64) -> Self {
        Self {
            kind,
            start_y: y,
            start_ms: at_ms,
            latest_y: y,
        }
    }

    /// Record a sample. Returns +1/-1 when the move since the previous
    /// sample is larger than the dead zone.
    pub fn sample(&mut self, y: f64, dead_zone: f64) -> i64 {
        let dy = self.latest_y - y;
        self.latest_y = y;
        if dy > dead_zone {
            1
        } else if dy < -dead_zone {
            -1
        } else {
            0
        }
    }

    pub fn displacement(&self) -> f64 {
        self.start_y - self.latest_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flick_of_100_units_in_200ms_is_five_steps() {
        let flick = PickerTuning::default().flick(100.0, 200);
        assert_eq!(flick.velocity, 500.0);
        assert_eq!(flick.steps, 5);
    }

    #[test]
    fn flick_steps_are_capped() {
        let flick = PickerTuning::default().flick(-400.0, 100);
        assert_eq!(flick.velocity, -4000.0);
        assert_eq!(flick.steps, 7);
    }

    #[test]
    fn slow_or_instant_release_has_no_flick() {
        let tuning = PickerTuning::default();
        assert_eq!(tuning.flick(300.0, 501).steps, 0);
        assert_eq!(tuning.flick(300.0, 0).steps, 0);
        assert_eq!(tuning.flick(300.0, 500).steps, 6);
    }

    #[test]
    fn flick_rounds_half_away_from_zero() {
        let tuning = PickerTuning::default();
        assert_eq!(tuning.flick(25.0, 100).steps, 3); // 250 -> 2.5
        assert_eq!(tuning.flick(24.0, 100).steps, 2); // 240 -> 2.4
    }

    #[test]
    fn dead_zone_depends_on_pointer() {
        let mut g = Gesture::new(PointerKind::Touch, 100.0, 0);
        assert_eq!(g.sample(93.0, 10.0), 0);
        assert_eq!(g.sample(81.0, 10.0), 1);
        assert_eq!(g.sample(88.0, 10.0), 0);
        assert_eq!(g.sample(100.0, 10.0), -1);
        assert_eq!(g.displacement(), 0.0);
        assert_eq!(PickerTuning::default().dead_zone(PointerKind::Mouse), 5.0);
    }

    #[test]
    fn small_moves_do_not_add_up() {
        let mut g = Gesture::new(PointerKind::Touch, 100.0, 0);
        for y in [95.0, 90.0, 85.0, 80.0, 75.0] {
            assert_eq!(g.sample(y, 10.0), 0);
        }
        assert_eq!(g.displacement(), 25.0);
    }
}
