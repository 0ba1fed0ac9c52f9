//! The strip of values drawn around a picker's current value.
//!
//! Only `2 * radius + 1` slots exist regardless of the picker's range. A
//! step of `n` drops `n` slots off one end and computes `n` new ones at the
//! other, so scrolling costs O(step) instead of regenerating the range.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::format::value_label;

/// Inclusive value range, optionally wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
    pub looped: bool,
}

impl Bounds {
    pub fn span(&self) -> i64 {
        self.max - self.min + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Shift `value` by whole multiples of the span until it lies in range.
    pub fn normalize(&self, value: i64) -> i64 {
        self.min + (value - self.min).rem_euclid(self.span())
    }

    /// What occupies the slot for `value`: the wrapped value for looping
    /// bounds, nothing past the ends otherwise.
    pub fn resolve(&self, value: i64) -> Option<i64> {
        if self.looped {
            Some(self.normalize(value))
        } else if self.contains(value) {
            Some(value)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValueWindow {
    bounds: Bounds,
    radius: usize,
    /// Unwrapped value at the center slot.
    center: i64,
    slots: VecDeque<Option<i64>>,
}

impl ValueWindow {
    pub fn new(bounds: Bounds, radius: usize, center: i64) -> Self {
        let mut window = Self {
            bounds,
            radius,
            center,
            slots: VecDeque::with_capacity(2 * radius + 1),
        };
        window.rebuild(center);
        window
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        self.slots.iter().copied()
    }

    pub fn current(&self) -> Option<i64> {
        self.slots.get(self.radius).copied().flatten()
    }

    pub fn labels(&self, zero_padded: bool) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(v) => value_label(*v, zero_padded),
                None => String::new(),
            })
            .collect()
    }

    /// Recenter on `value` from scratch.
    pub fn rebuild(&mut self, value: i64) {
        let r = self.radius as i64;
        self.center = value;
        self.slots.clear();
        for offset in -r..=r {
            self.slots.push_back(self.bounds.resolve(value + offset));
        }
    }

    /// Move the center by `delta` positions.
    pub fn shift(&mut self, delta: i64) {
        if delta.unsigned_abs() as usize >= self.slots.len() {
            let target = self.center + delta;
            self.rebuild(target);
            return;
        }

        let r = self.radius as i64;
        if delta > 0 {
            for i in 1..=delta {
                self.slots.pop_front();
                self.slots.push_back(self.bounds.resolve(self.center + r + i));
            }
        } else {
            for i in 1..=-delta {
                self.slots.pop_back();
                self.slots.push_front(self.bounds.resolve(self.center - r - i));
            }
        }
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECONDS: Bounds = Bounds {
        min: 0,
        max: 59,
        looped: true,
    };
    const MINUTES: Bounds = Bounds {
        min: 0,
        max: 30,
        looped: false,
    };

    #[test]
    fn normalize_wraps_both_ways() {
        assert_eq!(SECONDS.normalize(63), 3);
        assert_eq!(SECONDS.normalize(-1), 59);
        assert_eq!(SECONDS.normalize(-61), 59);
        assert_eq!(SECONDS.normalize(120), 0);
        let sets = Bounds {
            min: 1,
            max: 20,
            looped: true,
        };
        assert_eq!(sets.normalize(21), 1);
        assert_eq!(sets.normalize(0), 20);
    }

    #[test]
    fn looped_window_wraps_labels() {
        let w = ValueWindow::new(SECONDS, 2, 58);
        assert_eq!(w.labels(true), vec!["56", "57", "58", "59", "00"]);
        assert_eq!(w.current(), Some(58));
    }

    #[test]
    fn bounded_window_has_blank_edges() {
        let w = ValueWindow::new(MINUTES, 2, 0);
        assert_eq!(w.labels(false), vec!["", "", "0", "1", "2"]);
    }

    #[test]
    fn shift_matches_rebuild() {
        for delta in [-9i64, -3, -1, 1, 2, 5, 7, 15, 40] {
            let mut shifted = ValueWindow::new(SECONDS, 7, 58);
            shifted.shift(delta);
            let fresh = ValueWindow::new(SECONDS, 7, 58 + delta);
            assert_eq!(
                shifted.slots().collect::<Vec<_>>(),
                fresh.slots().collect::<Vec<_>>(),
                "delta {delta}"
            );
        }
    }

    #[test]
    fn shift_keeps_window_size() {
        let mut w = ValueWindow::new(MINUTES, 7, 28);
        w.shift(2);
        assert_eq!(w.len(), 15);
        assert_eq!(w.current(), Some(30));
        assert_eq!(w.slots().last(), Some(None));
    }
}
