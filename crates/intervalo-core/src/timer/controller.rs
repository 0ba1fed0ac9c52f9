//! Workout controller.
//!
//! Owns the built [`PhaseSequence`], one [`SegmentTimer`] per sequence
//! position, the set counter and the run state. Like the segments it has no
//! thread of its own: the host calls [`TimerController::poll`] (or
//! [`TimerController::on_frame`] with a token from
//! [`TimerController::schedule_frame`]) whenever it gets a chance to redraw.
//!
//! A single poll that finds the active phase finished runs that phase's
//! completion effects, starts the next one and, if the host was suspended
//! long enough, keeps going through every phase that has already elapsed.
//! Observers never see a half-advanced run.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |
//!           v
//!        Finished        (reset() returns any state to Idle)
//! ```

use serde::{Deserialize, Serialize};

use super::segment::{whole_seconds, SegmentState, SegmentTimer, SegmentToken};
use super::sequence::{PhaseKind, PhaseSequence};
use super::visual::{visual_state, VisualState};
use crate::clock::Clock;
use crate::events::{
    Cue, CuePlayer, Event, PhaseTransition, ProgressUpdate, SetUpdate, TimeUpdate, TotalUpdate,
};
use crate::observer::{Subject, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Start and end angle of the progress arc, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcAngles {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Default for ArcAngles {
    fn default() -> Self {
        Self {
            start_deg: -90.0,
            end_deg: 270.0,
        }
    }
}

/// Handle for one scheduled recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken {
    phase_index: usize,
    segment: SegmentToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Not running; nothing to do.
    Inactive,
    /// The token was issued before a pause, reset or phase change.
    Stale,
    /// Recomputed; `advanced` phases completed during this poll.
    Ticked { advanced: usize },
    /// The last phase completed during this poll.
    Finished,
}

/// Subjects the controller publishes on.
#[derive(Debug)]
pub struct Signals {
    pub time: Subject<TimeUpdate>,
    pub progress: Subject<ProgressUpdate>,
    pub sets: Subject<SetUpdate>,
    pub total: Subject<TotalUpdate>,
    pub phases: Subject<PhaseTransition>,
    pub cues: Subject<Cue>,
    pub run_state: Subject<RunState>,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            time: Subject::new("time"),
            progress: Subject::new("progress"),
            sets: Subject::new("sets"),
            total: Subject::new("total"),
            phases: Subject::new("phases"),
            cues: Subject::new("cues"),
            run_state: Subject::new("run_state"),
        }
    }
}

/// Point-in-time view of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub state: RunState,
    pub phase_index: usize,
    pub kind: Option<PhaseKind>,
    pub remaining_ms: u64,
    pub current_set: u32,
    pub set_count: u32,
    pub total_remaining_secs: u64,
    pub visual: VisualState,
}

pub struct TimerController<C: Clock> {
    sequence: PhaseSequence,
    segments: Vec<SegmentTimer>,
    phase_index: usize,
    current_set: u32,
    run_state: RunState,
    flipped: bool,
    arc: ArcAngles,
    last_total_second: Option<u64>,
    clock: C,
    signals: Signals,
}

impl<C: Clock> TimerController<C> {
    pub fn new(sequence: PhaseSequence, clock: C) -> Self {
        let segments = (0..sequence.len())
            .map(|i| {
                let duration = sequence.template_at(i).map(|t| t.duration_ms()).unwrap_or(0);
                SegmentTimer::new(duration)
            })
            .collect();
        Self {
            sequence,
            segments,
            phase_index: 0,
            current_set: 0,
            run_state: RunState::Idle,
            flipped: false,
            arc: ArcAngles::default(),
            last_total_second: None,
            clock,
            signals: Signals::default(),
        }
    }

    pub fn with_arc(mut self, arc: ArcAngles) -> Self {
        self.arc = arc;
        self
    }

    pub fn signals_mut(&mut self) -> &mut Signals {
        &mut self.signals
    }

    /// Route cues to an audio sink.
    pub fn attach_player<P: CuePlayer + 'static>(&mut self, mut player: P) -> SubscriptionId {
        self.signals.cues.subscribe_fn(move |cue| player.play(*cue))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn sequence(&self) -> &PhaseSequence {
        &self.sequence
    }

    pub fn current_kind(&self) -> Option<PhaseKind> {
        if self.run_state == RunState::Finished {
            return None;
        }
        self.sequence.kind_at(self.phase_index)
    }

    /// Remaining time of the active phase.
    pub fn remaining_ms(&self) -> u64 {
        if self.run_state == RunState::Finished {
            return 0;
        }
        self.segments
            .get(self.phase_index)
            .map(|s| s.remaining_ms(self.clock.now_ms()))
            .unwrap_or(0)
    }

    /// Whole-workout remaining seconds, Ready excluded.
    pub fn total_remaining_secs(&self) -> u64 {
        whole_seconds(self.total_remaining_ms(self.remaining_ms()))
    }

    pub fn visual_state(&self) -> VisualState {
        visual_state(self.run_state, self.current_kind(), self.flipped)
    }

    pub fn status(&self) -> TimerStatus {
        TimerStatus {
            state: self.run_state,
            phase_index: self.phase_index,
            kind: self.current_kind(),
            remaining_ms: self.remaining_ms(),
            current_set: self.current_set,
            set_count: self.sequence.set_count(),
            total_remaining_secs: self.total_remaining_secs(),
            visual: self.visual_state(),
        }
    }

    pub fn snapshot(&self) -> Event {
        let s = self.status();
        Event::StateSnapshot {
            state: s.state,
            phase_index: s.phase_index,
            kind: s.kind,
            remaining_ms: s.remaining_ms,
            current_set: s.current_set,
            set_count: s.set_count,
            total_remaining_secs: s.total_remaining_secs,
            visual: s.visual,
            at: chrono::Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin from Idle or resume from Paused. No-op otherwise.
    pub fn start(&mut self) -> bool {
        let now = self.clock.now_ms();
        match self.run_state {
            RunState::Running => false,
            RunState::Finished => {
                tracing::debug!("start ignored: run already finished");
                false
            }
            RunState::Idle | RunState::Paused => {
                let resuming = self.run_state == RunState::Paused;
                let Some(segment) = self.segments.get_mut(self.phase_index) else {
                    return false;
                };
                segment.start(now);
                self.set_run_state(RunState::Running);
                if resuming {
                    tracing::debug!(phase = self.phase_index, "resumed");
                } else {
                    tracing::debug!(phase = self.phase_index, "started");
                    self.publish_transition();
                }
                self.step(now);
                true
            }
        }
    }

    /// Pause the active phase. No-op unless running.
    pub fn pause(&mut self) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }
        let now = self.clock.now_ms();
        if let Some(segment) = self.segments.get_mut(self.phase_index) {
            segment.pause(now);
        }
        tracing::debug!(phase = self.phase_index, "paused");
        self.set_run_state(RunState::Paused);
        true
    }

    /// Return to the first phase with nothing elapsed. Always republishes
    /// the set counter and total time.
    pub fn reset(&mut self) {
        for (index, segment) in self.segments.iter_mut().enumerate() {
            if let Some(remaining_secs) = segment.reset() {
                if let Some(kind) = self.sequence.kind_at(index) {
                    self.signals.time.notify(&TimeUpdate {
                        phase_index: index,
                        kind,
                        remaining_secs,
                    });
                }
            }
        }
        self.phase_index = 0;
        self.current_set = 0;
        self.flipped = false;
        self.set_run_state(RunState::Idle);
        tracing::debug!("reset");

        let total_secs = self.sequence.total_secs();
        self.last_total_second = Some(total_secs);
        self.signals.total.notify(&TotalUpdate {
            remaining_secs: total_secs,
            total_secs,
        });
        self.signals.sets.notify(&SetUpdate {
            current: 0,
            total: self.sequence.set_count(),
        });
    }

    /// Token for the next scheduled recomputation, if running.
    pub fn schedule_frame(&self) -> Option<FrameToken> {
        if self.run_state != RunState::Running {
            return None;
        }
        let segment = self.segments.get(self.phase_index)?.token()?;
        Some(FrameToken {
            phase_index: self.phase_index,
            segment,
        })
    }

    /// Scheduled recomputation. Tokens issued before the last pause, reset
    /// or phase change are dropped.
    pub fn on_frame(&mut self, token: FrameToken) -> PollOutcome {
        let current = self.run_state == RunState::Running
            && token.phase_index == self.phase_index
            && self
                .segments
                .get(self.phase_index)
                .is_some_and(|s| s.is_current(token.segment));
        if !current {
            tracing::trace!(phase = token.phase_index, "dropping stale frame");
            return PollOutcome::Stale;
        }
        self.step(self.clock.now_ms())
    }

    /// Recompute from the clock if running.
    pub fn poll(&mut self) -> PollOutcome {
        if self.run_state != RunState::Running {
            return PollOutcome::Inactive;
        }
        self.step(self.clock.now_ms())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn step(&mut self, now: u64) -> PollOutcome {
        let mut advanced = 0;
        loop {
            let index = self.phase_index;
            let Some(kind) = self.sequence.kind_at(index) else {
                return PollOutcome::Inactive;
            };
            let Some(segment) = self.segments.get_mut(index) else {
                return PollOutcome::Inactive;
            };
            if segment.state() != SegmentState::Running {
                return PollOutcome::Inactive;
            }

            let tick = segment.poll(now);
            let (fraction, angle_deg, phase_remaining_ms) = match tick.overshoot_ms {
                Some(_) => (1.0, self.arc.end_deg, 0),
                None => (
                    segment.progress(now),
                    segment.arc_angle(now, self.arc.start_deg, self.arc.end_deg),
                    segment.remaining_ms(now),
                ),
            };

            if let Some(remaining_secs) = tick.second {
                self.signals.time.notify(&TimeUpdate {
                    phase_index: index,
                    kind,
                    remaining_secs,
                });
                if (1..=3).contains(&remaining_secs) {
                    self.signals.cues.notify(&Cue::CountDown);
                }
            }
            self.signals.progress.notify(&ProgressUpdate {
                phase_index: index,
                kind,
                fraction,
                angle_deg,
            });
            self.publish_total(phase_remaining_ms);

            match tick.overshoot_ms {
                None => return PollOutcome::Ticked { advanced },
                Some(overshoot_ms) => {
                    advanced += 1;
                    if self.complete_phase(kind, now, overshoot_ms) {
                        return PollOutcome::Finished;
                    }
                }
            }
        }
    }

    /// Run the completion effects of the active phase and move on. Returns
    /// true when that was the last phase.
    fn complete_phase(&mut self, kind: PhaseKind, now: u64, overshoot_ms: u64) -> bool {
        tracing::debug!(phase = self.phase_index, kind = kind.as_str(), "phase complete");
        match kind {
            PhaseKind::Ready => {}
            PhaseKind::Activity => {
                self.current_set = (self.current_set + 1).min(self.sequence.set_count());
                self.signals.sets.notify(&SetUpdate {
                    current: self.current_set,
                    total: self.sequence.set_count(),
                });
                self.signals.cues.notify(&Cue::CountUp);
            }
            PhaseKind::Interval => {}
        }

        let next = self.phase_index + 1;
        if next >= self.sequence.len() {
            self.flipped = false;
            self.set_run_state(RunState::Finished);
            self.signals.cues.notify(&Cue::Finish);
            tracing::debug!(sets = self.current_set, "workout finished");
            return true;
        }

        if kind != PhaseKind::Ready && self.sequence.has_interval() {
            self.flipped = !self.flipped;
        }
        self.phase_index = next;
        if let Some(segment) = self.segments.get_mut(next) {
            segment.start_with_carry(now, overshoot_ms);
        }
        self.publish_transition();
        false
    }

    fn total_remaining_ms(&self, phase_remaining_ms: u64) -> u64 {
        if self.run_state == RunState::Finished {
            return 0;
        }
        match self.sequence.kind_at(self.phase_index) {
            Some(PhaseKind::Ready) | None => self.sequence.total_secs().saturating_mul(1000),
            Some(_) => self
                .sequence
                .remaining_after_secs(self.phase_index)
                .saturating_mul(1000)
                .saturating_add(phase_remaining_ms),
        }
    }

    fn publish_total(&mut self, phase_remaining_ms: u64) {
        let remaining_secs = whole_seconds(self.total_remaining_ms(phase_remaining_ms));
        if self.last_total_second == Some(remaining_secs) {
            return;
        }
        self.last_total_second = Some(remaining_secs);
        self.signals.total.notify(&TotalUpdate {
            remaining_secs,
            total_secs: self.sequence.total_secs(),
        });
    }

    fn publish_transition(&mut self) {
        let Some(kind) = self.sequence.kind_at(self.phase_index) else {
            return;
        };
        let transition = PhaseTransition {
            phase_index: self.phase_index,
            kind,
            visual: self.visual_state(),
        };
        self.signals.phases.notify(&transition);
    }

    fn set_run_state(&mut self, state: RunState) {
        if self.run_state != state {
            self.run_state = state;
            self.signals.run_state.notify(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::timer::sequence::SequenceConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(sets: u32, interval: u32, trailing: bool) -> (TimerController<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let seq = PhaseSequence::build(&SequenceConfig {
            ready_secs: 5,
            activity_secs: 20,
            interval_secs: interval,
            set_count: sets,
            include_trailing_interval: trailing,
        })
        .unwrap();
        (TimerController::new(seq, clock.clone()), clock)
    }

    fn run_to_end(ctl: &mut TimerController<ManualClock>, clock: &ManualClock) {
        for _ in 0..10_000 {
            clock.advance(100);
            if ctl.poll() == PollOutcome::Finished {
                return;
            }
        }
        panic!("workout never finished");
    }

    #[test]
    fn start_pause_resume() {
        let (mut ctl, clock) = controller(2, 10, false);
        assert_eq!(ctl.run_state(), RunState::Idle);
        assert!(ctl.start());
        assert_eq!(ctl.run_state(), RunState::Running);
        assert!(!ctl.start());

        clock.advance(2_000);
        assert!(ctl.pause());
        assert_eq!(ctl.run_state(), RunState::Paused);
        assert!(!ctl.pause());

        clock.advance(60_000);
        assert_eq!(ctl.remaining_ms(), 3_000);
        assert!(ctl.start());
        assert_eq!(ctl.run_state(), RunState::Running);
        assert_eq!(ctl.remaining_ms(), 3_000);
    }

    #[test]
    fn sets_reach_total_exactly_at_last_activity() {
        let (mut ctl, clock) = controller(3, 10, false);
        let sets = Rc::new(RefCell::new(Vec::new()));
        let s = sets.clone();
        ctl.signals_mut().sets.subscribe_fn(move |u| s.borrow_mut().push(u.current));

        ctl.start();
        run_to_end(&mut ctl, &clock);

        assert_eq!(*sets.borrow(), vec![1, 2, 3]);
        assert_eq!(ctl.current_set(), 3);
        assert_eq!(ctl.run_state(), RunState::Finished);
        // 5 + 20 + 10 + 20 + 10 + 20
        assert_eq!(clock.now_ms(), 85_000);
    }

    #[test]
    fn transitions_follow_sequence() {
        let (mut ctl, clock) = controller(3, 10, false);
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let k = kinds.clone();
        ctl.signals_mut().phases.subscribe_fn(move |t| k.borrow_mut().push(t.kind));

        ctl.start();
        run_to_end(&mut ctl, &clock);

        use PhaseKind::*;
        assert_eq!(
            *kinds.borrow(),
            vec![Ready, Activity, Interval, Activity, Interval, Activity]
        );
    }

    #[test]
    fn start_after_finish_is_noop() {
        let (mut ctl, clock) = controller(1, 0, false);
        let cues = Rc::new(RefCell::new(Vec::new()));
        let c = cues.clone();
        ctl.signals_mut().cues.subscribe_fn(move |cue| c.borrow_mut().push(*cue));

        ctl.start();
        run_to_end(&mut ctl, &clock);
        assert!(!ctl.start());
        assert!(!ctl.pause());
        assert_eq!(ctl.run_state(), RunState::Finished);
        assert_eq!(ctl.poll(), PollOutcome::Inactive);
        assert_eq!(cues.borrow().last(), Some(&Cue::Finish));
        assert_eq!(cues.borrow().iter().filter(|c| **c == Cue::Finish).count(), 1);
    }

    #[test]
    fn countdown_cues_in_last_three_seconds() {
        let (mut ctl, clock) = controller(1, 0, false);
        let cues = Rc::new(RefCell::new(Vec::new()));
        let c = cues.clone();
        ctl.signals_mut().cues.subscribe_fn(move |cue| c.borrow_mut().push(*cue));

        ctl.start();
        run_to_end(&mut ctl, &clock);

        use Cue::*;
        assert_eq!(
            *cues.borrow(),
            vec![
                CountDown, CountDown, CountDown, // ready 3, 2, 1
                CountDown, CountDown, CountDown, // activity 3, 2, 1
                CountUp, Finish,
            ]
        );
    }

    #[test]
    fn suspended_host_catches_up_in_one_poll() {
        let (mut ctl, clock) = controller(3, 10, false);
        ctl.start();
        // Ready (5) + Activity (20) + 3 s into Interval.
        clock.advance(28_000);
        assert_eq!(ctl.poll(), PollOutcome::Ticked { advanced: 2 });
        assert_eq!(ctl.phase_index(), 2);
        assert_eq!(ctl.current_kind(), Some(PhaseKind::Interval));
        assert_eq!(ctl.current_set(), 1);
        assert_eq!(ctl.remaining_ms(), 7_000);
    }

    #[test]
    fn stale_frame_after_pause_is_dropped() {
        let (mut ctl, clock) = controller(2, 10, false);
        assert!(ctl.schedule_frame().is_none());
        ctl.start();
        let token = ctl.schedule_frame().unwrap();
        ctl.pause();
        clock.advance(10_000);
        assert_eq!(ctl.on_frame(token), PollOutcome::Stale);
        assert_eq!(ctl.phase_index(), 0);

        ctl.start();
        assert_eq!(ctl.on_frame(token), PollOutcome::Stale);
        let fresh = ctl.schedule_frame().unwrap();
        assert_eq!(ctl.on_frame(fresh), PollOutcome::Ticked { advanced: 0 });
    }

    #[test]
    fn frame_token_goes_stale_on_phase_change() {
        let (mut ctl, clock) = controller(2, 10, false);
        ctl.start();
        let token = ctl.schedule_frame().unwrap();
        clock.advance(5_000);
        assert_eq!(ctl.on_frame(token), PollOutcome::Ticked { advanced: 1 });
        assert_eq!(ctl.on_frame(token), PollOutcome::Stale);
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let (mut ctl, clock) = controller(3, 10, true);
        ctl.start();
        clock.advance(31_000);
        ctl.poll();
        ctl.pause();

        ctl.reset();
        let once = ctl.status();
        ctl.reset();
        assert_eq!(ctl.status(), once);
        assert_eq!(once.state, RunState::Idle);
        assert_eq!(once.phase_index, 0);
        assert_eq!(once.current_set, 0);
        assert!(!once.visual.flipped);
    }

    #[test]
    fn reset_after_finish_restores_every_phase() {
        let (mut ctl, clock) = controller(2, 10, false);
        let times = Rc::new(RefCell::new(Vec::new()));
        let t = times.clone();
        ctl.signals_mut()
            .time
            .subscribe_fn(move |u| t.borrow_mut().push((u.phase_index, u.kind, u.remaining_secs)));

        ctl.start();
        run_to_end(&mut ctl, &clock);
        times.borrow_mut().clear();

        ctl.reset();
        assert_eq!(
            *times.borrow(),
            vec![
                (0, PhaseKind::Ready, 5),
                (1, PhaseKind::Activity, 20),
                (2, PhaseKind::Interval, 10),
                (3, PhaseKind::Activity, 20),
            ]
        );
        assert_eq!(ctl.run_state(), RunState::Idle);
    }

    #[test]
    fn reset_mid_run_restores_touched_phases_only() {
        let (mut ctl, clock) = controller(2, 10, false);
        let times = Rc::new(RefCell::new(Vec::new()));
        let t = times.clone();
        ctl.signals_mut()
            .time
            .subscribe_fn(move |u| t.borrow_mut().push((u.phase_index, u.remaining_secs)));

        ctl.start();
        clock.advance(5_000);
        ctl.poll();
        clock.advance(4_000);
        ctl.poll();
        times.borrow_mut().clear();

        ctl.reset();
        assert_eq!(*times.borrow(), vec![(0, 5), (1, 20)]);
    }

    #[test]
    fn reset_republishes_totals() {
        let (mut ctl, _clock) = controller(2, 10, false);
        let totals = Rc::new(RefCell::new(Vec::new()));
        let t = totals.clone();
        ctl.signals_mut().total.subscribe_fn(move |u| t.borrow_mut().push(u.remaining_secs));
        ctl.reset();
        ctl.reset();
        assert_eq!(*totals.borrow(), vec![50, 50]);
    }

    #[test]
    fn flip_toggles_only_with_intervals() {
        let (mut ctl, clock) = controller(3, 10, false);
        ctl.start();
        clock.advance(5_000);
        ctl.poll();
        assert!(!ctl.visual_state().flipped, "leaving Ready does not flip");
        clock.advance(20_000);
        ctl.poll();
        assert!(ctl.visual_state().flipped);
        clock.advance(10_000);
        ctl.poll();
        assert!(!ctl.visual_state().flipped);

        let (mut ctl, clock) = controller(3, 0, false);
        ctl.start();
        clock.advance(44_000);
        ctl.poll();
        assert_eq!(ctl.phase_index(), 2);
        assert!(!ctl.visual_state().flipped);
    }

    #[test]
    fn failing_observer_does_not_stall_run() {
        let (mut ctl, clock) = controller(2, 10, false);
        ctl.signals_mut().time.subscribe(|_| Err("display gone".into()));
        ctl.signals_mut().sets.subscribe(|_| Err("display gone".into()));
        ctl.start();
        run_to_end(&mut ctl, &clock);
        assert_eq!(ctl.current_set(), 2);
    }

    #[test]
    fn total_countdown_skips_ready() {
        let (mut ctl, clock) = controller(2, 10, false);
        let totals = Rc::new(RefCell::new(Vec::new()));
        let t = totals.clone();
        ctl.signals_mut().total.subscribe_fn(move |u| t.borrow_mut().push(u.remaining_secs));

        ctl.start();
        clock.advance(4_000);
        ctl.poll();
        assert_eq!(*totals.borrow(), vec![50]);
        clock.advance(2_000);
        ctl.poll();
        assert_eq!(ctl.total_remaining_secs(), 49);
        run_to_end(&mut ctl, &clock);
        assert_eq!(totals.borrow().last(), Some(&0));
    }

    #[test]
    fn progress_reaches_end_angle_on_completion() {
        let (mut ctl, clock) = controller(1, 0, false);
        let angles = Rc::new(RefCell::new(Vec::new()));
        let a = angles.clone();
        ctl.signals_mut()
            .progress
            .subscribe_fn(move |p| a.borrow_mut().push((p.kind, p.angle_deg)));
        ctl.start();
        clock.advance(5_000);
        ctl.poll();
        assert_eq!(angles.borrow()[0], (PhaseKind::Ready, -90.0));
        assert!(angles.borrow().contains(&(PhaseKind::Ready, 270.0)));
    }
}
