mod controller;
mod segment;
mod sequence;
mod visual;

pub use controller::{
    ArcAngles, FrameToken, PollOutcome, RunState, Signals, TimerController, TimerStatus,
};
pub use segment::{SegmentState, SegmentTick, SegmentTimer, SegmentToken};
pub use sequence::{Phase, PhaseKind, PhaseSequence, PhaseTemplate, SequenceConfig};
pub use visual::{visual_state, Controls, Display, VisualState};
