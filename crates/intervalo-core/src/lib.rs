//! # Intervalo Core Library
//!
//! This library provides the core logic for the Intervalo interval workout
//! timer. Everything a front end needs lives here; the `intervalo` CLI is a
//! thin terminal host over the same types.
//!
//! ## Architecture
//!
//! - **Timer**: A wall-clock-based controller that walks a
//!   Ready/Activity/Interval sequence. It owns no thread; the host calls
//!   `poll()` and the controller catches up from the clock
//! - **Picker**: A bounded or looping integer selector driven by drag and
//!   flick gestures
//! - **Storage**: A flat JSON key-value store for workout settings and
//!   TOML-based application configuration
//! - **Signals**: Typed subjects that publish time, progress, set, total,
//!   phase and cue updates to subscribers
//!
//! ## Key Components
//!
//! - [`TimerController`]: Workout state machine
//! - [`Picker`]: Rotary value selector
//! - [`WorkoutSettings`] and [`SettingsForm`]: Persisted workout parameters
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod format;
pub mod observer;
pub mod picker;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::{Cue, CuePlayer, Event};
pub use observer::{Subject, SubscriptionId};
pub use picker::{Picker, PickerConfig, PickerTuning, PointerKind};
pub use storage::{Config, JsonStore, KeyValueStore, SettingsField, SettingsForm, WorkoutSettings};
pub use timer::{PhaseKind, PhaseSequence, RunState, SequenceConfig, TimerController};
