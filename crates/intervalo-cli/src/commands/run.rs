use std::io::Write;
use std::time::Duration;

use intervalo_core::events::{PhaseTransition, SetUpdate, TimeUpdate, TotalUpdate};
use intervalo_core::format::time_label;
use intervalo_core::timer::PollOutcome;
use intervalo_core::{Cue, CuePlayer, Event, RunState, SystemClock, TimerController};
use tokio::time::MissedTickBehavior;

use super::load_workout;

/// Rings the terminal bell on stderr so JSON output stays clean.
struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&mut self, cue: Cue) {
        tracing::trace!(cue = cue.id(), "bell");
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

fn emit(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

fn attach_json(ctl: &mut TimerController<SystemClock>) {
    let signals = ctl.signals_mut();
    signals.run_state.subscribe(|s: &RunState| emit(&Event::from(s)));
    signals.phases.subscribe(|t: &PhaseTransition| emit(&Event::from(t)));
    signals.time.subscribe(|u: &TimeUpdate| emit(&Event::from(u)));
    signals.sets.subscribe(|u: &SetUpdate| emit(&Event::from(u)));
    signals.total.subscribe(|u: &TotalUpdate| emit(&Event::from(u)));
    signals.cues.subscribe(|c: &Cue| emit(&Event::from(c)));
}

fn attach_text(ctl: &mut TimerController<SystemClock>) {
    let signals = ctl.signals_mut();
    signals.phases.subscribe_fn(|t: &PhaseTransition| {
        println!("== {} ==", t.kind.as_str());
    });
    signals.time.subscribe_fn(|u: &TimeUpdate| {
        println!("{:<8} {}", u.kind.as_str(), time_label(u.remaining_secs));
    });
    signals.sets.subscribe_fn(|u: &SetUpdate| {
        println!("set {}/{}", u.current, u.total);
    });
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, settings, config) = load_workout()?;
    let mut ctl = settings.controller(&config, SystemClock::new())?;

    if json {
        attach_json(&mut ctl);
    } else {
        attach_text(&mut ctl);
    }
    if settings.use_sound {
        ctl.attach_player(TerminalBell);
    }

    let poll_interval = Duration::from_millis(config.timer.poll_interval_ms.max(1));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(drive(&mut ctl, poll_interval))?;

    if json {
        emit(&ctl.snapshot())?;
    } else if ctl.run_state() == RunState::Finished {
        println!("finished {} sets in {}", ctl.current_set(), time_label(settings.total_secs()));
    } else {
        println!(
            "paused in {} with {} left",
            ctl.current_kind().map(|k| k.as_str()).unwrap_or("-"),
            time_label(ctl.total_remaining_secs())
        );
    }
    Ok(())
}

/// Poll until the workout finishes or Ctrl-C pauses it.
async fn drive(
    ctl: &mut TimerController<SystemClock>,
    poll_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    ctl.start();
    tracing::info!(phases = ctl.sequence().len(), "workout started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(token) = ctl.schedule_frame() else {
                    break;
                };
                if ctl.on_frame(token) == PollOutcome::Finished {
                    tracing::info!(sets = ctl.current_set(), "workout finished");
                    break;
                }
            }
            result = &mut ctrl_c => {
                result?;
                ctl.pause();
                tracing::info!(phase = ctl.phase_index(), "interrupted, paused");
                break;
            }
        }
    }
    Ok(())
}
