use intervalo_core::format::time_label;
use intervalo_core::PhaseSequence;
use serde::Serialize;

use super::load_workout;

#[derive(Serialize)]
struct PlannedPhase {
    index: usize,
    kind: intervalo_core::PhaseKind,
    duration_secs: u32,
}

#[derive(Serialize)]
struct Plan {
    set_count: u32,
    total_secs: u64,
    phases: Vec<PlannedPhase>,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, settings, config) = load_workout()?;
    let sequence = PhaseSequence::build(&settings.sequence_config(config.timer.ready_secs))?;

    let plan = Plan {
        set_count: sequence.set_count(),
        total_secs: sequence.total_secs(),
        phases: (0..sequence.len())
            .filter_map(|index| {
                sequence.template_at(index).map(|t| PlannedPhase {
                    index,
                    kind: t.kind,
                    duration_secs: t.duration_secs,
                })
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    for phase in &plan.phases {
        println!(
            "{:>3}  {:<8}  {}",
            phase.index,
            phase.kind.as_str(),
            time_label(u64::from(phase.duration_secs))
        );
    }
    println!("sets:  {}", plan.set_count);
    println!("total: {}", time_label(plan.total_secs));
    Ok(())
}
