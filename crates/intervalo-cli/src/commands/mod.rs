pub mod config;
pub mod plan;
pub mod run;
pub mod settings;

use intervalo_core::{Config, JsonStore, WorkoutSettings};

/// Saved settings and app config from the data directory.
pub fn load_workout() -> Result<(JsonStore, WorkoutSettings, Config), Box<dyn std::error::Error>> {
    let store = JsonStore::open_default()?;
    let settings = WorkoutSettings::load(&store)?;
    let config = Config::load()?;
    Ok((store, settings, config))
}
