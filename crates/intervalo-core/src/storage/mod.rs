mod config;
mod form;
mod kv;
mod settings;

pub use config::{Config, TimerConfig};
pub use form::{SettingsField, SettingsForm};
pub use kv::{JsonStore, KeyValueStore};
pub use settings::{keys, WorkoutSettings};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/intervalo[-dev]/` based on INTERVALO_ENV.
///
/// Set INTERVALO_ENV=dev to use the development data directory, or
/// INTERVALO_DATA_DIR to put the data anywhere else.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("INTERVALO_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("INTERVALO_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("intervalo-dev")
            } else {
                base_dir.join("intervalo")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
