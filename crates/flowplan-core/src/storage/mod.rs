mod config;
pub mod routine_store;

pub use config::{Config, PlannerConfig, UiConfig};
pub use routine_store::RoutineStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the Flowplan data directory, creating it if needed.
///
/// `FLOWPLAN_HOME` overrides the location outright. Otherwise this is
/// `~/.config/flowplan[-dev]/`, with `-dev` selected by `FLOWPLAN_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("FLOWPLAN_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FLOWPLAN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("flowplan-dev")
            } else {
                base_dir.join("flowplan")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
