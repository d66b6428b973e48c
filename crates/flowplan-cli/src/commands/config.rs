//! Planner configuration commands for CLI.

use clap::Subcommand;
use flowplan_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one planner setting
    Get {
        /// Dot-path key, e.g. "planner.default_block_minutes"
        key: String,
    },
    /// Change one planner setting; out-of-range values are rejected
    Set {
        /// Dot-path key, e.g. "planner.touching_blocks_conflict"
        key: String,
        /// New value, coerced to the key's type
        value: String,
    },
    /// Print every setting as `key = value`
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore default planner settings
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!(
                "planner reset: {} px/hour, {} min blocks from {}, touching blocks {}",
                config.planner.pixels_per_hour,
                config.planner.default_block_minutes,
                config.planner.default_start,
                if config.planner.touching_blocks_conflict {
                    "conflict"
                } else {
                    "share columns"
                }
            );
        }
    }
    Ok(())
}
