//! Routine block commands for CLI.

use clap::Subcommand;
use flowplan_core::planner::clock::parse_hhmm;
use flowplan_core::{Config, NewRoutineBlock, Priority, RoutineStore};

#[derive(Subcommand)]
pub enum BlockAction {
    /// Plan a new block
    Add {
        /// Block title
        title: String,
        /// Start time, HH:mm (default: planner.default_start)
        #[arg(long)]
        start: Option<String>,
        /// End time, HH:mm (default: start + planner.default_block_minutes)
        #[arg(long)]
        end: Option<String>,
        /// Priority tier: low, medium, high or critical
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Icon label
        #[arg(long)]
        icon: Option<String>,
    },
    /// List blocks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a block
    Remove {
        /// Block ID
        id: String,
    },
    /// Remove every block
    Clear,
}

pub fn run(action: BlockAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = RoutineStore::open_default()?;
    match action {
        BlockAction::Add {
            title,
            start,
            end,
            priority,
            icon,
        } => {
            let config = Config::load()?;
            let start = start.unwrap_or(config.planner.default_start);
            let start_minute = parse_hhmm(&start)?;
            let form = NewRoutineBlock::new(title);
            let form = match end {
                Some(end) => form.with_times(start_minute, parse_hhmm(&end)?),
                None => form.with_duration(start_minute, config.planner.default_block_minutes)?,
            };
            let priority: Priority = priority.parse()?;

            let mut form = form.with_priority(priority);
            if let Some(icon) = icon {
                form = form.with_icon(icon);
            }
            let block = store.add(form)?;
            tracing::info!(id = %block.id, "block added");
            println!("Block created: {}", block.id);
            println!("{}", serde_json::to_string_pretty(&block)?);
        }
        BlockAction::List { json } => {
            let blocks = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else if blocks.is_empty() {
                println!("No blocks planned.");
            } else {
                for block in &blocks {
                    println!(
                        "{}  {:<13}  {:<8}  {}",
                        block.id,
                        block.time_range_label(),
                        block.priority,
                        block.title
                    );
                }
            }
        }
        BlockAction::Remove { id } => {
            let removed = store.remove(&id)?;
            println!("Block removed: {} ({})", removed.id, removed.title);
        }
        BlockAction::Clear => {
            let count = store.clear()?;
            println!("Removed {count} block(s)");
        }
    }
    Ok(())
}
