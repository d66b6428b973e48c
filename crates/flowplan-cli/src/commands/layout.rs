//! Timeline layout commands for CLI.

use clap::Subcommand;
use flowplan_core::{
    compute_layout_with, hour_slots, BlockGeometry, Config, LayoutAssignment, RoutineStore,
    TimeBlock,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum LayoutAction {
    /// Show every block with its column and pixel placement
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the 24 hour rows and the blocks starting in each
    Slots,
}

#[derive(Serialize)]
struct PlacedBlock<'a> {
    block: &'a TimeBlock,
    cluster: usize,
    #[serde(flatten)]
    assignment: &'a LayoutAssignment,
    geometry: BlockGeometry,
}

pub fn run(action: LayoutAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = RoutineStore::open_default()?;
    let blocks = store.list()?;

    match action {
        LayoutAction::Show { json } => {
            let config = Config::load_or_default();
            let scale = config.timeline_scale();
            let layout = compute_layout_with(&blocks, config.layout_options());

            let mut placed: Vec<PlacedBlock<'_>> = blocks
                .iter()
                .zip(&layout.assignments)
                .zip(&layout.cluster_of)
                .map(|((block, assignment), &cluster)| PlacedBlock {
                    block,
                    cluster,
                    assignment,
                    geometry: scale.place(block, assignment),
                })
                .collect();
            placed.sort_by_key(|p| p.block.start_minute);

            if json {
                println!("{}", serde_json::to_string_pretty(&placed)?);
                return Ok(());
            }

            println!(
                "{} block(s), {} cluster(s), widest cluster {} column(s)",
                blocks.len(),
                layout.cluster_count(),
                layout.max_columns()
            );
            for p in &placed {
                println!(
                    "{:<13}  col {}/{}  left {:>5.1}%  width {:>5.1}%  top {:>7.1}px  height {:>6.1}px  {:<8}  {}",
                    p.block.time_range_label(),
                    p.assignment.column + 1,
                    p.assignment.total_columns,
                    p.geometry.left_percent,
                    p.geometry.width_percent,
                    p.geometry.top_px,
                    p.geometry.height_px,
                    p.block.priority,
                    p.block.title
                );
            }
        }
        LayoutAction::Slots => {
            for slot in hour_slots(&blocks) {
                if slot.is_empty() {
                    println!("{} |", slot.label);
                    continue;
                }
                let entries: Vec<String> = slot
                    .blocks
                    .iter()
                    .map(|b| format!("{} ({}) [{}]", b.title, b.time_range_label(), b.priority))
                    .collect();
                println!("{} | {}", slot.label, entries.join("; "));
            }
        }
    }
    Ok(())
}
