//! Column layout for overlapping blocks on the daily timeline.
//!
//! Blocks are swept in start order and merged into overlap clusters (maximal
//! runs of directly or transitively overlapping blocks). Inside a cluster,
//! each block takes the first column whose previous block has already ended,
//! opening a new column when none is free. Every block in a cluster is drawn
//! at `1 / columns` of the row width.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::block::TimeBlock;

/// Whether a block ending exactly when another starts counts as overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// `A.end == B.start` does not overlap: B may reuse A's column and
    /// starts a new cluster if nothing else is open.
    #[default]
    TouchingShares,
    /// `A.end == B.start` overlaps: B joins A's cluster and needs another column.
    TouchingConflicts,
}

impl BoundaryPolicy {
    /// Whether something ending at `end` leaves room for a block starting at `start`.
    fn is_free(self, end: u32, start: u32) -> bool {
        match self {
            Self::TouchingShares => end <= start,
            Self::TouchingConflicts => end < start,
        }
    }
}

/// Layout tuning knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// How blocks that only touch at an endpoint are treated.
    pub boundary: BoundaryPolicy,
}

/// Column placement of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAssignment {
    pub block_id: String,
    /// Zero-based column inside the block's cluster.
    pub column: usize,
    /// Columns opened by the cluster; shared by every block in it.
    pub total_columns: usize,
}

impl LayoutAssignment {
    /// Width of the block as a percentage of the row.
    pub fn width_percent(&self) -> f64 {
        100.0 / self.total_columns as f64
    }

    /// Left offset as a percentage of the row.
    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// Full result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// One assignment per input block, in input order.
    pub assignments: Vec<LayoutAssignment>,
    /// Cluster index of each input block, in input order. Clusters are
    /// numbered in start order.
    pub cluster_of: Vec<usize>,
    /// Column count of each cluster.
    pub cluster_columns: Vec<usize>,
}

impl Layout {
    /// Number of overlap clusters.
    pub fn cluster_count(&self) -> usize {
        self.cluster_columns.len()
    }

    /// Column count of the widest cluster (0 when there are no blocks).
    pub fn max_columns(&self) -> usize {
        self.cluster_columns.iter().copied().max().unwrap_or(0)
    }

    /// Look up the assignment of a block by id.
    pub fn assignment_for(&self, block_id: &str) -> Option<&LayoutAssignment> {
        self.assignments.iter().find(|a| a.block_id == block_id)
    }
}

/// Lay out blocks with the default boundary policy.
///
/// Convenience wrapper returning only the assignments, in input order.
pub fn compute_layout(blocks: &[TimeBlock]) -> Vec<LayoutAssignment> {
    compute_layout_with(blocks, LayoutOptions::default()).assignments
}

/// Lay out blocks with explicit options.
///
/// Deterministic for a given input order: blocks with equal starts keep their
/// relative input order, which decides who gets the lower column.
pub fn compute_layout_with(blocks: &[TimeBlock], options: LayoutOptions) -> Layout {
    // Stable sort of indices; ties keep input order
    let mut order: Vec<usize> = (0..blocks.len()).collect();
    order.sort_by_key(|&i| blocks[i].start_minute);

    let mut columns = vec![0usize; blocks.len()];
    let mut cluster_of = vec![0usize; blocks.len()];
    let mut cluster_columns: Vec<usize> = Vec::new();

    // End time of the last block placed in each column of the open cluster
    let mut column_ends: Vec<u32> = Vec::new();
    let mut cluster_end: Option<u32> = None;

    for &i in &order {
        let block = &blocks[i];
        let start = block.start_minute;
        let end = block.effective_end();

        let starts_new_cluster = match cluster_end {
            None => true,
            Some(open_end) => options.boundary.is_free(open_end, start),
        };
        if starts_new_cluster {
            if cluster_end.is_some() {
                cluster_columns.push(column_ends.len());
            }
            column_ends.clear();
            cluster_end = Some(end);
        } else {
            cluster_end = cluster_end.map(|open_end| open_end.max(end));
        }

        let free = column_ends
            .iter()
            .position(|&column_end| options.boundary.is_free(column_end, start));
        let column = match free {
            Some(column) => {
                column_ends[column] = end;
                column
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };

        columns[i] = column;
        cluster_of[i] = cluster_columns.len();
    }
    if cluster_end.is_some() {
        cluster_columns.push(column_ends.len());
    }

    let assignments = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| LayoutAssignment {
            block_id: block.id.clone(),
            column: columns[i],
            total_columns: cluster_columns[cluster_of[i]],
        })
        .collect();

    let layout = Layout {
        assignments,
        cluster_of,
        cluster_columns,
    };
    debug!(
        blocks = blocks.len(),
        clusters = layout.cluster_count(),
        max_columns = layout.max_columns(),
        boundary = ?options.boundary,
        "computed timeline layout"
    );
    layout
}
