//! Daily planner: routine blocks and their timeline layout.
//!
//! This module provides:
//! - Routine block model with `HH:mm` boundary validation
//! - Overlap clustering and first-fit column layout
//! - Pixel geometry and hour-row grouping for rendering

mod block;
pub mod clock;
mod geometry;
mod layout;
mod slots;

pub use block::{NewRoutineBlock, Priority, TimeBlock, DEFAULT_ICON};
pub use geometry::{BlockGeometry, TimelineScale, DEFAULT_PIXELS_PER_HOUR};
pub use layout::{
    compute_layout, compute_layout_with, BoundaryPolicy, Layout, LayoutAssignment, LayoutOptions,
};
pub use slots::{hour_slots, HourSlot};
