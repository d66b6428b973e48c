//! # Flowplan Core Library
//!
//! Core logic for the Flowplan daily planner. Everything is available through
//! the standalone CLI binary; a GUI would be a thin layer over the same crate.
//!
//! ## Architecture
//!
//! - **Planner**: routine blocks, `HH:mm` boundary validation, and the
//!   timeline layout engine that packs overlapping blocks into columns
//! - **Storage**: JSON routine-block store and TOML configuration
//!
//! ## Key Components
//!
//! - [`compute_layout`]: pure column layout of a block set
//! - [`TimelineScale`]: time-to-pixel placement
//! - [`RoutineStore`]: routine block persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod planner;
pub mod storage;

pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use planner::{
    compute_layout, compute_layout_with, hour_slots, BlockGeometry, BoundaryPolicy, HourSlot,
    Layout, LayoutAssignment, LayoutOptions, NewRoutineBlock, Priority, TimeBlock, TimelineScale,
};
pub use storage::{Config, RoutineStore};
