//! Pixel and percentage placement of laid-out blocks.

use serde::{Deserialize, Serialize};

use super::block::TimeBlock;
use super::layout::LayoutAssignment;

/// Height of one hour row in the planner view.
pub const DEFAULT_PIXELS_PER_HOUR: u32 = 70;

/// Linear time-to-pixel scale of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineScale {
    pixels_per_hour: f64,
}

/// Where a block is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    pub top_px: f64,
    pub height_px: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

impl TimelineScale {
    pub fn new(pixels_per_minute: f64) -> Self {
        Self {
            pixels_per_hour: pixels_per_minute * 60.0,
        }
    }

    pub fn from_pixels_per_hour(pixels_per_hour: u32) -> Self {
        Self {
            pixels_per_hour: pixels_per_hour as f64,
        }
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_hour / 60.0
    }

    /// Pixel length of a minute span. Scales before dividing so whole
    /// hours land on whole pixels.
    fn span(&self, minutes: u32) -> f64 {
        minutes as f64 * self.pixels_per_hour / 60.0
    }

    /// Vertical offset and height of a block.
    pub fn vertical(&self, block: &TimeBlock) -> (f64, f64) {
        (self.span(block.start_minute), self.span(block.duration_minutes()))
    }

    /// Full placement of a block from its time bounds and column assignment.
    pub fn place(&self, block: &TimeBlock, assignment: &LayoutAssignment) -> BlockGeometry {
        let (top_px, height_px) = self.vertical(block);
        BlockGeometry {
            top_px,
            height_px,
            left_percent: assignment.left_percent(),
            width_percent: assignment.width_percent(),
        }
    }

    /// Total height of a 24 hour timeline.
    pub fn day_height(&self) -> f64 {
        24.0 * self.pixels_per_hour
    }
}

impl Default for TimelineScale {
    fn default() -> Self {
        Self::from_pixels_per_hour(DEFAULT_PIXELS_PER_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::block::Priority;

    #[test]
    fn places_block_linearly() {
        let scale = TimelineScale::new(2.0);
        let block = TimeBlock::new("a", "A", 540, 600, Priority::Low).unwrap();
        let assignment = LayoutAssignment {
            block_id: "a".into(),
            column: 1,
            total_columns: 4,
        };
        let geometry = scale.place(&block, &assignment);
        assert_eq!(geometry.top_px, 1080.0);
        assert_eq!(geometry.height_px, 120.0);
        assert_eq!(geometry.left_percent, 25.0);
        assert_eq!(geometry.width_percent, 25.0);
    }

    #[test]
    fn wrapped_block_height_uses_effective_end() {
        let scale = TimelineScale::new(1.0);
        let block = TimeBlock::new("n", "Night", 1380, 60, Priority::Low).unwrap();
        assert_eq!(scale.vertical(&block), (1380.0, 120.0));
    }

    #[test]
    fn default_scale_matches_hour_rows() {
        let scale = TimelineScale::default();
        assert!((scale.day_height() - 24.0 * 70.0).abs() < 1e-9);
    }
}
