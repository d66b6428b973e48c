//! Hour rows of the planner view.

use serde::Serialize;

use super::block::TimeBlock;
use super::clock::{format_minutes, hour_of};

/// One hour row and the blocks that start inside it.
#[derive(Debug, Clone, Serialize)]
pub struct HourSlot<'a> {
    pub hour: u32,
    /// `HH:00`, the value prefilled when the empty row is clicked.
    pub label: String,
    pub blocks: Vec<&'a TimeBlock>,
}

impl HourSlot<'_> {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Group blocks into the 24 hour rows by start hour, keeping input order.
pub fn hour_slots(blocks: &[TimeBlock]) -> Vec<HourSlot<'_>> {
    let mut slots: Vec<HourSlot<'_>> = (0..24)
        .map(|hour| HourSlot {
            hour,
            label: format_minutes(hour * 60),
            blocks: Vec::new(),
        })
        .collect();
    for block in blocks {
        slots[hour_of(block.start_minute) as usize].blocks.push(block);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::block::Priority;

    #[test]
    fn groups_by_start_hour() {
        let blocks = vec![
            TimeBlock::new("a", "A", 545, 600, Priority::Low).unwrap(),
            TimeBlock::new("b", "B", 0, 30, Priority::Low).unwrap(),
            TimeBlock::new("c", "C", 590, 650, Priority::Low).unwrap(),
        ];
        let slots = hour_slots(&blocks);
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[9].label, "09:00");
        let ids: Vec<_> = slots[9].blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(slots[0].blocks.len(), 1);
        assert!(slots[10].is_empty());
    }
}
