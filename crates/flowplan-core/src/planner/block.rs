//! Routine blocks: the scheduled activities drawn on the daily timeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::clock::{format_minutes, parse_hhmm, MINUTES_PER_DAY};
use crate::error::ValidationError;

/// Icon label used when the form does not pick one.
pub const DEFAULT_ICON: &str = "Calendar";

/// Priority tier of a block. Drives the block's colour on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All tiers, lowest first. Order of the planner legend.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Hex colour of the tier.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#A855F7",
            Self::Medium => "#3B82F6",
            Self::High => "#F59E0B",
            Self::Critical => "#EF4444",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Light routine",
            Self::Medium => "Normal focus",
            Self::High => "Extra attention",
            Self::Critical => "Cannot be postponed",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

/// A scheduled block with normalized minute-of-day bounds.
///
/// `start_minute` lies in `[0, 1440)` and `end_minute` in `(0, 2880]`.
/// An end at or before the start means the block crosses midnight; use
/// [`effective_end`](Self::effective_end) for the resolved end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    pub start_minute: u32,
    pub end_minute: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl TimeBlock {
    /// Create a validated block.
    ///
    /// # Errors
    /// Returns an error if the title is blank or a bound is out of range.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_minute: u32,
        end_minute: u32,
        priority: Priority,
    ) -> Result<Self, ValidationError> {
        let block = Self {
            id: id.into(),
            title: title.into(),
            start_minute,
            end_minute,
            priority,
            icon: default_icon(),
        };
        block.validate()?;
        Ok(block)
    }

    /// Set the icon label.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Check the bounds and title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.start_minute >= MINUTES_PER_DAY {
            return Err(ValidationError::MinuteOutOfRange {
                field: "start_minute",
                value: self.start_minute,
                min: 0,
                max: MINUTES_PER_DAY - 1,
            });
        }
        if self.end_minute == 0 || self.end_minute > 2 * MINUTES_PER_DAY {
            return Err(ValidationError::MinuteOutOfRange {
                field: "end_minute",
                value: self.end_minute,
                min: 1,
                max: 2 * MINUTES_PER_DAY,
            });
        }
        Ok(())
    }

    /// End minute with the midnight wrap resolved. Always greater than the start.
    ///
    /// An end equal to the start yields a full 24 hour block.
    pub fn effective_end(&self) -> u32 {
        if self.end_minute <= self.start_minute {
            self.end_minute + MINUTES_PER_DAY
        } else {
            self.end_minute
        }
    }

    /// Duration in minutes after wrap resolution.
    pub fn duration_minutes(&self) -> u32 {
        self.effective_end() - self.start_minute
    }

    /// Whether the block runs past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.effective_end() > MINUTES_PER_DAY
    }

    /// Check if this block overlaps another. Touching blocks do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.effective_end() && self.effective_end() > other.start_minute
    }

    /// `HH:mm - HH:mm` label as shown on the block card.
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            format_minutes(self.start_minute),
            format_minutes(self.end_minute)
        )
    }
}

/// Input from the "plan a block" form, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoutineBlock {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Default for NewRoutineBlock {
    fn default() -> Self {
        Self {
            title: String::new(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            priority: Priority::Medium,
            icon: None,
        }
    }
}

impl NewRoutineBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Form prefilled from a clicked hour slot: starts at the slot, ends one hour later.
    ///
    /// # Errors
    /// Returns an error if `slot` is not `HH:mm`.
    pub fn for_slot(title: impl Into<String>, slot: &str) -> Result<Self, ValidationError> {
        let start = parse_hhmm(slot)?;
        Ok(Self::new(title).with_times(start, start - start % 60 + 60))
    }

    /// Set start and end from minute-of-day values. Both are written as
    /// `HH:mm`, so an end past midnight is kept only through the wrap rule.
    pub fn with_times(mut self, start_minute: u32, end_minute: u32) -> Self {
        self.start_time = format_minutes(start_minute);
        self.end_time = format_minutes(end_minute);
        self
    }

    /// Set the start and a length in minutes.
    ///
    /// The length must lie in `1..=1440`: anything longer cannot be told
    /// apart from a shorter block once written as `HH:mm`.
    ///
    /// # Errors
    /// Returns [`ValidationError::MinuteOutOfRange`] for an out-of-range
    /// start or length.
    pub fn with_duration(self, start_minute: u32, minutes: u32) -> Result<Self, ValidationError> {
        if start_minute >= MINUTES_PER_DAY {
            return Err(ValidationError::MinuteOutOfRange {
                field: "start_minute",
                value: start_minute,
                min: 0,
                max: MINUTES_PER_DAY - 1,
            });
        }
        if minutes == 0 || minutes > MINUTES_PER_DAY {
            return Err(ValidationError::MinuteOutOfRange {
                field: "duration",
                value: minutes,
                min: 1,
                max: MINUTES_PER_DAY,
            });
        }
        Ok(self.with_times(start_minute, start_minute + minutes))
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Validate the form and produce a block under the given id.
    ///
    /// # Errors
    /// Returns an error for a blank title or an unparsable time.
    pub fn into_block(self, id: impl Into<String>) -> Result<TimeBlock, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let start = parse_hhmm(&self.start_time)?;
        let end = parse_hhmm(&self.end_time)?;
        // An `HH:mm` end never exceeds 23:59; midnight maps to the wrapped day end.
        let end = if end == 0 { MINUTES_PER_DAY } else { end };
        let block = TimeBlock::new(id, title, start, end, self.priority)?;
        Ok(match self.icon {
            Some(icon) => block.with_icon(icon),
            None => block,
        })
    }
}
