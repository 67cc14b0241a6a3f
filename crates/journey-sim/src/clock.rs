//! Simulated time
//!
//! Events are stamped relative to a configurable start-of-day time instead of
//! the wall clock, so identical inputs always yield identical labels.

use chrono::{Duration, NaiveTime};

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Where within a simulated day an event lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    /// Client reply or drop-off, at the start of the day
    Client,
    /// Assistant proactive follow-up
    Assistant,
    /// Revival of a lost lead
    Revival,
    /// End-of-day system summary
    Summary,
}

impl DaySlot {
    /// Offset from the start of the day, in hours.
    pub fn offset_hours(self) -> i64 {
        match self {
            DaySlot::Client => 0,
            DaySlot::Assistant => 6,
            DaySlot::Revival => 9,
            DaySlot::Summary => 20,
        }
    }
}

/// Maps `(day, slot)` pairs to labels and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    day_start: NaiveTime,
}

impl DayClock {
    /// Create a clock whose days begin at `day_start`.
    pub fn new(day_start: NaiveTime) -> Self {
        Self { day_start }
    }

    /// Time of day for a slot; wraps past midnight.
    pub fn time_of(&self, slot: DaySlot) -> NaiveTime {
        self.day_start + Duration::hours(slot.offset_hours())
    }

    /// Human-readable label such as `"Day 3, 03:00 PM"`.
    pub fn label(&self, day: u32, slot: DaySlot) -> String {
        format!("Day {day}, {}", self.time_of(slot).format("%I:%M %p"))
    }

    /// Minutes since the start of day 1, saturating at `u32::MAX`.
    pub fn elapsed_minutes(&self, day: u32, slot: DaySlot) -> u32 {
        let day_offset = day.saturating_sub(1).saturating_mul(MINUTES_PER_DAY);
        let slot_offset = (slot.offset_hours() as u32) * 60;
        day_offset.saturating_add(slot_offset)
    }

    /// Configured start-of-day time.
    pub fn day_start(&self) -> NaiveTime {
        self.day_start
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}
