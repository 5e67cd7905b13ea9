//! Calendar override registry.
//!
//! A fixed table of annually recurring events. When one is active for a
//! date it overrides the weather-based selection entirely; only the
//! binary day/night split still applies to pick which of the event's two
//! images to show. The table is validated at construction: no two events
//! may be active on the same day of year.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::AssetId;

/// Inclusive month/day range recurring every year.
///
/// `start` may sort after `end`, in which case the range wraps the year
/// boundary (New Year runs Dec 31 through Jan 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl DateRange {
    pub const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    /// A range covering a single recurring day.
    pub const fn single(month: u32, day: u32) -> Self {
        Self::new(month, day, month, day)
    }

    /// Whether the given month/day falls inside this range.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let point = (month, day);
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);
        if start <= end {
            start <= point && point <= end
        } else {
            // Wrapping range: active through the year boundary.
            point >= start || point <= end
        }
    }

    fn endpoints_valid(&self) -> bool {
        valid_month_day(self.start_month, self.start_day)
            && valid_month_day(self.end_month, self.end_day)
    }
}

/// A named recurring event with its override images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier fragment, as used in the asset file stems.
    pub name: String,
    pub range: DateRange,
}

impl CalendarEvent {
    pub fn new<S: Into<String>>(name: S, range: DateRange) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    /// Whether the event is active on the given date (year-independent).
    pub fn is_active(&self, date: NaiveDate) -> bool {
        self.range.contains(date.month(), date.day())
    }

    /// Skyline-family override image for the day/night split.
    pub fn skyline_asset(&self, night: bool) -> AssetId {
        let suffix = if night { "night" } else { "day" };
        AssetId::new(format!("F_{}_{}", self.name, suffix))
    }

    /// Tower-family override image for the day/night split.
    pub fn tower_asset(&self, night: bool) -> AssetId {
        let suffix = if night { "night" } else { "day" };
        AssetId::new(format!("incity_{}_{}", self.name, suffix))
    }
}

/// Ordered table of calendar events, validated to be non-overlapping.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    events: Vec<CalendarEvent>,
}

impl EventRegistry {
    /// Build a registry, rejecting invalid dates and overlapping ranges.
    ///
    /// Overlap is checked over every day of year including Feb 29, so
    /// first-match lookup order can never matter. An overlapping table is
    /// a construction bug, surfaced here rather than resolved silently.
    pub fn new(events: Vec<CalendarEvent>) -> Result<Self> {
        for event in &events {
            if !event.range.endpoints_valid() {
                return Err(Error::InvalidEventDate {
                    name: event.name.clone(),
                    month: event.range.start_month,
                    day: event.range.start_day,
                });
            }
        }

        for month in 1..=12 {
            for day in 1..=days_in_month(month) {
                let mut active = events.iter().filter(|e| e.range.contains(month, day));
                if let (Some(first), Some(second)) = (active.next(), active.next()) {
                    return Err(Error::OverlappingEvents {
                        first: first.name.clone(),
                        second: second.name.clone(),
                        month,
                        day,
                    });
                }
            }
        }

        Ok(Self { events })
    }

    /// First event active on the given month/day, if any.
    ///
    /// With a validated table at most one event can match, so "first" is
    /// just iteration order, not a precedence rule.
    pub fn active_event(&self, month: u32, day: u32) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.range.contains(month, day))
    }

    /// Event active on the given date, if any.
    pub fn active_on(&self, date: NaiveDate) -> Option<&CalendarEvent> {
        self.active_event(date.month(), date.day())
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    fn builtin_table() -> Vec<CalendarEvent> {
        vec![
            CalendarEvent::new("saint_valentin", DateRange::single(2, 14)),
            CalendarEvent::new("14_juillet", DateRange::single(7, 14)),
            CalendarEvent::new("halloween", DateRange::single(10, 31)),
            CalendarEvent::new("fete_lumieres", DateRange::new(12, 8, 12, 11)),
            CalendarEvent::new("noel", DateRange::new(12, 24, 12, 25)),
            CalendarEvent::new("nouvel_an", DateRange::new(12, 31, 1, 1)),
        ]
    }
}

fn valid_month_day(month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(month)
}

/// Maximum day count per month; Feb includes the leap day so recurring
/// ranges over Feb 29 stay representable.
fn days_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

static BUILTIN: Lazy<EventRegistry> = Lazy::new(|| {
    EventRegistry::new(EventRegistry::builtin_table())
        .expect("builtin calendar event table must be non-overlapping")
});

/// The built-in Lyon event table, validated on first access.
pub fn builtin_events() -> &'static EventRegistry {
    &BUILTIN
}
