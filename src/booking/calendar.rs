use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::error::BookingError;
use super::models::BookingInterval;
use super::selection::SelectionState;

// ── Booked dates ──────────────────────────────────────────────────

/// Calendar days already taken by existing bookings.
pub type BookedDateSet = BTreeSet<NaiveDate>;

/// Every day from `start` to `end`, both included. Empty if `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Flatten bookings into the set of unavailable days.
///
/// Both check-in and check-out days are occupied, so a stay ending on the
/// 3rd blocks the 3rd for a new check-in as well.
pub fn expand_booked_dates(bookings: &[BookingInterval]) -> BookedDateSet {
    bookings
        .iter()
        .flat_map(|booking| days_inclusive(booking.check_in, booking.check_out))
        .collect()
}

// ── Month grid ────────────────────────────────────────────────────

/// Layout of one month on the booking calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub first_day: NaiveDate,
    pub days_in_month: u32,
    /// Empty cells before day 1 in a Sunday-first week
    pub leading_blanks: u32,
}

/// One day on the calendar, with the flags the page styles it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub booked: bool,
    pub selected: bool,
    pub today: bool,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(BookingError::InvalidMonth { year, month })?;
        let next_first = first_day
            .checked_add_months(Months::new(1))
            .ok_or(BookingError::InvalidMonth { year, month })?;
        let days_in_month = next_first.signed_duration_since(first_day).num_days() as u32;

        Ok(Self {
            first_day,
            days_in_month,
            leading_blanks: first_day.weekday().num_days_from_sunday(),
        })
    }

    /// Grid for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let first_day = date.with_day(1).unwrap_or(date);
        Self {
            first_day,
            days_in_month: days_in_month_of(first_day),
            leading_blanks: first_day.weekday().num_days_from_sunday(),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day.iter_days().take(self.days_in_month as usize)
    }

    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Self::containing)
    }

    pub fn previous(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
    }

    pub fn cells(
        &self,
        booked: &BookedDateSet,
        selection: &SelectionState,
        today: NaiveDate,
    ) -> Vec<DayCell> {
        self.days()
            .map(|date| DayCell {
                date,
                day: date.day(),
                booked: booked.contains(&date),
                selected: selection.is_selected(date),
                today: date == today,
            })
            .collect()
    }
}

fn days_in_month_of(first_day: NaiveDate) -> u32 {
    match first_day.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first_day).num_days() as u32,
        // December of the last representable year
        None => 31,
    }
}
