//! Check-in / check-out selection driven by calendar clicks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::BookedDateSet;
use super::models::flexible_date_opt;

/// Where a selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionPhase {
    Empty,
    CheckInOnly,
    RangeComplete,
}

/// In-progress date range pick.
///
/// Only [`SelectionState::pick`] moves the state forward; a check-out
/// without a check-in is treated as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    #[serde(deserialize_with = "flexible_date_opt")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(deserialize_with = "flexible_date_opt")]
    pub check_out_date: Option<NaiveDate>,
}

impl SelectionState {
    pub fn phase(&self) -> SelectionPhase {
        match (self.check_in_date, self.check_out_date) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::CheckInOnly,
            (Some(_), Some(_)) => SelectionPhase::RangeComplete,
        }
    }

    /// Apply a click on `date`. Returns false when the day is booked and the
    /// click was ignored.
    pub fn pick(&mut self, date: NaiveDate, booked: &BookedDateSet) -> bool {
        if booked.contains(&date) {
            return false;
        }

        match self.phase() {
            SelectionPhase::Empty | SelectionPhase::RangeComplete => {
                self.check_in_date = Some(date);
                self.check_out_date = None;
            }
            SelectionPhase::CheckInOnly => {
                if self.check_in_date.is_some_and(|check_in| date > check_in) {
                    self.check_out_date = Some(date);
                } else {
                    self.check_in_date = Some(date);
                }
            }
        }
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `date` is highlighted: inside the range when complete, equal
    /// to the check-in when only that is set.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match (self.check_in_date, self.check_out_date) {
            (Some(check_in), Some(check_out)) => check_in <= date && date <= check_out,
            (Some(check_in), None) => date == check_in,
            (None, _) => false,
        }
    }

    /// Nights between check-in and check-out; 0 until the range is complete.
    pub fn nights(&self) -> i64 {
        match (self.check_in_date, self.check_out_date) {
            (Some(check_in), Some(check_out)) => {
                check_out.signed_duration_since(check_in).num_days().abs()
            }
            _ => 0,
        }
    }

    pub fn total_for(&self, nightly_price: Decimal) -> Decimal {
        nightly_price.saturating_mul(Decimal::from(self.nights()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::calendar::expand_booked_dates;
    use crate::booking::models::{date, BookingInterval};
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_pick_cycle() {
        let booked = BookedDateSet::new();
        let mut selection = SelectionState::default();
        assert_eq!(selection.phase(), SelectionPhase::Empty);

        assert!(selection.pick(date("2025-06-10"), &booked));
        assert_eq!(selection.phase(), SelectionPhase::CheckInOnly);
        assert_eq!(selection.check_in_date, Some(date("2025-06-10")));

        assert!(selection.pick(date("2025-06-12"), &booked));
        assert_eq!(selection.phase(), SelectionPhase::RangeComplete);
        assert_eq!(selection.check_out_date, Some(date("2025-06-12")));
        assert_eq!(selection.nights(), 2);

        assert!(selection.pick(date("2025-06-15"), &booked));
        assert_eq!(selection.phase(), SelectionPhase::CheckInOnly);
        assert_eq!(selection.check_in_date, Some(date("2025-06-15")));
        assert_eq!(selection.check_out_date, None);
        assert_eq!(selection.nights(), 0);
    }

    #[test]
    fn test_earlier_or_same_day_replaces_check_in() {
        let booked = BookedDateSet::new();
        let mut selection = SelectionState::default();
        selection.pick(date("2025-06-10"), &booked);

        selection.pick(date("2025-06-08"), &booked);
        assert_eq!(selection.check_in_date, Some(date("2025-06-08")));
        assert_eq!(selection.phase(), SelectionPhase::CheckInOnly);

        selection.pick(date("2025-06-08"), &booked);
        assert_eq!(selection.check_in_date, Some(date("2025-06-08")));
        assert_eq!(selection.check_out_date, None);
    }

    #[test]
    fn test_booked_day_is_ignored() {
        let booked = expand_booked_dates(&[BookingInterval::new(
            date("2025-06-11"),
            date("2025-06-11"),
        )]);
        let mut selection = SelectionState::default();

        assert!(!selection.pick(date("2025-06-11"), &booked));
        assert_eq!(selection, SelectionState::default());

        selection.pick(date("2025-06-10"), &booked);
        assert!(!selection.pick(date("2025-06-11"), &booked));
        assert_eq!(selection.phase(), SelectionPhase::CheckInOnly);
    }

    #[test]
    fn test_range_may_span_booked_days() {
        // Only the clicked day is checked, as on the booking page
        let booked = expand_booked_dates(&[BookingInterval::new(
            date("2025-06-11"),
            date("2025-06-12"),
        )]);
        let mut selection = SelectionState::default();
        selection.pick(date("2025-06-10"), &booked);
        assert!(selection.pick(date("2025-06-14"), &booked));
        assert_eq!(selection.nights(), 4);
    }

    #[test]
    fn test_is_selected() {
        let booked = BookedDateSet::new();
        let mut selection = SelectionState::default();
        assert!(!selection.is_selected(date("2025-06-10")));

        selection.pick(date("2025-06-10"), &booked);
        assert!(selection.is_selected(date("2025-06-10")));
        assert!(!selection.is_selected(date("2025-06-11")));

        selection.pick(date("2025-06-12"), &booked);
        assert!(selection.is_selected(date("2025-06-10")));
        assert!(selection.is_selected(date("2025-06-11")));
        assert!(selection.is_selected(date("2025-06-12")));
        assert!(!selection.is_selected(date("2025-06-13")));
    }

    #[test]
    fn test_orphan_check_out_is_empty() {
        let mut selection = SelectionState {
            check_in_date: None,
            check_out_date: Some(date("2025-06-12")),
        };
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert_eq!(selection.nights(), 0);
        assert!(!selection.is_selected(date("2025-06-12")));

        selection.pick(date("2025-06-20"), &BookedDateSet::new());
        assert_eq!(selection.check_in_date, Some(date("2025-06-20")));
        assert_eq!(selection.check_out_date, None);
    }

    #[test]
    fn test_total_and_clear() {
        let mut selection = SelectionState {
            check_in_date: Some(date("2025-06-10")),
            check_out_date: Some(date("2025-06-13")),
        };
        assert_eq!(selection.total_for(dec!(450000)), dec!(1350000));

        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert_eq!(selection.total_for(dec!(450000)), dec!(0));
    }

    #[test]
    fn test_deserialize_partial_state() {
        let selection: SelectionState =
            serde_json::from_str(r#"{"checkInDate": "2025-06-10"}"#).unwrap();
        assert_eq!(selection.phase(), SelectionPhase::CheckInOnly);

        let empty: SelectionState = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SelectionState::default());
    }

    #[test]
    fn test_deserialize_client_timestamps() {
        let selection: SelectionState = serde_json::from_str(
            r#"{"checkInDate": "2025-06-10T00:00:00.000Z", "checkOutDate": "2025-06-12T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(selection.check_in_date, Some(date("2025-06-10")));
        assert_eq!(selection.nights(), 2);

        let cleared: SelectionState =
            serde_json::from_str(r#"{"checkInDate": "2025-06-10", "checkOutDate": null}"#).unwrap();
        assert_eq!(cleared.phase(), SelectionPhase::CheckInOnly);
    }
}
