use chrono::NaiveDate;

/// Validation failures in booking requests.
///
/// The calendar and selection logic itself never fails; these cover
/// caller-supplied ranges, months, dates and promo codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown promo code: {0}")]
    UnknownPromo(String),
}
