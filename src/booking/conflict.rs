use chrono::NaiveDate;

use super::error::BookingError;
use super::models::BookingInterval;

/// Reject ranges that do not end after they start.
pub fn validate_range(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), BookingError> {
    if check_out <= check_in {
        return Err(BookingError::InvalidRange {
            check_in,
            check_out,
        });
    }
    Ok(())
}

/// Whether an existing booking collides with `[check_in, check_out]`.
///
/// A booking collides when it starts inside `[check_in, check_out)`, ends
/// inside `(check_in, check_out]`, or covers the whole range. Cancelled
/// bookings never collide.
pub fn overlaps(booking: &BookingInterval, check_in: NaiveDate, check_out: NaiveDate) -> bool {
    if booking.is_cancelled() {
        return false;
    }
    let starts_inside = booking.check_in >= check_in && booking.check_in < check_out;
    let ends_inside = booking.check_out > check_in && booking.check_out <= check_out;
    let covers = booking.check_in <= check_in && booking.check_out >= check_out;
    starts_inside || ends_inside || covers
}

/// Existing bookings that block the requested stay.
pub fn conflicting_bookings(
    existing: &[BookingInterval],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<BookingInterval>, BookingError> {
    validate_range(check_in, check_out)?;
    Ok(existing
        .iter()
        .filter(|booking| overlaps(booking, check_in, check_out))
        .copied()
        .collect())
}

pub fn is_range_available(
    existing: &[BookingInterval],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<bool, BookingError> {
    Ok(conflicting_bookings(existing, check_in, check_out)?.is_empty())
}
