//! Booking calendar: booked days, date-range selection, conflict checks and
//! stay quotes.

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod models;
pub mod quote;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod selection;

pub use calendar::{expand_booked_dates, BookedDateSet, DayCell, MonthGrid};
pub use conflict::{conflicting_bookings, is_range_available};
pub use error::BookingError;
pub use models::{BookingInterval, BookingStatus};
pub use quote::{quote, BookingQuote};
pub use routes::router;
pub use selection::{SelectionPhase, SelectionState};
