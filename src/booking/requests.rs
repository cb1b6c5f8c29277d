//! Request DTOs for availability and booking endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::pricing::models::lenient;

use super::models::{flexible_date, flexible_date_opt, flexible_dates, BookingInterval};
use super::selection::SelectionState;

/// Request to expand bookings into booked days
#[derive(Debug, Deserialize)]
pub struct BookedDatesRequest {
    #[serde(default)]
    pub bookings: Vec<BookingInterval>,
}

/// Request to check a stay against existing bookings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    #[serde(default)]
    pub bookings: Vec<BookingInterval>,
    #[serde(alias = "checkIn", deserialize_with = "flexible_date")]
    pub check_in_date: NaiveDate,
    #[serde(alias = "checkOut", deserialize_with = "flexible_date")]
    pub check_out_date: NaiveDate,
}

/// Request to apply one calendar click
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDateRequest {
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(deserialize_with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub bookings: Vec<BookingInterval>,
    /// Already expanded booked days, merged with `bookings`
    #[serde(default, deserialize_with = "flexible_dates")]
    pub booked_dates: Vec<NaiveDate>,
}

/// Request to lay out one calendar month
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGridRequest {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub bookings: Vec<BookingInterval>,
    #[serde(default)]
    pub selection: SelectionState,
    /// Defaults to the server's current UTC day
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub today: Option<NaiveDate>,
}

/// Request to price a selected stay
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, alias = "price", deserialize_with = "lenient::number")]
    pub price_per_night: Decimal,
    #[serde(default, deserialize_with = "lenient::number")]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub promo_code: Option<String>,
}
