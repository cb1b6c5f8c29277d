//! Response DTOs for availability and booking endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::DayCell;
use super::models::BookingInterval;
use super::quote::BookingQuote;
use super::selection::{SelectionPhase, SelectionState};

/// Response listing every booked day
#[derive(Debug, Serialize)]
pub struct BookedDatesResponse {
    pub success: bool,
    pub dates: Vec<NaiveDate>,
    pub count: usize,
}

/// Response for an availability check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub success: bool,
    pub is_available: bool,
    pub message: String,
    pub conflicts: Vec<BookingInterval>,
}

/// Response for a calendar click
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub success: bool,
    /// False when the clicked day was booked
    pub accepted: bool,
    pub phase: SelectionPhase,
    pub selection: SelectionState,
    pub nights: i64,
}

/// Response for one calendar month
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGridResponse {
    pub success: bool,
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Response for a stay quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    #[serde(flatten)]
    pub quote: BookingQuote,
}
