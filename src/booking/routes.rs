//! Availability and booking route handlers

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calendar::{expand_booked_dates, MonthGrid};
use super::conflict::conflicting_bookings;
use super::models::BookingInterval;
use super::quote::quote;
use super::requests::{
    BookedDatesRequest, CheckAvailabilityRequest, MonthGridRequest, QuoteRequest, SelectDateRequest,
};
use super::responses::{
    AvailabilityResponse, BookedDatesResponse, MonthGridResponse, QuoteResponse, SelectionResponse,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/availability/booked-dates", post(booked_dates))
        .route("/api/availability/check", post(check_availability))
        .route("/api/availability/selection", post(select_date))
        .route("/api/availability/month", post(month_grid))
        .route("/api/booking/quote", post(quote_stay))
}

/// Reject bookings longer than `max_nights` before their days are expanded.
fn ensure_stays_within(bookings: &[BookingInterval], max_nights: u32) -> Result<()> {
    match bookings
        .iter()
        .find(|booking| booking.nights() > i64::from(max_nights))
    {
        Some(booking) => {
            warn!(
                "Rejected booking {} to {} ({} nights, max {})",
                booking.check_in,
                booking.check_out,
                booking.nights(),
                max_nights
            );
            Err(AppError::BadRequest(format!(
                "booking from {} to {} exceeds {max_nights} nights",
                booking.check_in, booking.check_out
            )))
        }
        None => Ok(()),
    }
}

/// Expand a room's bookings into booked days
pub async fn booked_dates(
    State(state): State<AppState>,
    Json(req): Json<BookedDatesRequest>,
) -> Result<Json<BookedDatesResponse>> {
    ensure_stays_within(&req.bookings, state.config.max_stay_days)?;

    let dates: Vec<_> = expand_booked_dates(&req.bookings).into_iter().collect();
    debug!("{} bookings expanded to {} booked days", req.bookings.len(), dates.len());

    Ok(Json(BookedDatesResponse {
        success: true,
        count: dates.len(),
        dates,
    }))
}

/// Check whether a stay collides with existing bookings
pub async fn check_availability(
    Json(req): Json<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>> {
    let conflicts = conflicting_bookings(&req.bookings, req.check_in_date, req.check_out_date)?;
    let is_available = conflicts.is_empty();

    debug!(
        check_in = %req.check_in_date,
        check_out = %req.check_out_date,
        conflicts = conflicts.len(),
        "availability checked"
    );

    Ok(Json(AvailabilityResponse {
        success: true,
        is_available,
        message: if is_available {
            "Room is available".to_string()
        } else {
            "Room is not available".to_string()
        },
        conflicts,
    }))
}

/// Apply one calendar click to the caller's selection
pub async fn select_date(
    State(state): State<AppState>,
    Json(req): Json<SelectDateRequest>,
) -> Result<Json<SelectionResponse>> {
    ensure_stays_within(&req.bookings, state.config.max_stay_days)?;

    let mut booked = expand_booked_dates(&req.bookings);
    booked.extend(req.booked_dates.iter().copied());

    let mut selection = req.selection;
    let accepted = selection.pick(req.date, &booked);
    if !accepted {
        debug!("Ignored click on booked day {}", req.date);
    }

    Ok(Json(SelectionResponse {
        success: true,
        accepted,
        phase: selection.phase(),
        nights: selection.nights(),
        selection,
    }))
}

/// Lay out one calendar month with booked and selected days
pub async fn month_grid(
    State(state): State<AppState>,
    Json(req): Json<MonthGridRequest>,
) -> Result<Json<MonthGridResponse>> {
    let grid = MonthGrid::new(req.year, req.month).inspect_err(|e| warn!("{e}"))?;
    ensure_stays_within(&req.bookings, state.config.max_stay_days)?;
    let booked = expand_booked_dates(&req.bookings);
    let today = req.today.unwrap_or_else(|| Utc::now().date_naive());

    Ok(Json(MonthGridResponse {
        success: true,
        year: grid.year(),
        month: grid.month(),
        days_in_month: grid.days_in_month,
        leading_blanks: grid.leading_blanks,
        days: grid.cells(&booked, &req.selection, today),
    }))
}

/// Price the selected stay
pub async fn quote_stay(Json(req): Json<QuoteRequest>) -> Result<Json<QuoteResponse>> {
    let quote = quote(
        req.price_per_night,
        req.discount_percent,
        &req.selection,
        req.promo_code.as_deref(),
    )?;

    debug!(
        nights = quote.nights,
        total = %quote.total_after_promo,
        "quoted stay"
    );

    Ok(Json(QuoteResponse {
        success: true,
        quote,
    }))
}
