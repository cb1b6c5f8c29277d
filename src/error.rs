//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::booking::BookingError;
use crate::recommend::RecommendError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: String,
    pub message: String,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::Booking(BookingError::InvalidRange { .. }) => "invalid_range",
            AppError::Booking(BookingError::InvalidMonth { .. }) => "invalid_month",
            AppError::Booking(BookingError::InvalidDate(_)) => "invalid_date",
            AppError::Booking(BookingError::UnknownPromo(_)) => "unknown_promo",
            AppError::Recommend(RecommendError::InvalidRoomId(_)) => "invalid_room_id",
            AppError::Recommend(RecommendError::MissingHotelId) => "missing_hotel_id",
            AppError::Recommend(RecommendError::HotelNotFound(_)) => "hotel_not_found",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Booking(e) => {
                tracing::warn!("Booking validation failed: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Recommend(e @ RecommendError::HotelNotFound(_)) => {
                tracing::warn!("{}", e);
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Recommend(e) => {
                tracing::warn!("{}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = ErrorResponse {
            success: false,
            error_type: self.error_type().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
