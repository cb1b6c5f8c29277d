//! Recommendation route handlers

use axum::{routing::post, Json, Router};
use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::AppState;

use super::error::RecommendError;
use super::popularity::{hot_rooms, hotels_in_same_city};
use super::requests::{HotRoomsRequest, SimilarHotelsRequest, SimilarRoomsRequest};
use super::responses::{HotRoomsResponse, SimilarHotelsResponse, SimilarRoomsResponse};
use super::similarity::recommend_rooms;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/recommendations/similar-rooms", post(similar_rooms))
        .route("/api/recommendations/similar-hotels", post(similar_hotels))
        .route("/api/recommendations/hot-rooms", post(hot))
}

/// Rooms most like the given one, split into same-hotel and other-hotel
pub async fn similar_rooms(Json(req): Json<SimilarRoomsRequest>) -> Result<Json<SimilarRoomsResponse>> {
    let room_id = req.room_id.trim();
    if matches!(room_id, "" | "undefined" | "null") {
        return Err(RecommendError::InvalidRoomId(req.room_id.clone()).into());
    }

    let recommendations = recommend_rooms(&req.rooms, room_id, req.top);
    debug!(
        room_id,
        candidates = req.rooms.len(),
        same_hotel = recommendations.same_hotel_rooms.len(),
        other_hotel = recommendations.other_hotel_rooms.len(),
        "recommended similar rooms"
    );

    Ok(Json(SimilarRoomsResponse {
        success: true,
        recommendations,
    }))
}

/// Other hotels in the same city as the given one
pub async fn similar_hotels(
    Json(req): Json<SimilarHotelsRequest>,
) -> Result<Json<SimilarHotelsResponse>> {
    let hotel_id = req.hotel_id.trim();
    if hotel_id.is_empty() {
        return Err(RecommendError::MissingHotelId.into());
    }

    let recommendations = hotels_in_same_city(&req.hotels, hotel_id, req.top)?;
    debug!(hotel_id, found = recommendations.len(), "recommended hotels");

    Ok(Json(SimilarHotelsResponse {
        success: true,
        recommendations,
    }))
}

/// Rooms with at least three bookings in the past week
pub async fn hot(Json(req): Json<HotRoomsRequest>) -> Json<HotRoomsResponse> {
    let now = req.now.unwrap_or_else(Utc::now);
    let recommendations = hot_rooms(&req.rooms, &req.bookings, now);
    debug!(
        bookings = req.bookings.len(),
        hot = recommendations.len(),
        "computed hot rooms"
    );

    Json(HotRoomsResponse {
        success: true,
        recommendations,
    })
}
