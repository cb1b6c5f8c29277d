//! Pricing route handlers

use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::suggest_room_price;
use super::generator::suggest_complete_hotel;
use super::random::{SeededRandom, ThreadRandom};
use super::requests::{SuggestHotelRequest, SuggestRoomPriceRequest};
use super::responses::{HotelSuggestionResponse, RoomPriceResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/room-suggestion", post(suggest_room))
        .route("/api/pricing/hotel-suggestion", post(suggest_hotel))
}

/// Suggest a nightly price for the posted room
pub async fn suggest_room(Json(req): Json<SuggestRoomPriceRequest>) -> Json<RoomPriceResponse> {
    let suggestion = match req.seed {
        Some(seed) => suggest_room_price(&req.room, &mut SeededRandom::new(seed)),
        None => suggest_room_price(&req.room, &mut ThreadRandom),
    };

    debug!(
        room_type = %suggestion.breakdown.room_type,
        subtotal = %suggestion.breakdown.subtotal,
        factor = %suggestion.breakdown.factor,
        price = suggestion.price,
        "suggested room price"
    );

    Json(suggestion.into())
}

/// Generate a complete hotel listing
pub async fn suggest_hotel(
    State(state): State<AppState>,
    Json(req): Json<SuggestHotelRequest>,
) -> Result<Json<HotelSuggestionResponse>> {
    let max_rooms = state.config.max_rooms;
    if req.criteria.room_count > max_rooms {
        warn!(
            "Rejected hotel suggestion for {} rooms (max {})",
            req.criteria.room_count, max_rooms
        );
        return Err(AppError::BadRequest(format!(
            "roomCount must be at most {max_rooms}"
        )));
    }

    let hotel = match req.seed {
        Some(seed) => suggest_complete_hotel(&req.criteria, &mut SeededRandom::new(seed)),
        None => suggest_complete_hotel(&req.criteria, &mut ThreadRandom),
    };

    debug!(
        hotel = %hotel.hotel_name,
        rooms = hotel.rooms.len(),
        total = hotel.total_estimated_price,
        "generated hotel suggestion"
    );

    Ok(Json(hotel.into()))
}
