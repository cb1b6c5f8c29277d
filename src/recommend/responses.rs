//! Response DTOs for recommendation endpoints.

use serde::Serialize;

use super::models::HotelListing;
use super::popularity::HotRoom;
use super::similarity::RoomRecommendations;

/// Similar rooms, split by hotel
#[derive(Debug, Serialize)]
pub struct SimilarRoomsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub recommendations: RoomRecommendations,
}

/// Other hotels in the same city
#[derive(Debug, Serialize)]
pub struct SimilarHotelsResponse {
    pub success: bool,
    pub recommendations: Vec<HotelListing>,
}

/// Rooms with many recent bookings
#[derive(Debug, Serialize)]
pub struct HotRoomsResponse {
    pub success: bool,
    pub recommendations: Vec<HotRoom>,
}
