//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::generator::HotelCriteria;
use super::models::RoomDescriptor;

/// Request to suggest a nightly room price
#[derive(Debug, Deserialize)]
pub struct SuggestRoomPriceRequest {
    #[serde(flatten)]
    pub room: RoomDescriptor,
    /// Fixes the jitter draw when set
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request to generate a complete hotel
#[derive(Debug, Deserialize)]
pub struct SuggestHotelRequest {
    #[serde(flatten)]
    pub criteria: HotelCriteria,
    #[serde(default)]
    pub seed: Option<u64>,
}
