//! Response DTOs for pricing API endpoints.

use serde::Serialize;

use super::generator::HotelSuggestion;
use super::models::{PriceBreakdown, PriceSuggestion};

/// Response for room price suggestion
#[derive(Debug, Serialize)]
pub struct RoomPriceResponse {
    pub success: bool,
    pub price: i64,
    pub reason: String,
    pub breakdown: PriceBreakdown,
}

impl From<PriceSuggestion> for RoomPriceResponse {
    fn from(suggestion: PriceSuggestion) -> Self {
        Self {
            success: true,
            price: suggestion.price,
            reason: suggestion.reason,
            breakdown: suggestion.breakdown,
        }
    }
}

/// Response for complete hotel suggestion
#[derive(Debug, Serialize)]
pub struct HotelSuggestionResponse {
    pub success: bool,
    #[serde(flatten)]
    pub hotel: HotelSuggestion,
}

impl From<HotelSuggestion> for HotelSuggestionResponse {
    fn from(hotel: HotelSuggestion) -> Self {
        Self {
            success: true,
            hotel,
        }
    }
}
