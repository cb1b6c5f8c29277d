//! Request DTOs for recommendation endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::pricing::models::lenient;

use super::models::{BookingActivity, HotelListing, RoomListing};
use super::similarity::DEFAULT_TOP;

/// Request for rooms similar to one room
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRoomsRequest {
    #[serde(default)]
    pub rooms: Vec<RoomListing>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub room_id: String,
    #[serde(default = "default_top", deserialize_with = "top_or_default")]
    pub top: usize,
}

/// Request for other hotels in the same city
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarHotelsRequest {
    #[serde(default)]
    pub hotels: Vec<HotelListing>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hotel_id: String,
    #[serde(default = "default_top", deserialize_with = "top_or_default")]
    pub top: usize,
}

/// Request for rooms with many recent bookings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotRoomsRequest {
    #[serde(default)]
    pub rooms: Vec<RoomListing>,
    #[serde(default)]
    pub bookings: Vec<BookingActivity>,
    /// Defaults to the server's current time
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

fn default_top() -> usize {
    DEFAULT_TOP
}

fn top_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::count(&value).map_or(DEFAULT_TOP, |top| top as usize))
}
