//! Room, hotel and booking shapes read by the recommenders.
//!
//! Listings keep every field they were sent with, so a recommendation echoes
//! the caller's room or hotel object back with only the known fields
//! normalized.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::pricing::models::lenient;

/// A bookable room as listed by the rooms API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListing {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "identifier")]
    pub id: String,
    #[serde(default, alias = "price", deserialize_with = "float")]
    pub price_per_night: f64,
    #[serde(default, alias = "maxGuests", deserialize_with = "float")]
    pub max_adults: f64,
    #[serde(default, alias = "type", deserialize_with = "lenient::text")]
    pub room_type: String,
    /// Hotel id, or the populated hotel document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hotel_city: String,
    #[serde(default, deserialize_with = "lenient::labels")]
    pub amenities: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RoomListing {
    /// The populated hotel's city, else the embedded `hotelCity`.
    pub fn city(&self) -> &str {
        self.hotel
            .as_ref()
            .and_then(|hotel| hotel.get("city"))
            .and_then(Value::as_str)
            .filter(|city| !city.is_empty())
            .unwrap_or(self.hotel_city.as_str())
    }

    /// Id of the owning hotel, whether referenced or populated.
    pub fn hotel_id(&self) -> Option<String> {
        self.hotel.as_ref().and_then(value_id).filter(|id| !id.is_empty())
    }
}

/// A hotel as listed by the hotels API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelListing {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "identifier")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// When a room was booked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingActivity {
    #[serde(alias = "roomId", deserialize_with = "identifier")]
    pub room: String,
    pub created_at: DateTime<Utc>,
}

/// A string or numeric id, or the `_id` of a populated document.
fn value_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.trim().to_string()),
        Value::Number(id) => Some(id.to_string()),
        Value::Object(doc) => doc.get("_id").or_else(|| doc.get("id")).and_then(value_id),
        _ => None,
    }
}

fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_id(&value).unwrap_or_default())
}

fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::coerce_number(&value).to_f64().unwrap_or(0.0))
}
