//! Synthetic hotel generation.
//!
//! Builds a plausible hotel listing with random rooms for demos and test
//! fixtures. Every random choice is drawn from the supplied source, so a
//! seeded source produces the same hotel every time.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::calculators::suggest_room_price;
use super::catalog::{
    city_catalog, HotelStyle, AMENITIES, BATHROOM_CATEGORIES, BED_CATEGORIES, EMAILS,
    PHONE_NUMBERS, ROOM_TYPES,
};
use super::models::{lenient, RoomDescriptor};
use super::random::RandomSource;

const DEFAULT_GUEST_COUNT: u32 = 2;
const DEFAULT_ROOM_COUNT: u32 = 1;
const DEFAULT_STYLE: &str = "modern";
const DEFAULT_BUDGET: &str = "medium";

/// What the caller wants the generated hotel to look like.
///
/// Every field is optional and forgiving: a value of the wrong shape falls
/// back to its default instead of rejecting the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelCriteria {
    #[serde(deserialize_with = "lenient::text")]
    pub city: String,
    /// Echoed as given; `low`, `medium` or `high` by convention
    #[serde(deserialize_with = "budget_label")]
    pub budget: String,
    #[serde(deserialize_with = "guest_count_or_default")]
    pub guest_count: u32,
    #[serde(deserialize_with = "room_count_or_default")]
    pub room_count: u32,
    /// Echoed only; room amenities are drawn at random.
    #[serde(deserialize_with = "lenient::labels")]
    pub amenities: Vec<String>,
    /// Echoed as given; unknown styles get the modern description
    #[serde(deserialize_with = "style_label")]
    pub style: String,
}

impl Default for HotelCriteria {
    fn default() -> Self {
        Self {
            city: String::new(),
            budget: DEFAULT_BUDGET.to_string(),
            guest_count: DEFAULT_GUEST_COUNT,
            room_count: DEFAULT_ROOM_COUNT,
            amenities: Vec::new(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl HotelCriteria {
    pub fn hotel_style(&self) -> HotelStyle {
        HotelStyle::from_label(&self.style)
    }
}

fn guest_count_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::count(&value).unwrap_or(DEFAULT_GUEST_COUNT))
}

fn room_count_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::count(&value).unwrap_or(DEFAULT_ROOM_COUNT))
}

fn style_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(label_or(Value::deserialize(deserializer)?, DEFAULT_STYLE))
}

fn budget_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(label_or(Value::deserialize(deserializer)?, DEFAULT_BUDGET))
}

fn label_or(value: Value, default: &str) -> String {
    match value {
        Value::String(label) => label,
        _ => default.to_string(),
    }
}

/// A generated room with its suggested nightly price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRoom {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: i64,
    pub room_area: u32,
    pub max_adults: u32,
    pub max_children: u32,
    pub beds_details: BTreeMap<String, u32>,
    pub bathrooms_details: BTreeMap<String, u32>,
    /// Amenities present in this room
    pub amenities: Vec<String>,
    pub room_images: Vec<String>,
}

/// A complete generated hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSuggestion {
    pub hotel_name: String,
    pub hotel_description: String,
    pub hotel_address: String,
    pub contact: String,
    pub city: String,
    pub rooms: Vec<GeneratedRoom>,
    pub total_estimated_price: i64,
    pub reason: String,
}

/// Generate a hotel for the given criteria.
///
/// Unknown cities use the default city's catalog; the requested city is
/// still echoed back unchanged.
pub fn suggest_complete_hotel(criteria: &HotelCriteria, rng: &mut impl RandomSource) -> HotelSuggestion {
    let catalog = city_catalog(&criteria.city);

    let hotel_name = pick_or_first(rng, &catalog.hotel_names);
    let hotel_address = pick_or_first(rng, &catalog.addresses);
    let phone = pick_or_first(rng, &PHONE_NUMBERS);
    let email = pick_or_first(rng, &EMAILS);

    let rooms: Vec<GeneratedRoom> = (0..criteria.room_count)
        .map(|index| generate_room(index, rng))
        .collect();

    let total_estimated_price = rooms
        .iter()
        .fold(0i64, |acc, room| acc.saturating_add(room.price_per_night));

    HotelSuggestion {
        hotel_description: criteria.hotel_style().describe(hotel_name),
        hotel_name: hotel_name.to_string(),
        hotel_address: hotel_address.to_string(),
        contact: format!("{phone} / {email}"),
        city: criteria.city.clone(),
        rooms,
        total_estimated_price,
        reason: format_hotel_reason(criteria),
    }
}

fn pick_or_first<'a>(rng: &mut impl RandomSource, items: &[&'a str]) -> &'a str {
    rng.pick(items).copied().unwrap_or_default()
}

/// Draw one room. Draw order: type, area, adults, children, beds,
/// bathrooms, amenities, then the price jitter.
fn generate_room(index: u32, rng: &mut impl RandomSource) -> GeneratedRoom {
    let room_type = pick_or_first(rng, &ROOM_TYPES);
    let room_number = format!("P{:02}", index + 1);

    let room_area = rng.below(50) + 20;
    let max_adults = rng.below(4) + 1;
    let max_children = rng.below(3);

    let beds_details: BTreeMap<String, u32> = BED_CATEGORIES
        .iter()
        .map(|(label, upper)| (label.to_string(), rng.below(*upper)))
        .collect();

    let bathrooms_details: BTreeMap<String, u32> = BATHROOM_CATEGORIES
        .iter()
        .map(|(label, min, extra)| (label.to_string(), min + rng.below(*extra)))
        .collect();

    let amenity_flags: Vec<(&str, bool)> = AMENITIES
        .iter()
        .map(|label| (*label, rng.next_unit() > 0.5))
        .collect();

    let descriptor = RoomDescriptor {
        room_area: Decimal::from(room_area),
        max_adults: Decimal::from(max_adults),
        max_children: Decimal::from(max_children),
        beds_details: to_decimal_counts(&beds_details),
        bathrooms_details: to_decimal_counts(&bathrooms_details),
        amenities: amenity_flags
            .iter()
            .map(|(label, present)| (label.to_string(), *present))
            .collect(),
        room_type: room_type.to_string(),
    };
    let suggestion = suggest_room_price(&descriptor, rng);

    GeneratedRoom {
        room_number,
        room_type: room_type.to_string(),
        price_per_night: suggestion.price,
        room_area,
        max_adults,
        max_children,
        beds_details,
        bathrooms_details,
        amenities: amenity_flags
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(label, _)| label.to_string())
            .collect(),
        room_images: Vec::new(),
    }
}

fn to_decimal_counts(counts: &BTreeMap<String, u32>) -> BTreeMap<String, Decimal> {
    counts
        .iter()
        .map(|(label, count)| (label.clone(), Decimal::from(*count)))
        .collect()
}

fn format_hotel_reason(criteria: &HotelCriteria) -> String {
    format!(
        "AI đã tạo gợi ý khách sạn hoàn chỉnh dựa trên:\n\
         • Thành phố: {}\n\
         • Phong cách: {}\n\
         • Số phòng: {}\n\
         • Ưu tiên: {} budget\n\
         • Sức chứa: {} khách",
        criteria.city,
        criteria.style,
        criteria.room_count,
        criteria.budget,
        criteria.guest_count,
    )
}
