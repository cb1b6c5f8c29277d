//! Room descriptor and price breakdown models.
//!
//! Room forms post loosely-typed JSON (numbers as strings, `null`s, amenity
//! lists instead of maps). Every field here deserializes leniently: anything
//! that cannot be read as a number counts as zero.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room attributes that drive the price suggestion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomDescriptor {
    /// Floor area in square meters
    #[serde(deserialize_with = "lenient::number")]
    pub room_area: Decimal,
    #[serde(deserialize_with = "lenient::number")]
    pub max_adults: Decimal,
    #[serde(deserialize_with = "lenient::number")]
    pub max_children: Decimal,
    /// Bed category label -> count. Labels are open-ended.
    #[serde(deserialize_with = "lenient::counts")]
    pub beds_details: BTreeMap<String, Decimal>,
    /// Bathroom category label -> count.
    #[serde(deserialize_with = "lenient::counts")]
    pub bathrooms_details: BTreeMap<String, Decimal>,
    /// Amenity label -> present.
    #[serde(deserialize_with = "lenient::flags")]
    pub amenities: BTreeMap<String, bool>,
    #[serde(deserialize_with = "lenient::text")]
    pub room_type: String,
}

impl RoomDescriptor {
    /// Sum of every bed count, whatever the category.
    pub fn bed_count(&self) -> Decimal {
        sum_counts(&self.beds_details)
    }

    /// Sum of every bathroom count, whatever the category.
    pub fn bathroom_count(&self) -> Decimal {
        sum_counts(&self.bathrooms_details)
    }

    /// Number of amenities flagged as present.
    pub fn amenity_count(&self) -> usize {
        self.amenities.values().filter(|present| **present).count()
    }
}

fn sum_counts(counts: &BTreeMap<String, Decimal>) -> Decimal {
    counts
        .values()
        .fold(Decimal::ZERO, |acc, count| acc.saturating_add(*count))
}

/// Base price tier selected from keywords in the room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomTypeTier {
    Standard,
    Single,
    Double,
    Family,
    Premium,
}

impl RoomTypeTier {
    /// Classify a free-text room type.
    ///
    /// Each keyword is tested independently, in order, and a later match
    /// replaces an earlier one: "Phòng đôi cao cấp" is `Premium`.
    pub fn classify(room_type: &str) -> Self {
        let mut tier = RoomTypeTier::Standard;
        if room_type.contains("đơn") {
            tier = RoomTypeTier::Single;
        }
        if room_type.contains("đôi") {
            tier = RoomTypeTier::Double;
        }
        if room_type.contains("gia đình") {
            tier = RoomTypeTier::Family;
        }
        if room_type.contains("cao cấp") {
            tier = RoomTypeTier::Premium;
        }
        tier
    }

    /// Nightly base price in VND
    pub fn base_price(self) -> Decimal {
        match self {
            RoomTypeTier::Standard => Decimal::from(300_000),
            RoomTypeTier::Single => Decimal::from(250_000),
            RoomTypeTier::Double => Decimal::from(400_000),
            RoomTypeTier::Family => Decimal::from(650_000),
            RoomTypeTier::Premium => Decimal::from(900_000),
        }
    }
}

/// Every input and intermediate amount behind a suggested price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub room_type: String,
    pub tier: RoomTypeTier,
    #[serde(with = "rust_decimal::serde::str")]
    pub room_area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_adults: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_children: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bed_count: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bathroom_count: Decimal,
    pub amenity_count: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub area_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub guest_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bed_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bathroom_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amenity_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    /// Random jitter applied to the subtotal, in `[0.8, 1.2)`
    #[serde(with = "rust_decimal::serde::str")]
    pub factor: Decimal,
}

/// Suggested nightly price with its justification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSuggestion {
    /// Multiple of 10,000 within [200,000, 5,000,000]
    pub price: i64,
    pub reason: String,
    pub breakdown: PriceBreakdown,
}

/// Forgiving deserializers for form-shaped JSON.
pub(crate) mod lenient {
    use std::collections::BTreeMap;
    use std::str::FromStr;

    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_number(&value))
    }

    pub fn counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => map
                .iter()
                .map(|(label, count)| (label.clone(), coerce_number(count)))
                .collect(),
            _ => BTreeMap::new(),
        })
    }

    /// Accepts `{"label": truthy}` or `["label", ...]`.
    pub fn flags<'de, D>(deserializer: D) -> Result<BTreeMap<String, bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => map
                .iter()
                .map(|(label, flag)| (label.clone(), is_truthy(flag)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(|label| (label.to_string(), true))
                .collect(),
            _ => BTreeMap::new(),
        })
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    /// Accepts `["label", ...]`; anything else is empty.
    pub fn labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// A whole count from a number or numeric string, if it is one.
    pub fn count(value: &Value) -> Option<u32> {
        let raw = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_string(),
            _ => return None,
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .ok()
            .and_then(|n| n.trunc().to_u32())
    }

    pub fn coerce_number(value: &Value) -> Decimal {
        match value {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(s.trim()),
            Value::Bool(true) => Decimal::ONE,
            _ => Decimal::ZERO,
        }
    }

    fn parse_decimal(raw: &str) -> Decimal {
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
