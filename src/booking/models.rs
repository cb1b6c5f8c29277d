//! Booking models shared by the calendar, conflict check and quote.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::BookingError;

/// Lifecycle of a stored booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// An existing booking's stay, as returned by the bookings API.
///
/// Accepts both `checkIn`/`checkOut` and `checkInDate`/`checkOutDate`, each
/// as a plain date or an RFC 3339 timestamp. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInterval {
    #[serde(alias = "checkInDate", deserialize_with = "flexible_date")]
    pub check_in: NaiveDate,
    #[serde(alias = "checkOutDate", deserialize_with = "flexible_date")]
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl BookingInterval {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
            status: BookingStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Nights between check-in and check-out; negative when inverted.
    pub fn nights(&self) -> i64 {
        self.check_out.signed_duration_since(self.check_in).num_days()
    }
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp (taken as its UTC day), or a
/// naive `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_flexible_date(raw: &str) -> Result<NaiveDate, BookingError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(stamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(stamp.date());
    }
    Err(BookingError::InvalidDate(raw.to_string()))
}

pub(crate) fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn flexible_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_flexible_date(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

pub(crate) fn flexible_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|raw| parse_flexible_date(raw).map_err(serde::de::Error::custom))
        .collect()
}

#[cfg(test)]
pub(crate) fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}
