//! "Hot" rooms by recent bookings, and hotels in the same city.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::error::RecommendError;
use super::models::{BookingActivity, HotelListing, RoomListing};

/// Bookings within this many hours count as recent
pub const RECENT_WINDOW_HOURS: i64 = 168;

/// Recent bookings needed for a room to be hot
pub const HOT_ROOM_THRESHOLD: usize = 3;

/// A room with its recent booking count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotRoom {
    #[serde(flatten)]
    pub room: RoomListing,
    pub recent_bookings_count: usize,
    pub is_hot: bool,
}

/// Bookings per room id created at or after `since`.
pub fn recent_booking_counts(
    bookings: &[BookingActivity],
    since: DateTime<Utc>,
) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for booking in bookings.iter().filter(|b| b.created_at >= since) {
        *counts.entry(booking.room.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Rooms booked at least [`HOT_ROOM_THRESHOLD`] times in the
/// [`RECENT_WINDOW_HOURS`] before `now`, in listing order.
pub fn hot_rooms(
    rooms: &[RoomListing],
    bookings: &[BookingActivity],
    now: DateTime<Utc>,
) -> Vec<HotRoom> {
    let since = now - Duration::hours(RECENT_WINDOW_HOURS);
    let counts = recent_booking_counts(bookings, since);

    rooms
        .iter()
        .filter_map(|room| {
            let count = counts.get(room.id.as_str()).copied().unwrap_or(0);
            (count >= HOT_ROOM_THRESHOLD).then(|| HotRoom {
                room: room.clone(),
                recent_bookings_count: count,
                is_hot: true,
            })
        })
        .collect()
}

/// Up to `top` other hotels in the same city as `hotel_id`.
pub fn hotels_in_same_city(
    hotels: &[HotelListing],
    hotel_id: &str,
    top: usize,
) -> Result<Vec<HotelListing>, RecommendError> {
    let base = hotels
        .iter()
        .find(|hotel| hotel.id == hotel_id)
        .ok_or_else(|| RecommendError::HotelNotFound(hotel_id.to_string()))?;

    Ok(hotels
        .iter()
        .filter(|hotel| hotel.id != base.id && hotel.city == base.city)
        .take(top)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        "2025-06-15T12:00:00Z".parse().unwrap()
    }

    fn booking(room: &str, created_at: &str) -> BookingActivity {
        serde_json::from_value(json!({ "room": room, "createdAt": created_at })).unwrap()
    }

    fn listing(id: &str) -> RoomListing {
        serde_json::from_value(json!({ "_id": id })).unwrap()
    }

    fn hotel(id: &str, city: &str) -> HotelListing {
        serde_json::from_value(json!({ "_id": id, "city": city, "name": id })).unwrap()
    }

    #[test]
    fn test_recent_counts_ignore_old_bookings() {
        let bookings = vec![
            booking("r1", "2025-06-14T08:00:00Z"),
            booking("r1", "2025-06-08T12:00:00Z"), // exactly 168h back
            booking("r1", "2025-06-08T11:59:59Z"),
            booking("r2", "2025-06-15T11:00:00Z"),
        ];
        let counts = recent_booking_counts(&bookings, now() - Duration::hours(RECENT_WINDOW_HOURS));
        assert_eq!(counts["r1"], 2);
        assert_eq!(counts["r2"], 1);
    }

    #[test]
    fn test_hot_rooms_need_three_recent_bookings() {
        let rooms = vec![listing("r1"), listing("r2"), listing("r3")];
        let bookings = vec![
            booking("r2", "2025-06-10T00:00:00Z"),
            booking("r2", "2025-06-11T00:00:00Z"),
            booking("r2", "2025-06-12T00:00:00Z"),
            booking("r1", "2025-06-12T00:00:00Z"),
            booking("r1", "2025-06-13T00:00:00Z"),
            booking("r1", "2025-05-01T00:00:00Z"),
        ];

        let hot = hot_rooms(&rooms, &bookings, now());
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].room.id, "r2");
        assert_eq!(hot[0].recent_bookings_count, 3);
        assert!(hot[0].is_hot);

        let json = serde_json::to_value(&hot[0]).unwrap();
        assert_eq!(json["_id"], "r2");
        assert_eq!(json["recentBookingsCount"], 3);
        assert_eq!(json["isHot"], true);
    }

    #[test]
    fn test_hotels_in_same_city() {
        let hotels = vec![
            hotel("h1", "Hà Nội"),
            hotel("h2", "Đà Nẵng"),
            hotel("h3", "Hà Nội"),
            hotel("h4", "Hà Nội"),
        ];

        let ids: Vec<_> = hotels_in_same_city(&hotels, "h1", 6)
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["h3", "h4"]);

        assert_eq!(hotels_in_same_city(&hotels, "h1", 1).unwrap().len(), 1);
        assert!(hotels_in_same_city(&hotels, "h2", 6).unwrap().is_empty());
        assert_eq!(
            hotels_in_same_city(&hotels, "h9", 6),
            Err(RecommendError::HotelNotFound("h9".to_string()))
        );
    }
}
