//! Content-based "similar rooms".
//!
//! Each room becomes a feature vector: its nightly price and adult capacity
//! min-max scaled across the candidate set, followed by one-hot segments for
//! room type, city and every amenity seen in the set. Rooms are ranked by
//! cosine similarity to the target room.
//!
//! A room always hits exactly one room-type slot and one city slot, and one
//! amenity slot per distinct amenity it lists. The one-hot segments are
//! therefore kept sparse and their dot products counted directly.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use super::models::RoomListing;

/// Default number of recommendations per bucket
pub const DEFAULT_TOP: usize = 6;

/// A candidate room with its similarity to the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRoom {
    pub room: RoomListing,
    pub score: f64,
}

/// Similar rooms split by whether they share the target's hotel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecommendations {
    pub same_hotel_rooms: Vec<ScoredRoom>,
    pub other_hotel_rooms: Vec<ScoredRoom>,
}

#[derive(Debug, Clone, Copy)]
struct MinMax {
    min: f64,
    max: f64,
}

impl MinMax {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |range, v| {
            Some(match range {
                None => MinMax { min: v, max: v },
                Some(MinMax { min, max }) => MinMax {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }

    fn scale(self, value: f64) -> f64 {
        if self.max == self.min {
            0.5
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}

/// One room's position in the feature space.
#[derive(Debug, Clone)]
struct Features<'a> {
    price: f64,
    adults: f64,
    room_type: &'a str,
    city: &'a str,
    amenities: BTreeSet<&'a str>,
}

impl Features<'_> {
    fn dot(&self, other: &Features<'_>) -> f64 {
        let shared_amenities = self.amenities.intersection(&other.amenities).count();
        self.price * other.price
            + self.adults * other.adults
            + f64::from(u8::from(self.room_type == other.room_type))
            + f64::from(u8::from(self.city == other.city))
            + shared_amenities as f64
    }

    fn norm(&self) -> f64 {
        (self.price * self.price + self.adults * self.adults + 2.0 + self.amenities.len() as f64)
            .sqrt()
    }

    /// Norms are at least sqrt(2) from the type and city slots.
    fn cosine(&self, other: &Features<'_>) -> f64 {
        self.dot(other) / (self.norm() * other.norm())
    }
}

fn feature_space(rooms: &[RoomListing]) -> Vec<Features<'_>> {
    let prices = MinMax::of(rooms.iter().map(|room| room.price_per_night));
    let adults = MinMax::of(rooms.iter().map(|room| room.max_adults));

    rooms
        .iter()
        .map(|room| Features {
            price: prices.map_or(0.5, |range| range.scale(room.price_per_night)),
            adults: adults.map_or(0.5, |range| range.scale(room.max_adults)),
            room_type: room.room_type.trim(),
            city: room.city().trim(),
            amenities: room.amenities.iter().map(|a| a.trim()).collect(),
        })
        .collect()
}

/// The `top` rooms most similar to the room with id `target_id`, best
/// first. The target itself is never included. Unknown target gives none.
pub fn similar_rooms(rooms: &[RoomListing], target_id: &str, top: usize) -> Vec<ScoredRoom> {
    let Some(target) = rooms.iter().position(|room| room.id == target_id) else {
        return Vec::new();
    };

    let space = feature_space(rooms);
    let mut scored: Vec<(usize, f64)> = space
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != target)
        .map(|(index, features)| (index, space[target].cosine(features)))
        .collect();

    // stable, so ties keep listing order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(top)
        .map(|(index, score)| ScoredRoom {
            room: rooms[index].clone(),
            score,
        })
        .collect()
}

/// Up to `top` similar rooms from the target's own hotel and up to `top`
/// from other hotels, drawn from the best `2 * top` matches.
pub fn recommend_rooms(rooms: &[RoomListing], target_id: &str, top: usize) -> RoomRecommendations {
    let base_hotel = rooms
        .iter()
        .find(|room| room.id == target_id)
        .and_then(RoomListing::hotel_id);

    let (mut same_hotel_rooms, mut other_hotel_rooms): (Vec<_>, Vec<_>) =
        similar_rooms(rooms, target_id, top.saturating_mul(2))
            .into_iter()
            .partition(|scored| base_hotel.is_some() && scored.room.hotel_id() == base_hotel);

    same_hotel_rooms.truncate(top);
    other_hotel_rooms.truncate(top);

    RoomRecommendations {
        same_hotel_rooms,
        other_hotel_rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn room(value: serde_json::Value) -> RoomListing {
        serde_json::from_value(value).unwrap()
    }

    fn fixture() -> Vec<RoomListing> {
        vec![
            room(json!({
                "_id": "a", "pricePerNight": 500000, "maxAdults": 2, "roomType": "Giường đôi",
                "hotel": {"_id": "h1", "city": "Hà Nội"}, "amenities": ["Free WiFi", "Pool Access"]
            })),
            room(json!({
                "_id": "b", "pricePerNight": 520000, "maxAdults": 2, "roomType": "Giường đôi",
                "hotel": {"_id": "h2", "city": "Hà Nội"}, "amenities": ["Free WiFi", "Pool Access"]
            })),
            room(json!({
                "_id": "c", "pricePerNight": 2000000, "maxAdults": 6, "roomType": "Phòng gia đình",
                "hotel": {"_id": "h3", "city": "Đà Nẵng"}, "amenities": ["Room Service"]
            })),
            room(json!({
                "_id": "d", "pricePerNight": 480000, "maxAdults": 2, "roomType": "Giường đôi",
                "hotel": {"_id": "h1", "city": "Hà Nội"}, "amenities": ["Free WiFi"]
            })),
        ]
    }

    fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    // ── scaling ───────────────────────────────────────────────────

    #[test]
    fn test_min_max_scale() {
        let range = MinMax::of([10.0, 20.0, 30.0].into_iter()).unwrap();
        assert_eq!(range.scale(10.0), 0.0);
        assert_eq!(range.scale(20.0), 0.5);
        assert_eq!(range.scale(30.0), 1.0);

        let flat = MinMax::of([7.0, 7.0].into_iter()).unwrap();
        assert_eq!(flat.scale(7.0), 0.5);
        assert!(MinMax::of(std::iter::empty()).is_none());
    }

    #[test]
    fn test_sparse_cosine_matches_dense_vectors() {
        let rooms = fixture();
        let space = feature_space(&rooms);

        // vocab: types [Giường đôi, Phòng gia đình], cities [Hà Nội, Đà Nẵng],
        // amenities [Free WiFi, Pool Access, Room Service]
        let dense = |f: &Features<'_>| {
            let mut v = vec![f.price, f.adults];
            for t in ["Giường đôi", "Phòng gia đình"] {
                v.push(f64::from(u8::from(f.room_type == t)));
            }
            for c in ["Hà Nội", "Đà Nẵng"] {
                v.push(f64::from(u8::from(f.city == c)));
            }
            for a in ["Free WiFi", "Pool Access", "Room Service"] {
                v.push(f64::from(u8::from(f.amenities.contains(a))));
            }
            v
        };

        for other in &space {
            let expected = cosine_similarity(&dense(&space[0]), &dense(other));
            assert!((space[0].cosine(other) - expected).abs() < 1e-12);
        }
    }

    // ── ranking ───────────────────────────────────────────────────

    #[test]
    fn test_similar_rooms_ranks_and_excludes_target() {
        let ranked = similar_rooms(&fixture(), "a", 10);
        let ids: Vec<_> = ranked.iter().map(|s| s.room.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "d", "c"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(ranked.iter().all(|s| s.room.id != "a"));
    }

    #[test]
    fn test_similar_rooms_respects_top_and_unknown_target() {
        assert_eq!(similar_rooms(&fixture(), "a", 1).len(), 1);
        assert!(similar_rooms(&fixture(), "zzz", 6).is_empty());
        assert!(similar_rooms(&[], "a", 6).is_empty());
    }

    #[test]
    fn test_identical_prices_scale_to_middle() {
        let rooms = vec![
            room(json!({"_id": "x", "pricePerNight": 300000})),
            room(json!({"_id": "y", "pricePerNight": 300000})),
        ];
        let ranked = similar_rooms(&rooms, "x", 6);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
    }

    // ── hotel buckets ─────────────────────────────────────────────

    #[test]
    fn test_recommend_rooms_splits_by_hotel() {
        let recs = recommend_rooms(&fixture(), "a", 6);
        let same: Vec<_> = recs.same_hotel_rooms.iter().map(|s| s.room.id.as_str()).collect();
        let other: Vec<_> = recs.other_hotel_rooms.iter().map(|s| s.room.id.as_str()).collect();

        assert_eq!(same, vec!["d"]);
        assert_eq!(other, vec!["b", "c"]);
    }

    #[test]
    fn test_recommend_rooms_without_hotel_puts_all_in_other() {
        let rooms = vec![
            room(json!({"_id": "x", "roomType": "Giường đơn"})),
            room(json!({"_id": "y", "roomType": "Giường đơn"})),
        ];
        let recs = recommend_rooms(&rooms, "x", 6);
        assert!(recs.same_hotel_rooms.is_empty());
        assert_eq!(recs.other_hotel_rooms.len(), 1);
    }

    #[test]
    fn test_recommend_rooms_truncates_each_bucket() {
        let recs = recommend_rooms(&fixture(), "a", 1);
        assert!(recs.same_hotel_rooms.len() <= 1);
        assert!(recs.other_hotel_rooms.len() <= 1);
    }
}
