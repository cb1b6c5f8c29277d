//! Room price suggestion engine.
//!
//! Suggests a nightly price for a room from its type, size, capacity, beds,
//! bathrooms and amenities, and generates complete synthetic hotels for
//! demos. Exposed to the booking site over HTTP/JSON.

pub mod calculators;
pub mod catalog;
pub mod generator;
pub mod models;
pub mod random;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{price_with_factor, round_half_up, suggest_room_price};
pub use generator::{suggest_complete_hotel, HotelCriteria, HotelSuggestion};
pub use models::{PriceBreakdown, PriceSuggestion, RoomDescriptor, RoomTypeTier};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use routes::router;
