//! Room and hotel recommendations.
//!
//! Similar rooms by content features, other hotels in the same city, and
//! rooms that are booking fast. Listings and bookings are supplied by the
//! caller.

pub mod error;
pub mod models;
pub mod popularity;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod similarity;

pub use error::RecommendError;
pub use models::{BookingActivity, HotelListing, RoomListing};
pub use popularity::{hot_rooms, hotels_in_same_city, HotRoom};
pub use routes::router;
pub use similarity::{recommend_rooms, similar_rooms, RoomRecommendations, ScoredRoom};
