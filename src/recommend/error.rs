/// Failures looking up the room or hotel to recommend from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    #[error("invalid roomId: {0:?}")]
    InvalidRoomId(String),

    #[error("hotelId required")]
    MissingHotelId,

    #[error("hotel not found: {0}")]
    HotelNotFound(String),
}
