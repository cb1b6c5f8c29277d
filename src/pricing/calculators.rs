//! Core room price suggestion.
//!
//! Pure functions for pricing math. The only non-determinism is the jitter
//! sample, which comes from the caller's [`RandomSource`].

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{PriceBreakdown, PriceSuggestion, RoomDescriptor, RoomTypeTier};
use super::random::{clamp_unit, RandomSource};

/// VND per square meter
pub const AREA_RATE: Decimal = dec!(15000);
pub const ADULT_RATE: Decimal = dec!(80000);
pub const CHILD_RATE: Decimal = dec!(30000);
pub const BED_RATE: Decimal = dec!(120000);
pub const BATHROOM_RATE: Decimal = dec!(100000);
pub const AMENITY_RATE: Decimal = dec!(70000);

/// Suggested prices are rounded to this step.
pub const PRICE_STEP: Decimal = dec!(10000);
pub const MIN_PRICE: Decimal = dec!(200000);
pub const MAX_PRICE: Decimal = dec!(5000000);

/// Jitter factor is `JITTER_FLOOR + sample * JITTER_SPAN`.
pub const JITTER_FLOOR: Decimal = dec!(0.8);
pub const JITTER_SPAN: Decimal = dec!(0.4);

/// Round half up to an integer.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use homestay_booking::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5)), dec!(3));
/// assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
/// assert_eq!(round_half_up(dec!(2.49)), dec!(2));
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.saturating_add(dec!(0.5)).floor()
}

/// Map a uniform sample in `[0, 1)` to a jitter factor in `[0.8, 1.2)`.
pub fn jitter_factor(sample: f64) -> Decimal {
    let sample = Decimal::from_f64(clamp_unit(sample)).unwrap_or(Decimal::ZERO);
    JITTER_FLOOR + sample * JITTER_SPAN
}

/// Apply a jitter factor to a subtotal, round to the price step and clamp.
pub fn price_with_factor(subtotal: Decimal, factor: Decimal) -> i64 {
    let jittered = round_half_up(subtotal.saturating_mul(factor));
    let stepped = round_half_up(jittered / PRICE_STEP).saturating_mul(PRICE_STEP);
    let clamped = stepped.max(MIN_PRICE).min(MAX_PRICE);
    clamped.to_i64().unwrap_or(0)
}

/// Compute every bonus and the subtotal, without jitter.
pub fn price_breakdown(room: &RoomDescriptor) -> PriceBreakdown {
    let tier = RoomTypeTier::classify(&room.room_type);
    let base_price = tier.base_price();

    let bed_count = room.bed_count();
    let bathroom_count = room.bathroom_count();
    let amenity_count = room.amenity_count();

    let area_bonus = room.room_area.saturating_mul(AREA_RATE);
    let guest_bonus = room
        .max_adults
        .saturating_mul(ADULT_RATE)
        .saturating_add(room.max_children.saturating_mul(CHILD_RATE));
    let bed_bonus = bed_count.saturating_mul(BED_RATE);
    let bathroom_bonus = bathroom_count.saturating_mul(BATHROOM_RATE);
    let amenity_bonus = Decimal::from(amenity_count).saturating_mul(AMENITY_RATE);

    let subtotal = [area_bonus, guest_bonus, bed_bonus, bathroom_bonus, amenity_bonus]
        .into_iter()
        .fold(base_price, Decimal::saturating_add);

    PriceBreakdown {
        room_type: room.room_type.clone(),
        tier,
        room_area: room.room_area,
        max_adults: room.max_adults,
        max_children: room.max_children,
        bed_count,
        bathroom_count,
        amenity_count,
        base_price,
        area_bonus,
        guest_bonus,
        bed_bonus,
        bathroom_bonus,
        amenity_bonus,
        subtotal,
        factor: Decimal::ONE,
    }
}

/// Suggest a nightly price for a room.
///
/// Never fails: malformed inputs were already coerced to zero when the
/// descriptor was built. One sample is drawn from `rng` for the jitter.
pub fn suggest_room_price(room: &RoomDescriptor, rng: &mut impl RandomSource) -> PriceSuggestion {
    let mut breakdown = price_breakdown(room);
    breakdown.factor = jitter_factor(rng.next_unit());
    let price = price_with_factor(breakdown.subtotal, breakdown.factor);
    let reason = format_reason(&breakdown);

    PriceSuggestion {
        price,
        reason,
        breakdown,
    }
}

/// Vietnamese summary of the inputs that drove the price.
pub fn format_reason(breakdown: &PriceBreakdown) -> String {
    format!(
        "Giá được tính dựa trên:\n\
         • Loại phòng: {}\n\
         • Diện tích: {} m²\n\
         • Sức chứa: {} NL – {} TE\n\
         • Giường: {}\n\
         • Phòng tắm: {}\n\
         • Tiện nghi: {}",
        breakdown.room_type,
        breakdown.room_area.normalize(),
        breakdown.max_adults.normalize(),
        breakdown.max_children.normalize(),
        breakdown.bed_count.normalize(),
        breakdown.bathroom_count.normalize(),
        breakdown.amenity_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::random::{FixedRandom, SequenceRandom};
    use std::collections::BTreeMap;

    fn room(room_type: &str) -> RoomDescriptor {
        RoomDescriptor {
            room_type: room_type.to_string(),
            ..RoomDescriptor::default()
        }
    }

    fn counts(entries: &[(&str, i64)]) -> BTreeMap<String, Decimal> {
        entries
            .iter()
            .map(|(label, n)| (label.to_string(), Decimal::from(*n)))
            .collect()
    }

    // ==================== round_half_up tests ====================

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec!(0.5)), dec!(1));
        assert_eq!(round_half_up(dec!(1.5)), dec!(2));
        assert_eq!(round_half_up(dec!(2.5)), dec!(3));
        assert_eq!(round_half_up(dec!(2.4999)), dec!(2));
        assert_eq!(round_half_up(dec!(-0.5)), dec!(0));
        assert_eq!(round_half_up(dec!(-1.6)), dec!(-2));
    }

    // ==================== jitter_factor tests ====================

    #[test]
    fn test_jitter_factor_bounds() {
        assert_eq!(jitter_factor(0.0), dec!(0.8));
        assert_eq!(jitter_factor(0.5), dec!(1.0));
        assert!(jitter_factor(0.999_999) < dec!(1.2));
        assert_eq!(jitter_factor(-4.0), dec!(0.8));
        assert!(jitter_factor(7.0) < dec!(1.2));
    }

    // ==================== price_with_factor tests ====================

    #[test]
    fn test_price_with_neutral_factor_rounds_to_step() {
        assert_eq!(price_with_factor(dec!(734999), Decimal::ONE), 730000);
        assert_eq!(price_with_factor(dec!(735000), Decimal::ONE), 740000);
        assert_eq!(price_with_factor(dec!(1234567.8), Decimal::ONE), 1230000);
    }

    #[test]
    fn test_price_clamped_low() {
        assert_eq!(price_with_factor(dec!(0), dec!(0.8)), 200000);
        assert_eq!(price_with_factor(dec!(-900000), Decimal::ONE), 200000);
    }

    #[test]
    fn test_price_clamped_high() {
        assert_eq!(price_with_factor(dec!(9000000), dec!(0.8)), 5000000);
        assert_eq!(price_with_factor(Decimal::MAX, dec!(1.2)), 5000000);
    }

    // ==================== price_breakdown tests ====================

    #[test]
    fn test_breakdown_all_bonuses() {
        let room = RoomDescriptor {
            room_area: dec!(30),
            max_adults: dec!(2),
            max_children: dec!(1),
            beds_details: counts(&[("Giường đôi lớn vừa", 1), ("Giường đơn", 1)]),
            bathrooms_details: counts(&[("Tiêu chuẩn", 1)]),
            amenities: [("Free WiFi", true), ("Pool Access", false), ("Free Breakfast", true)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            room_type: "Giường đôi".to_string(),
        };

        let b = price_breakdown(&room);

        assert_eq!(b.tier, RoomTypeTier::Double);
        assert_eq!(b.base_price, dec!(400000));
        assert_eq!(b.area_bonus, dec!(450000));
        assert_eq!(b.guest_bonus, dec!(190000));
        assert_eq!(b.bed_count, dec!(2));
        assert_eq!(b.bed_bonus, dec!(240000));
        assert_eq!(b.bathroom_bonus, dec!(100000));
        assert_eq!(b.amenity_count, 2);
        assert_eq!(b.amenity_bonus, dec!(140000));
        assert_eq!(b.subtotal, dec!(1520000));
    }

    #[test]
    fn test_breakdown_counts_unknown_categories() {
        let mut room = room("");
        room.beds_details = counts(&[("Giường tre", 2), ("Võng", 1)]);
        room.bathrooms_details = counts(&[("Ngoài trời", 3)]);

        let b = price_breakdown(&room);
        assert_eq!(b.bed_bonus, dec!(360000));
        assert_eq!(b.bathroom_bonus, dec!(300000));
    }

    #[test]
    fn test_breakdown_survives_overflowing_area() {
        let mut room = room("Phòng cao cấp");
        room.room_area = Decimal::MAX;
        let b = price_breakdown(&room);
        assert_eq!(b.subtotal, Decimal::MAX);
    }

    // ==================== suggest_room_price tests ====================

    #[test]
    fn test_suggest_neutral_factor_matches_subtotal() {
        let mut room = room("Phòng gia đình");
        room.room_area = dec!(25);
        room.max_adults = dec!(3);
        let suggestion = suggest_room_price(&room, &mut FixedRandom::neutral());

        // 650000 + 375000 + 240000
        assert_eq!(suggestion.breakdown.subtotal, dec!(1265000));
        assert_eq!(suggestion.breakdown.factor, dec!(1.0));
        assert_eq!(suggestion.price, 1270000);
    }

    #[test]
    fn test_suggest_family_base_with_zeros() {
        let suggestion = suggest_room_price(&room("Phòng gia đình"), &mut FixedRandom::neutral());
        assert_eq!(suggestion.breakdown.base_price, dec!(650000));
        assert_eq!(suggestion.price, 650000);
    }

    #[test]
    fn test_suggest_all_zero_at_minimum_factor() {
        let suggestion = suggest_room_price(&room(""), &mut FixedRandom(0.0));
        // 300000 * 0.8 = 240000
        assert_eq!(suggestion.price, 240000);

        let single = suggest_room_price(&room("Giường đơn"), &mut FixedRandom(0.0));
        // 250000 * 0.8 = 200000, already at the floor
        assert_eq!(single.price, 200000);
    }

    #[test]
    fn test_suggest_extreme_area_clamped() {
        let mut room = room("Phòng cao cấp");
        room.room_area = dec!(1000000);
        let suggestion = suggest_room_price(&room, &mut FixedRandom(0.0));
        assert_eq!(suggestion.price, 5000000);
    }

    #[test]
    fn test_suggest_price_always_on_step_and_in_range() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.13, 0.37, 0.5, 0.71, 0.99]);
        for area in [0, 7, 18, 33, 61, 140, 900] {
            let mut room = room("Giường đôi");
            room.room_area = Decimal::from(area);
            room.max_children = dec!(1.5);
            let suggestion = suggest_room_price(&room, &mut rng);
            assert_eq!(suggestion.price % 10000, 0);
            assert!((200000..=5000000).contains(&suggestion.price));
        }
    }

    #[test]
    fn test_suggest_is_repeatable_with_fixed_factor() {
        let mut room = room("Phòng đôi cao cấp");
        room.room_area = dec!(42);
        let a = suggest_room_price(&room, &mut FixedRandom(0.3));
        let b = suggest_room_price(&room, &mut FixedRandom(0.3));
        assert_eq!(a, b);
        assert_eq!(a.breakdown.tier, RoomTypeTier::Premium);
    }

    #[test]
    fn test_reason_echoes_inputs() {
        let mut room = room("Giường đôi");
        room.room_area = dec!(25.0);
        room.max_adults = dec!(2);
        room.max_children = dec!(1);
        room.beds_details = counts(&[("Giường đôi nhỏ", 1)]);
        room.bathrooms_details = counts(&[("Tiêu chuẩn", 2)]);

        let suggestion = suggest_room_price(&room, &mut FixedRandom::neutral());
        let reason = suggestion.reason;

        assert!(reason.starts_with("Giá được tính dựa trên:"));
        assert!(reason.contains("• Loại phòng: Giường đôi"));
        assert!(reason.contains("• Diện tích: 25 m²"));
        assert!(reason.contains("• Sức chứa: 2 NL – 1 TE"));
        assert!(reason.contains("• Giường: 1"));
        assert!(reason.contains("• Phòng tắm: 2"));
        assert!(reason.contains("• Tiện nghi: 0"));
    }
}
