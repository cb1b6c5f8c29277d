//! Booking price quote: room discount, nights and promo codes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::pricing::round_half_up;

use super::error::BookingError;
use super::selection::SelectionState;

/// Nightly price used when a room carries none
pub const DEFAULT_NIGHTLY_PRICE: Decimal = dec!(200000);

/// What a promo code takes off the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PromoKind {
    /// Percentage of the total
    Percent(#[serde(with = "rust_decimal::serde::str")] Decimal),
    /// Flat VND amount
    Amount(#[serde(with = "rust_decimal::serde::str")] Decimal),
}

const PROMO_CATALOG: [(&str, PromoKind); 3] = [
    ("HOME10", PromoKind::Percent(dec!(10))),
    ("VIP20", PromoKind::Percent(dec!(20))),
    ("SAVE50", PromoKind::Amount(dec!(50000))),
];

/// A promo code that was found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedPromo {
    pub code: String,
    #[serde(flatten)]
    pub kind: PromoKind,
}

/// Look up a promo code, ignoring case and surrounding whitespace.
pub fn lookup_promo(code: &str) -> Result<AppliedPromo, BookingError> {
    let key = code.trim().to_uppercase();
    PROMO_CATALOG
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, kind)| AppliedPromo {
            code: key.clone(),
            kind: *kind,
        })
        .ok_or(BookingError::UnknownPromo(key))
}

/// Nightly price after the room's own percentage discount.
pub fn final_nightly_price(price: Decimal, discount_percent: Decimal) -> Decimal {
    let multiplier = Decimal::ONE - discount_percent / dec!(100);
    round_half_up(price.saturating_mul(multiplier))
}

/// Apply a promo to a total; never goes below zero.
pub fn apply_promo(total: Decimal, promo: PromoKind) -> Decimal {
    let discounted = match promo {
        PromoKind::Percent(value) => {
            round_half_up(total.saturating_mul(Decimal::ONE - value / dec!(100)))
        }
        PromoKind::Amount(value) => total.saturating_sub(value),
    };
    discounted.max(Decimal::ZERO)
}

/// Full price breakdown for a selected stay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price_per_night: Decimal,
    /// Nights at the undiscounted price
    #[serde(with = "rust_decimal::serde::str")]
    pub original_total: Decimal,
    /// Nights at the discounted price
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub promo: Option<AppliedPromo>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_after_promo: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub savings: Decimal,
}

/// Quote a stay.
///
/// A zero nightly price falls back to [`DEFAULT_NIGHTLY_PRICE`]. An
/// incomplete selection quotes zero nights. A blank promo code is the same
/// as none; an unknown one is an error.
pub fn quote(
    price_per_night: Decimal,
    discount_percent: Decimal,
    selection: &SelectionState,
    promo_code: Option<&str>,
) -> Result<BookingQuote, BookingError> {
    let price_per_night = if price_per_night.is_zero() {
        DEFAULT_NIGHTLY_PRICE
    } else {
        price_per_night
    };

    let promo = match promo_code.map(str::trim).filter(|code| !code.is_empty()) {
        Some(code) => Some(lookup_promo(code)?),
        None => None,
    };

    let final_price_per_night = final_nightly_price(price_per_night, discount_percent);
    let nights = selection.nights();
    let original_total = selection.total_for(price_per_night);
    let total = selection.total_for(final_price_per_night);
    let total_after_promo = match &promo {
        Some(applied) => apply_promo(total, applied.kind),
        None => total,
    };

    Ok(BookingQuote {
        nights,
        price_per_night,
        discount_percent,
        final_price_per_night,
        original_total,
        total,
        promo,
        total_after_promo,
        savings: original_total.saturating_sub(total_after_promo),
    })
}
