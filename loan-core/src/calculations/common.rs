//! Shared rounding helpers for money math.

use rust_decimal::Decimal;

/// Rounds to two decimal places, midpoint away from zero
/// (standard financial half-up rounding).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to a whole rupee, midpoint away from zero. Installments are
/// always quoted as whole-rupee amounts.
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
