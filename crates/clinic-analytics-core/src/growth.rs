use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Rate;

/// Percentage change from `previous` to `current`.
///
/// A zero baseline has no defined ratio: growth from nothing to anything
/// reports as 100%, and nothing to nothing as 0%. A change too large for
/// `Decimal` saturates to `Decimal::MAX` or `Decimal::MIN` by its sign.
pub fn calculate_growth(current: Decimal, previous: Decimal) -> Rate {
    if previous.is_zero() {
        return if current.is_zero() {
            Decimal::ZERO
        } else {
            dec!(100)
        };
    }

    let ratio = match current.checked_sub(previous) {
        Some(diff) => diff.checked_div(previous),
        // current / previous - 1 stays in range when the difference does not
        None => current
            .checked_div(previous)
            .and_then(|r| r.checked_sub(Decimal::ONE)),
    };

    ratio
        .and_then(|r| r.checked_mul(dec!(100)))
        .unwrap_or_else(|| {
            if (current > previous) == previous.is_sign_positive() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}
