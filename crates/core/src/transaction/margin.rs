//! Margin calculations.
//!
//! Every divisor is checked before dividing. A zero or negative base yields
//! exactly zero, never an error. Results that would leave the `Decimal` range
//! saturate at `Decimal::MIN` or `Decimal::MAX` instead of panicking.

use rust_decimal::Decimal;

/// Margin of a sale: net value minus cost.
#[must_use]
pub fn margin(net_value: Decimal, cost: Decimal) -> Decimal {
    net_value.saturating_sub(cost)
}

/// Margin as a percentage of cost, or zero when cost is not positive.
#[must_use]
pub fn margin_percentage(net_value: Decimal, cost: Decimal) -> Decimal {
    if cost > Decimal::ZERO {
        percent_of(margin(net_value, cost), cost)
    } else {
        Decimal::ZERO
    }
}

/// Relative change from `previous` to `current` in percent, or zero when
/// `previous` is not positive.
#[must_use]
pub fn percentage_change(previous: Decimal, current: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        percent_of(current.saturating_sub(previous), previous)
    } else {
        Decimal::ZERO
    }
}

/// Arithmetic mean of `count` values summing to `sum`; zero for no values.
#[must_use]
pub fn mean(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}

/// `part / base * 100` for a positive `base`, saturating on overflow.
fn percent_of(part: Decimal, base: Decimal) -> Decimal {
    let ratio = part.checked_div(base).unwrap_or(if part.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    });
    ratio.saturating_mul(Decimal::ONE_HUNDRED)
}
