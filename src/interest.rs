use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// interest earned by a balance over one month
pub fn monthly_interest(balance: Money, rate: Rate) -> Money {
    Money::from_decimal(balance.as_decimal() * rate.as_decimal())
}

/// balance after one month of interest
pub fn accrue_monthly(balance: Money, rate: Rate) -> Money {
    balance + monthly_interest(balance, rate)
}

/// value of a principal under simple interest after the given number of
/// elapsed months
///
/// Linear in `elapsed_months`; stays defined for negative elapsed months,
/// where it discounts below the principal.
pub fn simple_value(principal: Money, rate: Rate, elapsed_months: i64) -> Money {
    let factor = Decimal::ONE + rate.as_decimal() * Decimal::from(elapsed_months);
    Money::from_decimal(principal.as_decimal() * factor)
}
