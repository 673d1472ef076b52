use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::interest;
use crate::ledger::Ledger;
use crate::types::Month;

/// fixed-term deposit (CDT): principal invested at a fixed monthly rate
/// from an opening month
///
/// The balance is never materialized; present value is derived on demand
/// from the three parameters. All three are zero when no deposit is open,
/// which makes the present value of a closed deposit zero as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDeposit {
    invested: Money,
    monthly_rate: Rate,
    opened_month: Month,
    history: Vec<Money>,
    ledger: Ledger,
}

impl Default for TermDeposit {
    fn default() -> Self {
        Self::new()
    }
}

impl TermDeposit {
    /// create with no open deposit
    pub fn new() -> Self {
        Self {
            invested: Money::ZERO,
            monthly_rate: Rate::ZERO,
            opened_month: 0,
            history: vec![Money::ZERO],
            ledger: Ledger::new(),
        }
    }

    pub fn invested(&self) -> Money {
        self.invested
    }

    pub fn monthly_rate(&self) -> Rate {
        self.monthly_rate
    }

    pub fn opened_month(&self) -> Month {
        self.opened_month
    }

    pub fn is_open(&self) -> bool {
        !self.invested.is_zero()
    }

    pub fn history(&self) -> &[Money] {
        &self.history
    }

    /// recorded derived value for a month, if one has been recorded
    pub fn value_for_month(&self, month: Month) -> Option<Money> {
        if month == 0 {
            return None;
        }
        self.history.get(month as usize - 1).copied()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn month_summary(&self, month: Month) -> String {
        self.ledger.month_summary(month)
    }

    /// open a deposit; amount and rate positivity are the engine's contract
    ///
    /// Opening over an already-open deposit replaces it.
    pub fn open(&mut self, amount: Money, monthly_rate: Rate, month: Month) {
        self.invested = amount;
        self.monthly_rate = monthly_rate;
        self.opened_month = month;
        self.ledger.record(
            format!("Term deposit opened: ${} at {} monthly", amount, monthly_rate),
            month,
        );
        self.record_monthly_value(month);
    }

    /// value of the investment as of `query_month`, under simple interest
    ///
    /// Pure function of the deposit parameters; months before the opening
    /// month discount below the principal rather than failing.
    pub fn present_value(&self, query_month: Month) -> Money {
        let elapsed = query_month as i64 - self.opened_month as i64;
        interest::simple_value(self.invested, self.monthly_rate, elapsed)
    }

    /// close the deposit and return its value as of `query_month`
    ///
    /// Records the closing transaction, then resets the deposit to the
    /// neutral all-zero state. Crediting the returned value elsewhere is
    /// the caller's responsibility.
    pub fn close(&mut self, query_month: Month) -> Money {
        let value = self.present_value(query_month);
        self.ledger
            .record(format!("Term deposit closed: ${}", value), query_month);
        self.record_monthly_value(query_month);

        self.invested = Money::ZERO;
        self.monthly_rate = Rate::ZERO;
        self.opened_month = 0;

        value
    }

    /// store the derived value for a month, backfilling any months the
    /// history has not reached yet
    fn record_monthly_value(&mut self, month: Month) {
        let value = self.present_value(month);
        while self.history.len() < month as usize {
            self.history.push(value);
        }
        self.history[month as usize - 1] = value;
    }

    /// arithmetic mean of the present value over `[start_month, end_month]`
    ///
    /// Uses the historical deposit parameters for every month in the range
    /// (contrast with the savings account, which projects forward from its
    /// live balance). Returns -1 for an invalid range (`start_month < 1` or
    /// `end_month < start_month`).
    pub fn average_value(&self, start_month: Month, end_month: Month) -> Money {
        if start_month < 1 || end_month < start_month {
            return Money::from_major(-1);
        }

        let months = end_month - start_month + 1;
        let mut sum = Money::ZERO;
        for month in start_month..=end_month {
            sum += self.present_value(month);
        }

        sum / Decimal::from(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_deposit() -> TermDeposit {
        let mut deposit = TermDeposit::new();
        deposit.open(Money::from_major(5_000), Rate::from_percentage(1), 1);
        deposit
    }

    #[test]
    fn test_starts_closed() {
        let deposit = TermDeposit::new();
        assert!(!deposit.is_open());
        assert_eq!(deposit.invested(), Money::ZERO);
        assert_eq!(deposit.present_value(1), Money::ZERO);
    }

    #[test]
    fn test_present_value_linear_in_elapsed_months() {
        let deposit = open_deposit();

        // invested * (1 + rate * k)
        assert_eq!(deposit.present_value(1), Money::from_major(5_000));
        assert_eq!(deposit.present_value(2), Money::from_major(5_050));
        assert_eq!(deposit.present_value(4), Money::from_major(5_150));
        assert_eq!(deposit.present_value(13), Money::from_major(5_600));
    }

    #[test]
    fn test_open_records_transaction_and_history() {
        let deposit = open_deposit();

        assert!(deposit.is_open());
        assert_eq!(deposit.opened_month(), 1);
        assert_eq!(deposit.value_for_month(1), Some(Money::from_major(5_000)));
        let summary = deposit.month_summary(1);
        assert!(summary.starts_with("- Term deposit opened: $5000"));
    }

    #[test]
    fn test_close_returns_value_and_resets() {
        let mut deposit = open_deposit();

        let value = deposit.close(4);
        assert_eq!(value, Money::from_major(5_150));

        // fully reset to the neutral state
        assert!(!deposit.is_open());
        assert_eq!(deposit.invested(), Money::ZERO);
        assert_eq!(deposit.monthly_rate(), Rate::ZERO);
        assert_eq!(deposit.opened_month(), 0);
        assert_eq!(deposit.present_value(4), Money::ZERO);
    }

    #[test]
    fn test_close_when_nothing_open_yields_zero() {
        let mut deposit = TermDeposit::new();
        assert_eq!(deposit.close(3), Money::ZERO);
    }

    #[test]
    fn test_reopening_replaces_previous_deposit() {
        let mut deposit = open_deposit();
        deposit.open(Money::from_major(2_000), Rate::from_percentage(2), 3);

        assert_eq!(deposit.invested(), Money::from_major(2_000));
        assert_eq!(deposit.opened_month(), 3);
        assert_eq!(deposit.present_value(4), Money::from_major(2_040));
    }

    #[test]
    fn test_average_value_uses_historical_parameters() {
        let deposit = open_deposit();

        // mean of 5000, 5050, 5100
        let average = deposit.average_value(1, 3);
        assert_eq!(average, Money::from_major(5_050));
    }

    #[test]
    fn test_average_value_invalid_range_sentinel() {
        let deposit = open_deposit();
        let sentinel = Money::from_major(-1);

        assert_eq!(deposit.average_value(0, 4), sentinel);
        assert_eq!(deposit.average_value(5, 4), sentinel);
    }

    #[test]
    fn test_value_before_opening_month_is_defined() {
        let mut deposit = TermDeposit::new();
        deposit.open(Money::from_major(5_000), Rate::from_percentage(1), 3);

        // one month before opening: discounted, not an error
        assert_eq!(deposit.present_value(2), Money::from_major(4_950));
    }
}
