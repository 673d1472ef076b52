use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::interest;
use crate::ledger::Ledger;
use crate::types::Month;

/// savings account: balance, fixed monthly rate, per-month balance history
///
/// `history[m - 1]` holds the balance as of month `m`'s close. The history
/// never shrinks below the highest month recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsAccount {
    balance: Money,
    monthly_rate: Rate,
    history: Vec<Money>,
    ledger: Ledger,
}

impl SavingsAccount {
    /// create an empty account paying the given monthly rate
    pub fn new(monthly_rate: Rate) -> Self {
        Self {
            balance: Money::ZERO,
            monthly_rate,
            // month 1 opens with a zero balance on record
            history: vec![Money::ZERO],
            ledger: Ledger::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn monthly_rate(&self) -> Rate {
        self.monthly_rate
    }

    pub fn history(&self) -> &[Money] {
        &self.history
    }

    /// recorded close-of-month balance, if that month has been reached
    pub fn balance_for_month(&self, month: Month) -> Option<Money> {
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

    /// add an amount to the balance, log it, and refresh the month's snapshot
    pub fn deposit(&mut self, amount: Money, month: Month) {
        self.balance += amount;
        self.ledger.record(format!("Deposit: ${}", amount), month);
        self.record_monthly_balance(month);
    }

    /// subtract an amount from the balance, log it, and refresh the month's snapshot
    pub fn withdraw(&mut self, amount: Money, month: Month) {
        self.balance -= amount;
        self.ledger.record(format!("Withdrawal: ${}", amount), month);
        self.record_monthly_balance(month);
    }

    /// accrue one month of interest; called by the engine once per month,
    /// after the month counter has moved to `month`
    pub fn advance_month(&mut self, month: Month) {
        let earned = interest::monthly_interest(self.balance, self.monthly_rate);
        self.balance += earned;
        self.ledger
            .record(format!("Monthly interest: ${}", earned), month);
        self.record_monthly_balance(month);
    }

    /// store the current balance as the close-of-month value, backfilling
    /// any months the history has not reached yet
    fn record_monthly_balance(&mut self, month: Month) {
        while self.history.len() < month as usize {
            self.history.push(self.balance);
        }
        self.history[month as usize - 1] = self.balance;
    }

    /// arithmetic mean of the projected balance over `[start_month, end_month]`
    ///
    /// A forward projection: the live balance is taken as the value at
    /// `start_month` and compounds monthly from there, regardless of what
    /// the recorded history says. Returns -1 for an invalid range
    /// (`start_month < 1` or `end_month < start_month`); callers check the
    /// sentinel rather than an error.
    pub fn average_balance(&self, start_month: Month, end_month: Month) -> Money {
        if start_month < 1 || end_month < start_month {
            return Money::from_major(-1);
        }

        let months = end_month - start_month + 1;
        let mut sum = Money::ZERO;
        let mut projected = self.balance;
        for _ in 0..months {
            sum += projected;
            projected = interest::accrue_monthly(projected, self.monthly_rate);
        }

        sum / Decimal::from(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn savings() -> SavingsAccount {
        SavingsAccount::new(Rate::from_decimal(dec!(0.006)))
    }

    #[test]
    fn test_starts_with_month_one_on_record() {
        let account = savings();
        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(account.history(), &[Money::ZERO]);
        assert_eq!(account.balance_for_month(1), Some(Money::ZERO));
        assert_eq!(account.balance_for_month(2), None);
    }

    #[test]
    fn test_deposit_updates_history_snapshot() {
        let mut account = savings();
        account.deposit(Money::from_major(1_000), 1);

        assert_eq!(account.balance(), Money::from_major(1_000));
        assert_eq!(account.balance_for_month(1), Some(Money::from_major(1_000)));
    }

    #[test]
    fn test_advance_month_accrues_interest() {
        let mut account = savings();
        account.deposit(Money::from_major(1_000), 1);
        account.advance_month(2);

        assert_eq!(account.balance(), Money::from_major(1_006));
        assert_eq!(account.balance_for_month(2), Some(Money::from_major(1_006)));

        let summary = account.month_summary(2);
        assert!(summary.contains("Monthly interest"));
    }

    #[test]
    fn test_deposit_then_withdraw_is_balance_neutral() {
        let mut account = savings();
        account.deposit(Money::from_major(1_000), 1);

        let before = account.balance();
        account.deposit(Money::from_major(250), 1);
        account.withdraw(Money::from_major(250), 1);

        assert_eq!(account.balance(), before);
        assert_eq!(account.ledger().len(), 3);
    }

    #[test]
    fn test_history_backfills_skipped_months() {
        let mut account = savings();
        // first activity lands in month 3
        account.deposit(Money::from_major(500), 3);

        assert_eq!(account.history().len(), 3);
        assert_eq!(account.balance_for_month(2), Some(Money::from_major(500)));
        assert_eq!(account.balance_for_month(3), Some(Money::from_major(500)));
    }

    #[test]
    fn test_average_balance_projects_forward() {
        let mut account = savings();
        account.deposit(Money::from_major(1_000), 1);

        // mean of 1000, 1006, 1012.036
        let average = account.average_balance(1, 3);
        assert_eq!(average, Money::from_str_exact("1006.012").unwrap());
    }

    #[test]
    fn test_average_balance_single_month_is_live_balance() {
        let mut account = savings();
        account.deposit(Money::from_major(1_000), 1);

        assert_eq!(account.average_balance(4, 4), Money::from_major(1_000));
    }

    #[test]
    fn test_average_balance_invalid_range_sentinel() {
        let account = savings();
        let sentinel = Money::from_major(-1);

        assert_eq!(account.average_balance(0, 5), sentinel);
        assert_eq!(account.average_balance(3, 2), sentinel);
    }
}
