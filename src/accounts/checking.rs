use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::ledger::Ledger;
use crate::types::Month;

/// checking account: a plain balance with a transaction log, no interest
///
/// Amount positivity is the engine's contract; this layer moves the balance
/// unconditionally, and the balance may go negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckingAccount {
    balance: Money,
    ledger: Ledger,
}

impl CheckingAccount {
    /// create an empty account with balance 0
    pub fn new() -> Self {
        Self {
            balance: Money::ZERO,
            ledger: Ledger::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn month_summary(&self, month: Month) -> String {
        self.ledger.month_summary(month)
    }

    /// add an amount to the balance and log it
    pub fn deposit(&mut self, amount: Money, month: Month) {
        self.balance += amount;
        self.ledger.record(format!("Deposit: ${}", amount), month);
    }

    /// subtract an amount from the balance and log it
    pub fn withdraw(&mut self, amount: Money, month: Month) {
        self.balance -= amount;
        self.ledger.record(format!("Withdrawal: ${}", amount), month);
    }
}
