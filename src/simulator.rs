use uuid::Uuid;

use crate::accounts::{CheckingAccount, SavingsAccount, TermDeposit};
use crate::config::SimulatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulatorError};
use crate::state::BalanceSnapshot;
use crate::types::{AccountKind, Customer, Month, SimulationId};

/// month-stepped simulator for one customer's three accounts
///
/// Owns the month counter and the accounts exclusively; all commands and
/// queries go through it. The counter starts at 1 and only moves forward.
pub struct BankSimulator {
    id: SimulationId,
    customer: Customer,
    config: SimulatorConfig,
    current_month: Month,
    checking: CheckingAccount,
    savings: SavingsAccount,
    deposit: TermDeposit,
    snapshots: Vec<BalanceSnapshot>,
}

impl BankSimulator {
    /// create a simulator with the default configuration
    pub fn new(customer: Customer) -> Self {
        Self::build(customer, SimulatorConfig::default())
    }

    /// create a simulator with an explicit configuration
    pub fn with_config(customer: Customer, config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(customer, config))
    }

    fn build(customer: Customer, config: SimulatorConfig) -> Self {
        let mut simulator = Self {
            id: Uuid::new_v4(),
            customer,
            config,
            current_month: 1,
            checking: CheckingAccount::new(),
            savings: SavingsAccount::new(config.savings_monthly_rate),
            deposit: TermDeposit::new(),
            snapshots: Vec::new(),
        };

        tracing::info!(
            id = %simulator.id,
            customer = simulator.customer.name(),
            "simulation created"
        );
        simulator.capture_snapshot("created");
        simulator
    }

    pub fn id(&self) -> SimulationId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    pub fn checking(&self) -> &CheckingAccount {
        &self.checking
    }

    pub fn savings(&self) -> &SavingsAccount {
        &self.savings
    }

    pub fn term_deposit(&self) -> &TermDeposit {
        &self.deposit
    }

    pub fn snapshots(&self) -> &[BalanceSnapshot] {
        &self.snapshots
    }

    /// deposit into the checking account at the current month
    pub fn deposit_checking(&mut self, amount: Money) -> Result<()> {
        self.validate_amount(amount)?;
        tracing::debug!(month = self.current_month, %amount, "checking deposit");
        self.checking.deposit(amount, self.current_month);
        Ok(())
    }

    /// withdraw from the checking account at the current month
    pub fn withdraw_checking(&mut self, amount: Money) -> Result<()> {
        self.validate_amount(amount)?;
        tracing::debug!(month = self.current_month, %amount, "checking withdrawal");
        self.checking.withdraw(amount, self.current_month);
        Ok(())
    }

    /// deposit into the savings account at the current month
    pub fn deposit_savings(&mut self, amount: Money) -> Result<()> {
        self.validate_amount(amount)?;
        tracing::debug!(month = self.current_month, %amount, "savings deposit");
        self.savings.deposit(amount, self.current_month);
        Ok(())
    }

    /// withdraw from the savings account at the current month
    pub fn withdraw_savings(&mut self, amount: Money) -> Result<()> {
        self.validate_amount(amount)?;
        tracing::debug!(month = self.current_month, %amount, "savings withdrawal");
        self.savings.withdraw(amount, self.current_month);
        Ok(())
    }

    /// open a term deposit at the current month
    pub fn open_term_deposit(&mut self, amount: Money, monthly_rate: Rate) -> Result<()> {
        self.validate_amount(amount)?;
        if monthly_rate <= Rate::ZERO {
            return Err(SimulatorError::InvalidRate { rate: monthly_rate });
        }

        tracing::info!(
            month = self.current_month,
            %amount,
            rate = %monthly_rate,
            "term deposit opened"
        );
        self.deposit.open(amount, monthly_rate, self.current_month);
        Ok(())
    }

    /// close the term deposit and credit its value to checking
    ///
    /// One logical operation: the close value is computed at the current
    /// month and deposited into the checking account in the same step.
    /// There is no failure path; closing with nothing open credits zero.
    pub fn close_term_deposit(&mut self) -> Money {
        let value = self.deposit.close(self.current_month);
        self.checking.deposit(value, self.current_month);

        tracing::info!(month = self.current_month, %value, "term deposit closed");
        self.capture_snapshot("term deposit closed");
        value
    }

    /// advance the simulation by one month
    ///
    /// Only the savings account accrues on the month boundary; checking and
    /// the term deposit are untouched.
    pub fn advance_month(&mut self) {
        self.current_month += 1;
        self.savings.advance_month(self.current_month);

        tracing::debug!(month = self.current_month, "month advanced");
        self.capture_snapshot("month advanced");
    }

    /// combined balance of the three accounts as of the current month
    pub fn total_balance(&self) -> Money {
        self.checking.balance()
            + self.savings.balance()
            + self.deposit.present_value(self.current_month)
    }

    /// transaction summary of the current month across the three accounts
    pub fn month_summary(&self) -> String {
        let mut summary = format!(
            "--- Transaction summary for month {} ---\n\n",
            self.current_month
        );
        summary.push_str(&format!(
            "{}:\n{}\n",
            AccountKind::Savings,
            self.savings.month_summary(self.current_month)
        ));
        summary.push_str(&format!(
            "{}:\n{}\n",
            AccountKind::Checking,
            self.checking.month_summary(self.current_month)
        ));
        summary.push_str(&format!(
            "{}:\n{}",
            AccountKind::TermDeposit,
            self.deposit.month_summary(self.current_month)
        ));
        summary
    }

    /// average projected savings balance from the current month to `end_month`
    pub fn average_savings_balance(&self, end_month: Month) -> Result<Money> {
        self.validate_range(end_month)?;
        Ok(self.savings.average_balance(self.current_month, end_month))
    }

    /// average term-deposit value from the current month to `end_month`
    pub fn average_term_deposit_value(&self, end_month: Month) -> Result<Money> {
        self.validate_range(end_month)?;
        Ok(self.deposit.average_value(self.current_month, end_month))
    }

    fn validate_amount(&self, amount: Money) -> Result<()> {
        if amount <= Money::ZERO {
            return Err(SimulatorError::InvalidAmount { amount });
        }
        Ok(())
    }

    fn validate_range(&self, end_month: Month) -> Result<()> {
        if end_month < self.current_month {
            return Err(SimulatorError::InvalidMonthRange {
                start: self.current_month,
                end: end_month,
            });
        }
        Ok(())
    }

    fn capture_snapshot(&mut self, trigger: &str) {
        let snapshot = BalanceSnapshot::capture(self, trigger);
        self.snapshots.push(snapshot);
    }
}
