use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::simulator::BankSimulator;
use crate::types::{Customer, Month, SimulationId};

/// point-in-time balance record for the audit trail
///
/// Captured by the engine on month advances and term-deposit closures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub snapshot_id: Uuid,
    pub simulation_id: SimulationId,
    pub month: Month,
    pub checking_balance: Money,
    pub savings_balance: Money,
    pub deposit_value: Money,
    pub total_balance: Money,
    pub trigger: String,
}

impl BalanceSnapshot {
    pub fn capture(simulator: &BankSimulator, trigger: impl Into<String>) -> Self {
        let month = simulator.current_month();
        Self {
            snapshot_id: Uuid::new_v4(),
            simulation_id: simulator.id(),
            month,
            checking_balance: simulator.checking().balance(),
            savings_balance: simulator.savings().balance(),
            deposit_value: simulator.term_deposit().present_value(month),
            total_balance: simulator.total_balance(),
            trigger: trigger.into(),
        }
    }
}

/// serializable view of a simulator's state
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatorView {
    pub id: SimulationId,
    pub customer: Customer,
    pub current_month: Month,
    pub checking: CheckingView,
    pub savings: SavingsView,
    pub term_deposit: TermDepositView,
    pub total_balance: Money,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckingView {
    pub balance: Money,
    pub transaction_count: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsView {
    pub balance: Money,
    pub monthly_rate: Rate,
    pub recorded_months: usize,
    pub transaction_count: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TermDepositView {
    pub invested: Money,
    pub monthly_rate: Rate,
    pub opened_month: Month,
    pub present_value: Money,
    pub is_open: bool,
    pub transaction_count: usize,
}

impl SimulatorView {
    pub fn from_simulator(simulator: &BankSimulator) -> Self {
        let month = simulator.current_month();
        SimulatorView {
            id: simulator.id(),
            customer: simulator.customer().clone(),
            current_month: month,
            checking: CheckingView {
                balance: simulator.checking().balance(),
                transaction_count: simulator.checking().ledger().len(),
            },
            savings: SavingsView {
                balance: simulator.savings().balance(),
                monthly_rate: simulator.savings().monthly_rate(),
                recorded_months: simulator.savings().history().len(),
                transaction_count: simulator.savings().ledger().len(),
            },
            term_deposit: TermDepositView {
                invested: simulator.term_deposit().invested(),
                monthly_rate: simulator.term_deposit().monthly_rate(),
                opened_month: simulator.term_deposit().opened_month(),
                present_value: simulator.term_deposit().present_value(month),
                is_open: simulator.term_deposit().is_open(),
                transaction_count: simulator.term_deposit().ledger().len(),
            },
            total_balance: simulator.total_balance(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> BankSimulator {
        BankSimulator::new(Customer::new("1020304050", "Ana Gómez").unwrap())
    }

    #[test]
    fn test_snapshot_captures_current_balances() {
        let mut sim = simulator();
        sim.deposit_checking(Money::from_major(200)).unwrap();
        sim.open_term_deposit(Money::from_major(5_000), Rate::from_percentage(1))
            .unwrap();

        let snapshot = BalanceSnapshot::capture(&sim, "manual");
        assert_eq!(snapshot.simulation_id, sim.id());
        assert_eq!(snapshot.month, 1);
        assert_eq!(snapshot.checking_balance, Money::from_major(200));
        assert_eq!(snapshot.deposit_value, Money::from_major(5_000));
        assert_eq!(snapshot.total_balance, Money::from_major(5_200));
        assert_eq!(snapshot.trigger, "manual");
    }

    #[test]
    fn test_view_reflects_simulator_state() {
        let mut sim = simulator();
        sim.deposit_savings(Money::from_major(1_000)).unwrap();
        sim.advance_month();

        let view = SimulatorView::from_simulator(&sim);
        assert_eq!(view.current_month, 2);
        assert_eq!(view.customer.name(), "Ana Gómez");
        assert_eq!(view.savings.balance, Money::from_major(1_006));
        assert_eq!(view.savings.recorded_months, 2);
        // deposit + interest accrual
        assert_eq!(view.savings.transaction_count, 2);
        assert!(!view.term_deposit.is_open);
    }

    #[test]
    fn test_view_json_round_trip() {
        let mut sim = simulator();
        sim.deposit_checking(Money::from_major(300)).unwrap();

        let view = SimulatorView::from_simulator(&sim);
        let json = view.to_json_pretty().unwrap();
        assert!(json.contains("\"current_month\": 1"));

        let parsed: SimulatorView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, view);
    }
}
