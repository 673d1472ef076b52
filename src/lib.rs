pub mod accounts;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod ledger;
pub mod simulator;
pub mod state;
pub mod types;

// re-export key types
pub use accounts::{CheckingAccount, SavingsAccount, TermDeposit};
pub use config::SimulatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{Result, SimulatorError};
pub use ledger::{Ledger, LedgerEntry, NO_TRANSACTIONS_MESSAGE};
pub use simulator::BankSimulator;
pub use state::{BalanceSnapshot, SimulatorView};
pub use types::{AccountKind, Customer, Month, SimulationId};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
