pub mod checking;
pub mod savings;
pub mod term_deposit;

pub use checking::CheckingAccount;
pub use savings::SavingsAccount;
pub use term_deposit::TermDeposit;
