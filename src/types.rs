use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{Result, SimulatorError};

/// simulation month, 1-based
pub type Month = u32;

/// unique identifier for a simulation instance
pub type SimulationId = Uuid;

/// the three account kinds a customer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Checking,
    Savings,
    TermDeposit,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Checking => "Checking account",
            AccountKind::Savings => "Savings account",
            AccountKind::TermDeposit => "Term deposit",
        };
        write!(f, "{}", label)
    }
}

/// customer identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    document: String,
    name: String,
}

impl Customer {
    /// create a customer; both identity fields must be non-empty
    pub fn new(document: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let document = document.into();
        let name = name.into();

        if document.is_empty() {
            return Err(SimulatorError::InvalidCustomer {
                message: "document must not be empty".to_string(),
            });
        }
        if name.is_empty() {
            return Err(SimulatorError::InvalidCustomer {
                message: "name must not be empty".to_string(),
            });
        }

        Ok(Self { document, name })
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_requires_identity() {
        assert!(Customer::new("", "Ana Gómez").is_err());
        assert!(Customer::new("1020304050", "").is_err());

        let customer = Customer::new("1020304050", "Ana Gómez").unwrap();
        assert_eq!(customer.document(), "1020304050");
        assert_eq!(customer.name(), "Ana Gómez");
    }

    #[test]
    fn test_account_kind_labels() {
        assert_eq!(AccountKind::Checking.to_string(), "Checking account");
        assert_eq!(AccountKind::Savings.to_string(), "Savings account");
        assert_eq!(AccountKind::TermDeposit.to_string(), "Term deposit");
    }
}
