use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::Month;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid month range: start {start}, end {end}")]
    InvalidMonthRange {
        start: Month,
        end: Month,
    },

    #[error("invalid customer: {message}")]
    InvalidCustomer {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
