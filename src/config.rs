use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{Result, SimulatorError};

/// simulator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// fixed monthly rate paid on the savings account
    pub savings_monthly_rate: Rate,
}

impl SimulatorConfig {
    pub fn new(savings_monthly_rate: Rate) -> Self {
        Self {
            savings_monthly_rate,
        }
    }

    /// validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.savings_monthly_rate <= Rate::ZERO {
            return Err(SimulatorError::InvalidConfiguration {
                message: format!(
                    "savings monthly rate must be positive, got {}",
                    self.savings_monthly_rate
                ),
            });
        }

        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        // 0.6% per month, the bank's standard savings rate
        Self::new(Rate::from_decimal(dec!(0.006)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_savings_rate() {
        let config = SimulatorConfig::default();
        assert_eq!(config.savings_monthly_rate.as_decimal(), dec!(0.006));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let config = SimulatorConfig::new(Rate::ZERO);
        assert!(matches!(
            config.validate(),
            Err(SimulatorError::InvalidConfiguration { .. })
        ));

        let config = SimulatorConfig::new(Rate::from_decimal(dec!(-0.01)));
        assert!(config.validate().is_err());
    }
}
