use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// A store item the employee is saving coins for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub product_name: String,
    pub target_price: u32,
    pub current_balance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub percent: u32,     // rounded, may exceed 100
    pub bar_percent: f64, // 0.0 - 100.0
    pub remaining: u32,
    pub reached: bool,
}

impl SavingsGoal {
    pub fn new(product_name: impl Into<String>, target_price: u32, current_balance: u32) -> Self {
        Self {
            product_name: product_name.into(),
            target_price,
            current_balance,
        }
    }

    pub fn progress(&self) -> Result<GoalProgress, DomainError> {
        if self.target_price == 0 {
            return Err(DomainError::Validation(format!(
                "goal '{}' has a zero target price",
                self.product_name
            )));
        }

        let ratio = f64::from(self.current_balance) / f64::from(self.target_price) * 100.0;

        Ok(GoalProgress {
            percent: ratio.round() as u32,
            bar_percent: ratio.min(100.0),
            remaining: self.target_price.saturating_sub(self.current_balance),
            reached: self.current_balance >= self.target_price,
        })
    }
}
