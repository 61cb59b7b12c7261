//! Savings goal model
//!
//! Unlike balances, a goal's current amount is stored state: fund actions
//! mutate it directly (clamped at zero) and emit a paired transaction as the
//! cash-side record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::transaction::AccountContext;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name (e.g. "Emergency fund")
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far; never negative
    pub current_amount: Money,

    /// Optional target date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// PF or PJ context
    pub context: AccountContext,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, context: AccountContext) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
            context,
        }
    }

    /// Apply a signed funding delta, clamping the result at a floor of zero.
    /// Returns the amount actually applied (may be smaller in magnitude than
    /// the requested delta when a withdrawal would overdraw the goal).
    pub fn apply_delta(&mut self, delta: Money) -> Money {
        let before = self.current_amount;
        let after = before + delta;
        self.current_amount = if after.is_negative() {
            Money::zero()
        } else {
            after
        };
        self.current_amount - before
    }

    /// Progress toward the target as a fraction in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.target_amount.cents() <= 0 {
            return 0.0;
        }
        (self.current_amount.cents() as f64 / self.target_amount.cents() as f64).min(1.0)
    }

    /// Check whether the target has been reached
    pub fn is_complete(&self) -> bool {
        !self.target_amount.is_zero() && self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(m) => {
                write!(f, "Goal target must be positive, got {}", m)
            }
            Self::NegativeCurrent(m) => {
                write!(f, "Goal current amount cannot be negative, got {}", m)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
