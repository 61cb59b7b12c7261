//! Credit card model
//!
//! Card usage is derived by summing CREDIT transactions referencing the card;
//! only the limit and billing days are stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CardId;
use super::money::Money;
use super::transaction::AccountContext;

/// A credit card in either context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Unique identifier
    pub id: CardId,

    /// Display name (e.g. "Nubank Platinum")
    pub name: String,

    /// Credit limit
    pub limit: Money,

    /// Day of month the statement closes (1-31)
    pub closing_day: u32,

    /// Day of month payment is due (1-31)
    pub due_day: u32,

    /// PF or PJ context
    pub context: AccountContext,
}

impl CreditCard {
    /// Create a new credit card
    pub fn new(
        name: impl Into<String>,
        limit: Money,
        closing_day: u32,
        due_day: u32,
        context: AccountContext,
    ) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            limit,
            closing_day,
            due_day,
            context,
        }
    }

    /// Validate the card
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.name.trim().is_empty() {
            return Err(CardValidationError::EmptyName);
        }
        if !(1..=31).contains(&self.closing_day) {
            return Err(CardValidationError::BadDay("closing", self.closing_day));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(CardValidationError::BadDay("due", self.due_day));
        }
        if self.limit.is_negative() {
            return Err(CardValidationError::NegativeLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, limit {})", self.name, self.context, self.limit)
    }
}

/// Validation errors for credit cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyName,
    BadDay(&'static str, u32),
    NegativeLimit(Money),
}

impl fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Card name cannot be empty"),
            Self::BadDay(which, day) => {
                write!(f, "Card {} day must be between 1 and 31, got {}", which, day)
            }
            Self::NegativeLimit(m) => write!(f, "Card limit cannot be negative, got {}", m),
        }
    }
}

impl std::error::Error for CardValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card() {
        let card = CreditCard::new(
            "Nubank Platinum",
            Money::from_cents(1200000),
            1,
            10,
            AccountContext::Pf,
        );
        assert_eq!(card.closing_day, 1);
        assert_eq!(card.due_day, 10);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_validation_days() {
        let mut card = CreditCard::new("Test", Money::zero(), 5, 15, AccountContext::Pj);
        assert!(card.validate().is_ok());

        card.closing_day = 0;
        assert!(matches!(
            card.validate(),
            Err(CardValidationError::BadDay("closing", 0))
        ));

        card.closing_day = 5;
        card.due_day = 32;
        assert!(matches!(
            card.validate(),
            Err(CardValidationError::BadDay("due", 32))
        ));
    }

    #[test]
    fn test_serialization() {
        let card = CreditCard::new(
            "Inter Black",
            Money::from_cents(4500000),
            5,
            15,
            AccountContext::Pj,
        );
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CreditCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
