//! Bank account model
//!
//! A bank account stores only its initial balance; the current balance is
//! always derived by folding linked transactions over it (see the balance
//! service). No cached balance is ever the source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BankAccountId;
use super::money::Money;
use super::transaction::AccountContext;

/// A bank account in either context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    pub id: BankAccountId,

    /// Display name (e.g. "Nubank", "Inter Empresas")
    pub name: String,

    /// Balance at the moment the account was registered
    pub initial_balance: Money,

    /// PF or PJ context
    pub context: AccountContext,

    /// Display color as a hex string (e.g. "#8A05BE")
    #[serde(default)]
    pub color: String,
}

impl BankAccount {
    /// Create a new bank account
    pub fn new(
        name: impl Into<String>,
        initial_balance: Money,
        context: AccountContext,
    ) -> Self {
        Self {
            id: BankAccountId::new(),
            name: name.into(),
            initial_balance,
            context,
            color: String::new(),
        }
    }

    /// Validate the bank account
    pub fn validate(&self) -> Result<(), BankValidationError> {
        if self.name.trim().is_empty() {
            return Err(BankValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.context)
    }
}

/// Validation errors for bank accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankValidationError {
    EmptyName,
}

impl fmt::Display for BankValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bank account name cannot be empty"),
        }
    }
}

impl std::error::Error for BankValidationError {}
