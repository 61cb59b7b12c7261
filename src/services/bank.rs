//! Bank account service
//!
//! The initial balance set here is the fold's starting point forever; editing
//! it rewrites history, which is the intended behavior for correcting a typo.

use crate::error::{FindualError, FindualResult};
use crate::models::{AccountContext, BankAccount, BankAccountId};
use crate::storage::Storage;

/// Service for managing bank accounts
pub struct BankService<'a> {
    storage: &'a Storage,
}

impl<'a> BankService<'a> {
    /// Create a new bank service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a bank account; names are unique within a context
    pub fn add(&self, bank: BankAccount) -> FindualResult<BankAccount> {
        bank.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;

        let clash = self
            .storage
            .banks
            .filter(|b| b.context == bank.context && b.name.eq_ignore_ascii_case(&bank.name))?;
        if !clash.is_empty() {
            return Err(FindualError::Duplicate {
                entity_type: "Bank account",
                identifier: bank.name,
            });
        }

        self.storage.banks.push(bank.clone())?;
        self.storage.banks.save()?;
        Ok(bank)
    }

    /// Replace an existing bank account wholesale
    pub fn update(&self, bank: BankAccount) -> FindualResult<BankAccount> {
        bank.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;
        if !self.storage.banks.replace(bank.clone())? {
            return Err(FindualError::bank_not_found(bank.id.to_string()));
        }
        self.storage.banks.save()?;
        Ok(bank)
    }

    /// Delete a bank account. Linked transactions keep their dangling
    /// reference; balances for it simply fold to zero afterwards.
    pub fn delete(&self, id: BankAccountId) -> FindualResult<bool> {
        let deleted = self.storage.banks.delete(id)?;
        if deleted {
            self.storage.banks.save()?;
        }
        Ok(deleted)
    }

    /// Get a bank account by id
    pub fn get(&self, id: BankAccountId) -> FindualResult<Option<BankAccount>> {
        self.storage.banks.get(id)
    }

    /// Find a bank account by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> FindualResult<Option<BankAccount>> {
        Ok(self
            .storage
            .banks
            .filter(|b| b.name.eq_ignore_ascii_case(name))?
            .into_iter()
            .next())
    }

    /// List bank accounts, optionally one context
    pub fn list(&self, context: Option<AccountContext>) -> FindualResult<Vec<BankAccount>> {
        self.storage
            .banks
            .filter(|b| context.map(|c| b.context == c).unwrap_or(true))
    }
}
