//! Transaction service
//!
//! CRUD for plain transactions. Creation inserts at the front of the list
//! (newest first); edits are full replacements; deletes remove only the one
//! row, never cascading to paired or grouped transactions.

use crate::error::{FindualError, FindualResult};
use crate::models::{AccountContext, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for managing transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a transaction
    pub fn add(&self, transaction: Transaction) -> FindualResult<Transaction> {
        transaction
            .validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;

        self.storage.transactions.insert_front(transaction.clone())?;
        self.storage.transactions.save()?;
        Ok(transaction)
    }

    /// Replace an existing transaction wholesale
    pub fn update(&self, transaction: Transaction) -> FindualResult<Transaction> {
        transaction
            .validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;

        if !self.storage.transactions.replace(transaction.clone())? {
            return Err(FindualError::transaction_not_found(
                transaction.id.to_string(),
            ));
        }
        self.storage.transactions.save()?;
        Ok(transaction)
    }

    /// Delete a transaction. Returns false if it did not exist.
    pub fn delete(&self, id: TransactionId) -> FindualResult<bool> {
        let deleted = self.storage.transactions.delete(id)?;
        if deleted {
            self.storage.transactions.save()?;
        }
        Ok(deleted)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> FindualResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions, optionally filtered by context and/or direction
    pub fn list(
        &self,
        context: Option<AccountContext>,
        kind: Option<TransactionType>,
    ) -> FindualResult<Vec<Transaction>> {
        self.storage.transactions.filter(|t| {
            context.map(|c| t.context == c).unwrap_or(true)
                && kind.map(|k| t.kind == k).unwrap_or(true)
        })
    }
}
