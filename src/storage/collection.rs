//! Generic JSON-backed collection
//!
//! Every persisted collection is a bare JSON array in its own file, kept in
//! memory as a `Vec` so that saving and reloading reproduces the list exactly
//! (order and field values preserved). Lookups are linear scans, which is
//! plenty for a single-user ledger.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FindualError;
use crate::models::{
    BankAccount, BankAccountId, CardId, Category, CategoryId, CreditCard, Goal, GoalId,
    Transaction, TransactionId,
};

use super::file_io::{read_json, write_json_atomic};

/// An entity with a typed primary key
pub trait Keyed {
    type Key: Copy + PartialEq;

    fn key(&self) -> Self::Key;
}

impl Keyed for Transaction {
    type Key = TransactionId;
    fn key(&self) -> TransactionId {
        self.id
    }
}

impl Keyed for Category {
    type Key = CategoryId;
    fn key(&self) -> CategoryId {
        self.id
    }
}

impl Keyed for CreditCard {
    type Key = CardId;
    fn key(&self) -> CardId {
        self.id
    }
}

impl Keyed for BankAccount {
    type Key = BankAccountId;
    fn key(&self) -> BankAccountId {
        self.id
    }
}

impl Keyed for Goal {
    type Key = GoalId;
    fn key(&self) -> GoalId {
        self.id
    }
}

/// A collection of entities persisted as one JSON array file
pub struct JsonCollection<T: Keyed> {
    path: PathBuf,
    items: RwLock<Vec<T>>,
}

impl<T> JsonCollection<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Create a collection backed by `path`; call [`load`](Self::load) before use
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<T>>, FindualError> {
        self.items
            .read()
            .map_err(|e| FindualError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<T>>, FindualError> {
        self.items
            .write()
            .map_err(|e| FindualError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the collection from disk; an absent file yields an empty list
    pub fn load(&self) -> Result<(), FindualError> {
        let loaded: Vec<T> = read_json(&self.path)?;
        *self.write()? = loaded;
        Ok(())
    }

    /// Save the collection to disk in its in-memory order
    pub fn save(&self) -> Result<(), FindualError> {
        let items = self.read()?;
        write_json_atomic(&self.path, &*items)
    }

    /// Get an entity by key
    pub fn get(&self, key: T::Key) -> Result<Option<T>, FindualError> {
        Ok(self.read()?.iter().find(|i| i.key() == key).cloned())
    }

    /// Get all entities in stored order
    pub fn get_all(&self) -> Result<Vec<T>, FindualError> {
        Ok(self.read()?.clone())
    }

    /// Get all entities matching a predicate, in stored order
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<T>, FindualError> {
        Ok(self.read()?.iter().filter(|i| pred(i)).cloned().collect())
    }

    /// Append an entity at the end of the list
    pub fn push(&self, item: T) -> Result<(), FindualError> {
        self.write()?.push(item);
        Ok(())
    }

    /// Insert an entity at the front of the list (newest-first convention
    /// for transactions)
    pub fn insert_front(&self, item: T) -> Result<(), FindualError> {
        self.write()?.insert(0, item);
        Ok(())
    }

    /// Replace the entity with the same key, in place. Returns false if no
    /// such entity exists.
    pub fn replace(&self, item: T) -> Result<bool, FindualError> {
        let mut items = self.write()?;
        match items.iter_mut().find(|i| i.key() == item.key()) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete an entity by key. Returns false if no such entity exists.
    pub fn delete(&self, key: T::Key) -> Result<bool, FindualError> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|i| i.key() != key);
        Ok(items.len() != before)
    }

    /// Remove all entities
    pub fn clear(&self) -> Result<(), FindualError> {
        self.write()?.clear();
        Ok(())
    }

    /// Number of entities
    pub fn count(&self) -> Result<usize, FindualError> {
        Ok(self.read()?.len())
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> Result<bool, FindualError> {
        Ok(self.read()?.is_empty())
    }
}
