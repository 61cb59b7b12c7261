//! Storage layer for Findual
//!
//! Each collection persists as one JSON array file under the data directory,
//! read leniently (absent file means empty) and written atomically. State is
//! saved after every mutation by the service layer; on reload, last writer
//! wins.

pub mod collection;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use collection::JsonCollection;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::config::FindualPaths;
use crate::error::FindualError;
use crate::models::{BankAccount, Category, CreditCard, Goal};

/// Main storage coordinator that provides access to all collections
pub struct Storage {
    paths: FindualPaths,
    pub transactions: TransactionRepository,
    pub categories: JsonCollection<Category>,
    pub cards: JsonCollection<CreditCard>,
    pub banks: JsonCollection<BankAccount>,
    pub goals: JsonCollection<Goal>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FindualPaths) -> Result<Self, FindualError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: JsonCollection::new(paths.categories_file()),
            cards: JsonCollection::new(paths.cards_file()),
            banks: JsonCollection::new(paths.banks_file()),
            goals: JsonCollection::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FindualPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> Result<(), FindualError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.cards.load()?;
        self.banks.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), FindualError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.cards.save()?;
        self.banks.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Wipe every collection, in memory and on disk
    pub fn reset(&self) -> Result<(), FindualError> {
        self.transactions.clear()?;
        self.categories.clear()?;
        self.cards.clear()?;
        self.banks.clear()?;
        self.goals.clear()?;
        self.save_all()?;

        // The settings file is removed so the next run recreates defaults
        let settings = self.paths.settings_file();
        if settings.exists() {
            std::fs::remove_file(&settings)
                .map_err(|e| FindualError::Storage(format!("Failed to remove settings: {}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountContext, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_reset_wipes_everything() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .banks
            .push(BankAccount::new("Nubank", Money::zero(), AccountContext::Pf))
            .unwrap();
        storage.save_all().unwrap();
        assert_eq!(storage.banks.count().unwrap(), 1);

        storage.reset().unwrap();
        assert_eq!(storage.banks.count().unwrap(), 0);

        // Reload from disk confirms the wipe is persisted
        let mut reloaded = Storage::new(storage.paths().clone()).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.banks.count().unwrap(), 0);
    }
}
