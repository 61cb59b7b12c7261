//! Credit card service

use crate::error::{FindualError, FindualResult};
use crate::models::{AccountContext, CardId, CreditCard};
use crate::storage::Storage;

/// Service for managing credit cards
pub struct CardService<'a> {
    storage: &'a Storage,
}

impl<'a> CardService<'a> {
    /// Create a new card service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a card; names are unique within a context
    pub fn add(&self, card: CreditCard) -> FindualResult<CreditCard> {
        card.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;

        let clash = self
            .storage
            .cards
            .filter(|c| c.context == card.context && c.name.eq_ignore_ascii_case(&card.name))?;
        if !clash.is_empty() {
            return Err(FindualError::Duplicate {
                entity_type: "Credit card",
                identifier: card.name,
            });
        }

        self.storage.cards.push(card.clone())?;
        self.storage.cards.save()?;
        Ok(card)
    }

    /// Replace an existing card wholesale
    pub fn update(&self, card: CreditCard) -> FindualResult<CreditCard> {
        card.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;
        if !self.storage.cards.replace(card.clone())? {
            return Err(FindualError::card_not_found(card.id.to_string()));
        }
        self.storage.cards.save()?;
        Ok(card)
    }

    /// Delete a card. Charges made on it remain in the history.
    pub fn delete(&self, id: CardId) -> FindualResult<bool> {
        let deleted = self.storage.cards.delete(id)?;
        if deleted {
            self.storage.cards.save()?;
        }
        Ok(deleted)
    }

    /// Get a card by id
    pub fn get(&self, id: CardId) -> FindualResult<Option<CreditCard>> {
        self.storage.cards.get(id)
    }

    /// Find a card by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> FindualResult<Option<CreditCard>> {
        Ok(self
            .storage
            .cards
            .filter(|c| c.name.eq_ignore_ascii_case(name))?
            .into_iter()
            .next())
    }

    /// List cards, optionally one context
    pub fn list(&self, context: Option<AccountContext>) -> FindualResult<Vec<CreditCard>> {
        self.storage
            .cards
            .filter(|c| context.map(|ctx| c.context == ctx).unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FindualPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn card(name: &str, context: AccountContext) -> CreditCard {
        CreditCard::new(name, Money::from_cents(500000), 1, 10, context)
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let added = service.add(card("Nubank", AccountContext::Pf)).unwrap();
        assert!(service.get(added.id).unwrap().is_some());
    }

    #[test]
    fn test_invalid_days_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let mut bad = card("Bad", AccountContext::Pf);
        bad.due_day = 0;
        assert!(matches!(
            service.add(bad),
            Err(FindualError::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_name_same_context_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        service.add(card("Inter", AccountContext::Pj)).unwrap();
        assert!(matches!(
            service.add(card("inter", AccountContext::Pj)),
            Err(FindualError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_update_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let mut c = service.add(card("Nubank", AccountContext::Pf)).unwrap();
        c.limit = Money::from_cents(1000000);
        service.update(c.clone()).unwrap();
        assert_eq!(
            service.get(c.id).unwrap().unwrap().limit.cents(),
            1000000
        );
    }

    #[test]
    fn test_delete_keeps_charges() {
        use crate::models::{PaymentMethod, Transaction, TransactionType};
        use chrono::NaiveDate;

        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let c = service.add(card("Nubank", AccountContext::Pf)).unwrap();
        storage
            .transactions
            .push(Transaction::new(
                "Dinner",
                Money::from_cents(45000),
                NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
                TransactionType::Expense,
                "Food",
                AccountContext::Pf,
                PaymentMethod::Credit { card_id: Some(c.id) },
            ))
            .unwrap();

        assert!(service.delete(c.id).unwrap());
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }
}
