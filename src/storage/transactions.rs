//! Transaction-specific queries on the persisted transaction list
//!
//! Everything here is a pure filter over the stored list; derived numbers
//! (balances, card usage) live in the service layer.

use chrono::NaiveDate;

use crate::error::FindualError;
use crate::models::{BankAccountId, CardId, InstallmentGroupId, Transaction};

use super::collection::JsonCollection;

/// Repository for transactions (newest first by convention)
pub type TransactionRepository = JsonCollection<Transaction>;

impl TransactionRepository {
    /// Transactions linked to a bank account via a debit payment
    pub fn get_by_bank(&self, bank_id: BankAccountId) -> Result<Vec<Transaction>, FindualError> {
        self.filter(|t| t.payment.bank_account_id() == Some(bank_id))
    }

    /// Credit transactions charged to a card
    pub fn get_by_card(&self, card_id: CardId) -> Result<Vec<Transaction>, FindualError> {
        self.filter(|t| t.payment.card_id() == Some(card_id))
    }

    /// All installments of one purchase, ordered by ordinal
    pub fn get_installment_group(
        &self,
        group_id: InstallmentGroupId,
    ) -> Result<Vec<Transaction>, FindualError> {
        let mut group = self.filter(|t| {
            t.installment
                .map(|info| info.group_id == group_id)
                .unwrap_or(false)
        })?;
        group.sort_by_key(|t| t.installment.map(|i| i.current).unwrap_or(0));
        Ok(group)
    }

    /// Recurring templates
    pub fn get_recurring(&self) -> Result<Vec<Transaction>, FindualError> {
        self.filter(|t| t.is_recurring)
    }

    /// Concrete (non-template) transactions dated within [start, end]
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, FindualError> {
        self.filter(|t| !t.is_recurring && t.date >= start && t.date <= end)
    }
}
