//! Installment expansion service
//!
//! Turns one credit purchase into N dated transactions. The total is split
//! into equal parts rounded to the cent with the last part absorbing the
//! remainder, so the series always reconciles exactly to the purchase total.
//! Dates advance by calendar months from the purchase date, clamping to the
//! last day of shorter months.

use chrono::NaiveDate;

use crate::error::{FindualError, FindualResult};
use crate::models::dates::add_months;
use crate::models::{
    AccountContext, CardId, InstallmentGroupId, InstallmentInfo, Money, PaymentMethod,
    Transaction, TransactionType,
};
use crate::storage::Storage;

/// The purchase fields shared by every generated installment
#[derive(Debug, Clone)]
pub struct InstallmentTemplate {
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    pub context: AccountContext,
    pub card_id: Option<CardId>,
}

/// Service for expanding installment purchases
pub struct InstallmentService<'a> {
    storage: &'a Storage,
}

impl<'a> InstallmentService<'a> {
    /// Create a new installment service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Expand a purchase into its installments and insert them atomically
    /// (all rows appear in one save).
    ///
    /// Every installment is forced onto the CREDIT method regardless of how
    /// the purchase was described.
    pub fn add_purchase(
        &self,
        template: InstallmentTemplate,
        total: Money,
        count: u32,
    ) -> FindualResult<Vec<Transaction>> {
        if count == 0 {
            return Err(FindualError::Validation(
                "Installment count must be at least 1".into(),
            ));
        }
        if !total.is_positive() {
            return Err(FindualError::Validation(
                "Installment total must be positive".into(),
            ));
        }
        if let Some(card_id) = template.card_id {
            if self.storage.cards.get(card_id)?.is_none() {
                return Err(FindualError::card_not_found(card_id.to_string()));
            }
        }

        let group_id = InstallmentGroupId::new();
        let parts = total.split_even(count);

        let mut generated = Vec::with_capacity(count as usize);
        for (i, amount) in parts.into_iter().enumerate() {
            let ordinal = i as u32 + 1;
            let mut txn = Transaction::new(
                format!("{} ({}/{})", template.description, ordinal, count),
                amount,
                add_months(template.date, i as u32),
                TransactionType::Expense,
                template.category.clone(),
                template.context,
                PaymentMethod::Credit {
                    card_id: template.card_id,
                },
            );
            txn.installment = Some(InstallmentInfo {
                current: ordinal,
                total: count,
                group_id,
            });
            txn.validate()
                .map_err(|e| FindualError::Validation(e.to_string()))?;
            generated.push(txn);
        }

        // Newest-first list order: keep the series in ordinal order at the top
        for txn in generated.iter().rev() {
            self.storage.transactions.insert_front(txn.clone())?;
        }
        self.storage.transactions.save()?;

        Ok(generated)
    }
}
