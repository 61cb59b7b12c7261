//! Savings goal service
//!
//! Funding a goal moves its stored current amount and records the cash side
//! as a regular transaction: contributions become an EXPENSE, withdrawals an
//! INCOME, both in the "Investment" category. A delta that applies as zero
//! (funding nothing, or withdrawing from an empty goal) records no
//! transaction at all.

use chrono::NaiveDate;

use crate::error::{FindualError, FindualResult};
use crate::models::{
    BankAccountId, Goal, GoalId, Money, PaymentMethod, Transaction, TransactionType,
};
use crate::storage::Storage;

/// Category every goal funding transaction lands in
pub const CATEGORY_INVESTMENT: &str = "Investment";

/// What a funding action did
#[derive(Debug, Clone)]
pub struct FundingResult {
    /// The goal after the delta was applied
    pub goal: Goal,
    /// The amount actually applied (clamped withdrawals shrink it)
    pub applied: Money,
    /// The paired transaction, if the applied amount was non-zero
    pub transaction: Option<Transaction>,
}

/// Service for managing savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a goal
    pub fn add(&self, goal: Goal) -> FindualResult<Goal> {
        goal.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;
        self.storage.goals.push(goal.clone())?;
        self.storage.goals.save()?;
        Ok(goal)
    }

    /// Replace an existing goal wholesale
    pub fn update(&self, goal: Goal) -> FindualResult<Goal> {
        goal.validate()
            .map_err(|e| FindualError::Validation(e.to_string()))?;
        if !self.storage.goals.replace(goal.clone())? {
            return Err(FindualError::goal_not_found(goal.id.to_string()));
        }
        self.storage.goals.save()?;
        Ok(goal)
    }

    /// Delete a goal. Past funding transactions are left untouched.
    pub fn delete(&self, id: GoalId) -> FindualResult<bool> {
        let deleted = self.storage.goals.delete(id)?;
        if deleted {
            self.storage.goals.save()?;
        }
        Ok(deleted)
    }

    /// Get a goal by id
    pub fn get(&self, id: GoalId) -> FindualResult<Option<Goal>> {
        self.storage.goals.get(id)
    }

    /// List all goals
    pub fn list(&self) -> FindualResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    /// Apply a signed funding delta to a goal. Positive contributes, negative
    /// withdraws (clamped so the goal never goes below zero). The cash side
    /// is recorded as one transaction for the applied amount, optionally
    /// linked to a bank account.
    pub fn add_funds(
        &self,
        id: GoalId,
        delta: Money,
        date: NaiveDate,
        bank_account_id: Option<BankAccountId>,
    ) -> FindualResult<FundingResult> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FindualError::goal_not_found(id.to_string()))?;
        if let Some(bank) = bank_account_id {
            if self.storage.banks.get(bank)?.is_none() {
                return Err(FindualError::bank_not_found(bank.to_string()));
            }
        }

        let applied = goal.apply_delta(delta);
        self.storage.goals.replace(goal.clone())?;
        self.storage.goals.save()?;

        let transaction = if applied.is_zero() {
            None
        } else {
            let (kind, description) = if applied.is_positive() {
                (TransactionType::Expense, format!("Contribution: {}", goal.name))
            } else {
                (TransactionType::Income, format!("Withdrawal: {}", goal.name))
            };
            let txn = Transaction::new(
                description,
                applied.abs(),
                date,
                kind,
                CATEGORY_INVESTMENT,
                goal.context,
                PaymentMethod::Debit { bank_account_id },
            );
            self.storage.transactions.insert_front(txn.clone())?;
            self.storage.transactions.save()?;
            Some(txn)
        };

        Ok(FundingResult {
            goal,
            applied,
            transaction,
        })
    }
}
