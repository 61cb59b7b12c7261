//! Derived balances and dashboard aggregates
//!
//! Nothing in this module is stored. Every number is folded from the
//! transaction list on demand, so results are order-independent and always
//! consistent with the persisted rows. Recurring templates never count;
//! transfers are excluded from volume figures but do move bank balances.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{FindualError, FindualResult};
use crate::models::dates::{clamp_day, days_in_month};
use crate::models::{AccountContext, BankAccountId, CardId, CreditCard, Money, TransactionType};
use crate::storage::Storage;

/// The headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Σ initial bank balances + net of all concrete transactions
    pub total_balance: Money,
    /// PF share of the total
    pub pf_balance: Money,
    /// PJ share of the total
    pub pj_balance: Money,
    /// Income volume for the viewed month (transfers excluded)
    pub month_income: Money,
    /// Expense volume for the viewed month (transfers excluded)
    pub month_expense: Money,
}

/// One day's in/out movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// One category's slice of the month's expense volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub category: String,
    pub total: Money,
}

/// A card's derived usage against its limit
#[derive(Debug, Clone, PartialEq)]
pub struct CardUsage {
    pub card: CreditCard,
    pub usage: Money,
    pub available: Money,
}

/// Service computing derived balances
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Fold a bank's balance: initial + Σ linked incomes − Σ linked expenses.
    /// An unknown bank id folds to zero.
    pub fn bank_balance(&self, bank_id: BankAccountId) -> FindualResult<Money> {
        let initial = self
            .storage
            .banks
            .get(bank_id)?
            .map(|b| b.initial_balance)
            .unwrap_or_else(Money::zero);

        let movement: Money = self
            .storage
            .transactions
            .get_by_bank(bank_id)?
            .iter()
            .filter(|t| !t.is_recurring)
            .map(|t| t.signed())
            .sum();

        Ok(initial + movement)
    }

    /// Balance of one context: its banks' initial balances plus the net of
    /// every concrete transaction in that context
    pub fn context_balance(&self, context: AccountContext) -> FindualResult<Money> {
        let initial: Money = self
            .storage
            .banks
            .filter(|b| b.context == context)?
            .iter()
            .map(|b| b.initial_balance)
            .sum();

        let movement: Money = self
            .storage
            .transactions
            .filter(|t| !t.is_recurring && t.context == context)?
            .iter()
            .map(|t| t.signed())
            .sum();

        Ok(initial + movement)
    }

    /// The dashboard's headline numbers for a viewed month
    pub fn dashboard(&self, year: i32, month: u32) -> FindualResult<DashboardMetrics> {
        let pf_balance = self.context_balance(AccountContext::Pf)?;
        let pj_balance = self.context_balance(AccountContext::Pj)?;

        let start = clamp_day(year, month, 1);
        let end = clamp_day(year, month, days_in_month(year, month));
        let month_txns = self.storage.transactions.get_by_date_range(start, end)?;

        let mut month_income = Money::zero();
        let mut month_expense = Money::zero();
        for txn in month_txns.iter().filter(|t| t.counts_toward_volume()) {
            match txn.kind {
                TransactionType::Income => month_income += txn.amount,
                TransactionType::Expense => month_expense += txn.amount,
            }
        }

        Ok(DashboardMetrics {
            total_balance: pf_balance + pj_balance,
            pf_balance,
            pj_balance,
            month_income,
            month_expense,
        })
    }

    /// Per-day in/out movement across a month, transfers and templates
    /// excluded. Returns one entry per calendar day.
    pub fn daily_flow(&self, year: i32, month: u32) -> FindualResult<Vec<DailyFlow>> {
        let last = days_in_month(year, month);
        let start = clamp_day(year, month, 1);
        let end = clamp_day(year, month, last);

        let mut flows: Vec<DailyFlow> = (1..=last)
            .map(|day| DailyFlow {
                date: clamp_day(year, month, day),
                income: Money::zero(),
                expense: Money::zero(),
            })
            .collect();

        for txn in self.storage.transactions.get_by_date_range(start, end)? {
            if !txn.counts_toward_volume() {
                continue;
            }
            let slot = &mut flows[chrono::Datelike::day(&txn.date) as usize - 1];
            match txn.kind {
                TransactionType::Income => slot.income += txn.amount,
                TransactionType::Expense => slot.expense += txn.amount,
            }
        }

        Ok(flows)
    }

    /// Expense volume by category for a month, largest first, truncated to
    /// `top_n`. Transfers and templates are excluded.
    pub fn expense_composition(
        &self,
        year: i32,
        month: u32,
        top_n: usize,
    ) -> FindualResult<Vec<CategorySlice>> {
        let start = clamp_day(year, month, 1);
        let end = clamp_day(year, month, days_in_month(year, month));

        let mut by_category: HashMap<String, Money> = HashMap::new();
        for txn in self.storage.transactions.get_by_date_range(start, end)? {
            if txn.kind == TransactionType::Expense && txn.counts_toward_volume() {
                *by_category
                    .entry(txn.category.clone())
                    .or_insert_with(Money::zero) += txn.amount;
            }
        }

        let mut slices: Vec<CategorySlice> = by_category
            .into_iter()
            .map(|(category, total)| CategorySlice { category, total })
            .collect();
        slices.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
        slices.truncate(top_n);
        Ok(slices)
    }

    /// Derived usage for one card; errors if the card does not exist
    pub fn card_usage(&self, card_id: CardId) -> FindualResult<CardUsage> {
        let card = self
            .storage
            .cards
            .get(card_id)?
            .ok_or_else(|| FindualError::card_not_found(card_id.to_string()))?;

        let usage: Money = self
            .storage
            .transactions
            .get_by_card(card_id)?
            .iter()
            .filter(|t| !t.is_recurring && t.kind == TransactionType::Expense)
            .map(|t| t.amount)
            .sum();

        Ok(CardUsage {
            available: card.limit - usage,
            card,
            usage,
        })
    }

    /// Usage for every stored card
    pub fn all_card_usage(&self) -> FindualResult<Vec<CardUsage>> {
        let mut usages = Vec::new();
        for card in self.storage.cards.get_all()? {
            usages.push(self.card_usage(card.id)?);
        }
        Ok(usages)
    }
}
