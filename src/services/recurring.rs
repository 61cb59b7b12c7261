//! Recurring bill projection
//!
//! A transaction flagged `is_recurring` is a template, not a row in any
//! month's history. Projections are computed at read time by placing the
//! template's amount on its day-of-month in the viewed month, clamping to the
//! month's last day. Nothing here is ever persisted.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::FindualResult;
use crate::models::dates::clamp_day;
use crate::models::{AccountContext, CardId, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Where an upcoming bill comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillSource {
    /// A recurring EXPENSE template
    Recurring(TransactionId),
    /// A credit card statement due date
    CardDue(CardId),
}

/// A dated obligation inside the lookahead window
#[derive(Debug, Clone)]
pub struct UpcomingBill {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub context: AccountContext,
    pub source: BillSource,
}

/// Service for projecting recurring templates onto concrete months
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List the stored templates
    pub fn templates(&self) -> FindualResult<Vec<Transaction>> {
        self.storage.transactions.get_recurring()
    }

    /// Project one template onto a month. The result is a view value: it
    /// keeps the template's id, drops the recurring flag, and must never be
    /// written back to storage.
    pub fn project(template: &Transaction, year: i32, month: u32) -> Transaction {
        let mut projected = template.clone();
        projected.date = clamp_day(year, month, template.date.day());
        projected.is_recurring = false;
        projected
    }

    /// Project every template (optionally one context) onto a month
    pub fn project_month(
        &self,
        year: i32,
        month: u32,
        context: Option<AccountContext>,
    ) -> FindualResult<Vec<Transaction>> {
        let mut projected: Vec<Transaction> = self
            .templates()?
            .iter()
            .filter(|t| context.map(|c| t.context == c).unwrap_or(true))
            .map(|t| Self::project(t, year, month))
            .collect();
        projected.sort_by_key(|t| t.date);
        Ok(projected)
    }

    /// Bills falling due within 30 days of `today`: recurring EXPENSE
    /// templates at their next occurrence, plus credit card due dates with
    /// the card's current usage as the amount.
    pub fn upcoming_bills(&self, today: NaiveDate) -> FindualResult<Vec<UpcomingBill>> {
        let horizon = today + Duration::days(30);
        let mut bills = Vec::new();

        for template in self.templates()? {
            if template.kind != TransactionType::Expense {
                continue;
            }
            let date = next_occurrence(today, template.date.day());
            if date <= horizon {
                bills.push(UpcomingBill {
                    date,
                    description: template.description.clone(),
                    amount: template.amount,
                    context: template.context,
                    source: BillSource::Recurring(template.id),
                });
            }
        }

        for card in self.storage.cards.get_all()? {
            let usage: Money = self
                .storage
                .transactions
                .get_by_card(card.id)?
                .iter()
                .filter(|t| !t.is_recurring && t.kind == TransactionType::Expense)
                .map(|t| t.amount)
                .sum();
            let date = next_occurrence(today, card.due_day);
            if date <= horizon {
                bills.push(UpcomingBill {
                    date,
                    description: format!("{} statement", card.name),
                    amount: usage,
                    context: card.context,
                    source: BillSource::CardDue(card.id),
                });
            }
        }

        bills.sort_by_key(|b| b.date);
        Ok(bills)
    }
}

/// The first date on or after `today` falling on `day` of some month
fn next_occurrence(today: NaiveDate, day: u32) -> NaiveDate {
    let this_month = clamp_day(today.year(), today.month(), day);
    if this_month >= today {
        return this_month;
    }
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    clamp_day(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FindualPaths;
    use crate::models::{CreditCard, PaymentMethod};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn template(description: &str, day: u32, cents: i64) -> Transaction {
        let mut txn = Transaction::new(
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            TransactionType::Expense,
            "Software/SaaS",
            AccountContext::Pj,
            PaymentMethod::debit(),
        );
        txn.is_recurring = true;
        txn
    }

    #[test]
    fn test_project_places_day_in_viewed_month() {
        let netflix = template("Netflix", 15, 3990);
        let projected = RecurringService::project(&netflix, 2025, 6);
        assert_eq!(projected.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert!(!projected.is_recurring);
        assert_eq!(projected.amount.cents(), 3990);
    }

    #[test]
    fn test_project_clamps_short_months() {
        let rent = template("Rent", 31, 250000);
        let projected = RecurringService::project(&rent, 2025, 2);
        assert_eq!(projected.date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_template_never_materialized() {
        let (_temp_dir, storage) = create_test_storage();
        storage.transactions.push(template("Netflix", 15, 3990)).unwrap();

        let service = RecurringService::new(&storage);
        service.project_month(2025, 6, None).unwrap();
        service.project_month(2025, 7, None).unwrap();

        // Projection is read-only: the store still holds just the template
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert!(storage.transactions.get_all().unwrap()[0].is_recurring);
    }

    #[test]
    fn test_project_month_sorted_and_filtered() {
        let (_temp_dir, storage) = create_test_storage();
        storage.transactions.push(template("Hosting", 20, 5000)).unwrap();
        let mut pf = template("Gym", 5, 12000);
        pf.context = AccountContext::Pf;
        storage.transactions.push(pf).unwrap();

        let service = RecurringService::new(&storage);
        let all = service.project_month(2025, 3, None).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].date < all[1].date);

        let pj_only = service
            .project_month(2025, 3, Some(AccountContext::Pj))
            .unwrap();
        assert_eq!(pj_only.len(), 1);
        assert_eq!(pj_only[0].description, "Hosting");
    }

    #[test]
    fn test_upcoming_bills_includes_next_occurrence() {
        let (_temp_dir, storage) = create_test_storage();
        storage.transactions.push(template("Netflix", 15, 3990)).unwrap();
        // Day already past this month rolls into the next
        storage.transactions.push(template("Hosting", 2, 5000)).unwrap();

        let service = RecurringService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let bills = service.upcoming_bills(today).unwrap();

        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(bills[0].description, "Netflix");
        assert_eq!(bills[1].date, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
    }

    #[test]
    fn test_upcoming_bills_excludes_income_templates() {
        let (_temp_dir, storage) = create_test_storage();
        let mut salary = template("Retainer", 5, 800000);
        salary.kind = TransactionType::Income;
        storage.transactions.push(salary).unwrap();

        let service = RecurringService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(service.upcoming_bills(today).unwrap().is_empty());
    }

    #[test]
    fn test_upcoming_bills_card_due_with_usage() {
        let (_temp_dir, storage) = create_test_storage();
        let card = CreditCard::new(
            "Nubank",
            Money::from_cents(1000000),
            1,
            10,
            AccountContext::Pf,
        );
        let card_id = card.id;
        storage.cards.push(card).unwrap();

        let mut charge = Transaction::new(
            "Dinner",
            Money::from_cents(45000),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            TransactionType::Expense,
            "Food",
            AccountContext::Pf,
            PaymentMethod::Credit {
                card_id: Some(card_id),
            },
        );
        charge.is_transfer = false;
        storage.transactions.push(charge).unwrap();

        let service = RecurringService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let bills = service.upcoming_bills(today).unwrap();

        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(bills[0].amount.cents(), 45000);
        assert!(matches!(bills[0].source, BillSource::CardDue(id) if id == card_id));
    }
}
