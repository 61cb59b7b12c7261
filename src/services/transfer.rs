//! Transfer service
//!
//! A transfer is recorded as exactly two transactions inserted in one save:
//! an EXPENSE on the source side and an INCOME on the destination side, equal
//! amounts, same date, both flagged `is_transfer` so volume aggregates can
//! exclude them. Two kinds exist: moving value between the PF and PJ contexts
//! (the "pró-labore" flow) and moving value between two bank accounts.

use chrono::NaiveDate;

use crate::error::{FindualError, FindualResult};
use crate::models::{
    AccountContext, BankAccountId, Money, PaymentMethod, Transaction, TransactionType,
};
use crate::storage::Storage;

/// Category used on the source side of a PJ context transfer
pub const CATEGORY_PRO_LABORE_OUT: &str = "Transfer/Pró-labore";
/// Category used on the PF destination side of a context transfer
pub const CATEGORY_SALARY_PRO_LABORE: &str = "Salary/Pró-labore";
/// Category used on the PJ destination side of a context transfer
pub const CATEGORY_CAPITAL_CONTRIBUTION: &str = "Capital Contribution";
/// Category used for plain transfers
pub const CATEGORY_TRANSFER: &str = "Transfer";

/// The two ways value moves without being income or expense volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Between the PF and PJ contexts, optionally touching a bank on each side
    Context {
        from: AccountContext,
        to: AccountContext,
        from_bank: Option<BankAccountId>,
        to_bank: Option<BankAccountId>,
    },
    /// Between two bank accounts (contexts come from the banks themselves)
    BankToBank {
        from: BankAccountId,
        to: BankAccountId,
    },
}

/// The pair of transactions a transfer produced
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// The EXPENSE on the source side
    pub outgoing: Transaction,
    /// The INCOME on the destination side
    pub incoming: Transaction,
}

/// Service for executing transfers
pub struct TransferService<'a> {
    storage: &'a Storage,
}

impl<'a> TransferService<'a> {
    /// Create a new transfer service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Execute a transfer, inserting its two paired transactions
    pub fn execute(
        &self,
        kind: TransferKind,
        amount: Money,
        date: NaiveDate,
        description: &str,
    ) -> FindualResult<TransferResult> {
        if !amount.is_positive() {
            return Err(FindualError::Validation(
                "Transfer amount must be positive".into(),
            ));
        }

        let (outgoing, incoming) = match kind {
            TransferKind::Context {
                from,
                to,
                from_bank,
                to_bank,
            } => self.build_context_pair(from, to, from_bank, to_bank, amount, date, description)?,
            TransferKind::BankToBank { from, to } => {
                self.build_bank_pair(from, to, amount, date, description)?
            }
        };

        // Both rows land in one save so readers never observe half a transfer
        self.storage.transactions.insert_front(incoming.clone())?;
        self.storage.transactions.insert_front(outgoing.clone())?;
        self.storage.transactions.save()?;

        Ok(TransferResult { outgoing, incoming })
    }

    fn build_context_pair(
        &self,
        from: AccountContext,
        to: AccountContext,
        from_bank: Option<BankAccountId>,
        to_bank: Option<BankAccountId>,
        amount: Money,
        date: NaiveDate,
        description: &str,
    ) -> FindualResult<(Transaction, Transaction)> {
        if from == to {
            return Err(FindualError::Validation(
                "Transfer source and destination contexts must differ".into(),
            ));
        }
        for bank in [from_bank, to_bank].into_iter().flatten() {
            if self.storage.banks.get(bank)?.is_none() {
                return Err(FindualError::bank_not_found(bank.to_string()));
            }
        }

        let out_category = if from == AccountContext::Pj {
            CATEGORY_PRO_LABORE_OUT
        } else {
            CATEGORY_TRANSFER
        };
        let in_category = if to == AccountContext::Pf {
            CATEGORY_SALARY_PRO_LABORE
        } else {
            CATEGORY_CAPITAL_CONTRIBUTION
        };

        let mut outgoing = Transaction::new(
            format!("Out: {}", description),
            amount,
            date,
            TransactionType::Expense,
            out_category,
            from,
            PaymentMethod::Debit {
                bank_account_id: from_bank,
            },
        );
        outgoing.is_transfer = true;

        let mut incoming = Transaction::new(
            format!("In: {}", description),
            amount,
            date,
            TransactionType::Income,
            in_category,
            to,
            PaymentMethod::Debit {
                bank_account_id: to_bank,
            },
        );
        incoming.is_transfer = true;

        Ok((outgoing, incoming))
    }

    fn build_bank_pair(
        &self,
        from: BankAccountId,
        to: BankAccountId,
        amount: Money,
        date: NaiveDate,
        description: &str,
    ) -> FindualResult<(Transaction, Transaction)> {
        if from == to {
            return Err(FindualError::Validation(
                "Cannot transfer to the same bank account".into(),
            ));
        }

        let from_bank = self
            .storage
            .banks
            .get(from)?
            .ok_or_else(|| FindualError::bank_not_found(from.to_string()))?;
        let to_bank = self
            .storage
            .banks
            .get(to)?
            .ok_or_else(|| FindualError::bank_not_found(to.to_string()))?;

        let mut outgoing = Transaction::new(
            format!("Transfer to {}: {}", to_bank.name, description),
            amount,
            date,
            TransactionType::Expense,
            CATEGORY_TRANSFER,
            from_bank.context,
            PaymentMethod::Debit {
                bank_account_id: Some(from),
            },
        );
        outgoing.is_transfer = true;

        let mut incoming = Transaction::new(
            format!("Transfer from {}: {}", from_bank.name, description),
            amount,
            date,
            TransactionType::Income,
            CATEGORY_TRANSFER,
            to_bank.context,
            PaymentMethod::Debit {
                bank_account_id: Some(to),
            },
        );
        incoming.is_transfer = true;

        Ok((outgoing, incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FindualPaths;
    use crate::models::BankAccount;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindualPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
    }

    #[test]
    fn test_context_transfer_inserts_exactly_two() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let result = service
            .execute(
                TransferKind::Context {
                    from: AccountContext::Pj,
                    to: AccountContext::Pf,
                    from_bank: None,
                    to_bank: None,
                },
                Money::from_cents(300000),
                date(),
                "Pró-labore",
            )
            .unwrap();

        assert_eq!(storage.transactions.count().unwrap(), 2);
        assert_eq!(result.outgoing.kind, TransactionType::Expense);
        assert_eq!(result.incoming.kind, TransactionType::Income);
        assert_eq!(result.outgoing.amount, result.incoming.amount);
        assert!(result.outgoing.is_transfer && result.incoming.is_transfer);

        // Zero combined, non-zero per context
        let combined = result.outgoing.signed() + result.incoming.signed();
        assert!(combined.is_zero());
        assert_eq!(result.outgoing.signed().cents(), -300000);
        assert_eq!(result.incoming.signed().cents(), 300000);
    }

    #[test]
    fn test_context_transfer_categories() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let pj_to_pf = service
            .execute(
                TransferKind::Context {
                    from: AccountContext::Pj,
                    to: AccountContext::Pf,
                    from_bank: None,
                    to_bank: None,
                },
                Money::from_cents(1000),
                date(),
                "salary",
            )
            .unwrap();
        assert_eq!(pj_to_pf.outgoing.category, CATEGORY_PRO_LABORE_OUT);
        assert_eq!(pj_to_pf.incoming.category, CATEGORY_SALARY_PRO_LABORE);

        let pf_to_pj = service
            .execute(
                TransferKind::Context {
                    from: AccountContext::Pf,
                    to: AccountContext::Pj,
                    from_bank: None,
                    to_bank: None,
                },
                Money::from_cents(1000),
                date(),
                "capital",
            )
            .unwrap();
        assert_eq!(pf_to_pj.outgoing.category, CATEGORY_TRANSFER);
        assert_eq!(pf_to_pj.incoming.category, CATEGORY_CAPITAL_CONTRIBUTION);
    }

    #[test]
    fn test_context_transfer_descriptions_paired() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let result = service
            .execute(
                TransferKind::Context {
                    from: AccountContext::Pf,
                    to: AccountContext::Pj,
                    from_bank: None,
                    to_bank: None,
                },
                Money::from_cents(1000),
                date(),
                "monthly move",
            )
            .unwrap();
        assert_eq!(result.outgoing.description, "Out: monthly move");
        assert_eq!(result.incoming.description, "In: monthly move");
    }

    #[test]
    fn test_same_context_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let result = service.execute(
            TransferKind::Context {
                from: AccountContext::Pf,
                to: AccountContext::Pf,
                from_bank: None,
                to_bank: None,
            },
            Money::from_cents(1000),
            date(),
            "noop",
        );
        assert!(matches!(result, Err(FindualError::Validation(_))));
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_bank_transfer_links_both_banks() {
        let (_temp_dir, storage) = create_test_storage();
        let nubank = BankAccount::new("Nubank", Money::from_cents(150000), AccountContext::Pf);
        let inter = BankAccount::new("Inter", Money::from_cents(50000), AccountContext::Pj);
        let (from_id, to_id) = (nubank.id, inter.id);
        storage.banks.push(nubank).unwrap();
        storage.banks.push(inter).unwrap();

        let service = TransferService::new(&storage);
        let result = service
            .execute(
                TransferKind::BankToBank {
                    from: from_id,
                    to: to_id,
                },
                Money::from_cents(20000),
                date(),
                "monthly sweep",
            )
            .unwrap();

        assert_eq!(result.outgoing.payment.bank_account_id(), Some(from_id));
        assert_eq!(result.incoming.payment.bank_account_id(), Some(to_id));
        assert_eq!(result.outgoing.context, AccountContext::Pf);
        assert_eq!(result.incoming.context, AccountContext::Pj);
        assert_eq!(result.outgoing.description, "Transfer to Inter: monthly sweep");
        assert_eq!(
            result.incoming.description,
            "Transfer from Nubank: monthly sweep"
        );
    }

    #[test]
    fn test_bank_transfer_unknown_bank_is_noop_error() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let result = service.execute(
            TransferKind::BankToBank {
                from: BankAccountId::new(),
                to: BankAccountId::new(),
            },
            Money::from_cents(1000),
            date(),
            "ghost",
        );
        assert!(matches!(result, Err(FindualError::NotFound { .. })));
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let result = service.execute(
            TransferKind::Context {
                from: AccountContext::Pf,
                to: AccountContext::Pj,
                from_bank: None,
                to_bank: None,
            },
            Money::zero(),
            date(),
            "zero",
        );
        assert!(matches!(result, Err(FindualError::Validation(_))));
    }
}
