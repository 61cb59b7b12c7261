//! Transaction model
//!
//! Represents financial movements in either the personal (PF) or business
//! (PJ) context, with support for transfers, recurring templates, and
//! credit-card installments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BankAccountId, CardId, InstallmentGroupId, TransactionId};
use super::money::Money;

/// Account context a transaction belongs to
///
/// PF ("Pessoa Física") is the personal context, PJ ("Pessoa Jurídica")
/// the business one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountContext {
    #[default]
    Pf,
    Pj,
}

impl AccountContext {
    /// Parse a context from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PF" | "PERSONAL" => Some(Self::Pf),
            "PJ" | "BUSINESS" => Some(Self::Pj),
            _ => None,
        }
    }
}

impl fmt::Display for AccountContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pf => write!(f, "PF"),
            Self::Pj => write!(f, "PJ"),
        }
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a transaction type from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INCOME" | "IN" => Some(Self::Income),
            "EXPENSE" | "OUT" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// How a transaction was paid
///
/// The variant carries the reference that only makes sense for that method:
/// credit purchases may reference a card, debit movements may reference a
/// bank account. This keeps the optional references from drifting apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Credit { card_id: Option<CardId> },
    Debit { bank_account_id: Option<BankAccountId> },
}

impl PaymentMethod {
    /// A debit payment with no bank link
    pub fn debit() -> Self {
        Self::Debit {
            bank_account_id: None,
        }
    }

    /// A credit payment with no card link
    pub fn credit() -> Self {
        Self::Credit { card_id: None }
    }

    /// The card this payment references, if any
    pub fn card_id(&self) -> Option<CardId> {
        match self {
            Self::Credit { card_id } => *card_id,
            Self::Debit { .. } => None,
        }
    }

    /// The bank account this payment references, if any
    pub fn bank_account_id(&self) -> Option<BankAccountId> {
        match self {
            Self::Debit { bank_account_id } => *bank_account_id,
            Self::Credit { .. } => None,
        }
    }

    /// Force this payment onto credit, keeping an existing card link
    pub fn into_credit(self) -> Self {
        match self {
            Self::Credit { .. } => self,
            Self::Debit { .. } => Self::credit(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit { .. } => write!(f, "CREDIT"),
            Self::Debit { .. } => write!(f, "DEBIT"),
        }
    }
}

/// Position of a transaction within an installment purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentInfo {
    /// Ordinal of this installment (1-based)
    pub current: u32,
    /// Total number of installments in the purchase
    pub total: u32,
    /// Shared identifier linking all installments of one purchase
    pub group_id: InstallmentGroupId,
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Human-readable description
    pub description: String,

    /// Amount as a positive magnitude; direction comes from `kind`
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category name
    pub category: String,

    /// PF or PJ context
    pub context: AccountContext,

    /// Payment method with its method-specific reference
    pub payment: PaymentMethod,

    /// Half of a paired transfer; excluded from income/expense volume
    #[serde(default)]
    pub is_transfer: bool,

    /// Recurring template; projected onto future months at read time,
    /// never materialized
    #[serde(default)]
    pub is_recurring: bool,

    /// Set when this transaction is one installment of a credit purchase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<InstallmentInfo>,
}

impl Transaction {
    /// Create a new transaction with the common fields
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: TransactionType,
        category: impl Into<String>,
        context: AccountContext,
        payment: PaymentMethod,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date,
            kind,
            category: category.into(),
            context,
            payment,
            is_transfer: false,
            is_recurring: false,
            installment: None,
        }
    }

    /// The amount with its direction applied: positive for income,
    /// negative for expense
    pub fn signed(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check if this is one installment of a credit purchase
    pub fn is_installment(&self) -> bool {
        self.installment.is_some()
    }

    /// Counts toward income/expense volume (transfers are paired rows that
    /// would double-count, recurring rows are templates)
    pub fn counts_toward_volume(&self) -> bool {
        !self.is_transfer && !self.is_recurring
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if let Some(info) = &self.installment {
            if info.current == 0 || info.current > info.total {
                return Err(TransactionValidationError::BadInstallmentOrdinal {
                    current: info.current,
                    total: info.total,
                });
            }
            if !matches!(self.payment, PaymentMethod::Credit { .. }) {
                return Err(TransactionValidationError::InstallmentNotCredit);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    BadInstallmentOrdinal { current: u32, total: u32 },
    InstallmentNotCredit,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::NonPositiveAmount(m) => {
                write!(f, "Transaction amount must be positive, got {}", m)
            }
            Self::BadInstallmentOrdinal { current, total } => {
                write!(f, "Installment ordinal {}/{} is out of range", current, total)
            }
            Self::InstallmentNotCredit => {
                write!(f, "Installment transactions must use the credit method")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
