//! Category model
//!
//! Categories label transactions and are scoped to the PF context, the PJ
//! context, or both.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::{AccountContext, TransactionType};

/// Which account contexts a category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryScope {
    Pf,
    Pj,
    #[default]
    Both,
}

impl CategoryScope {
    /// Check whether a category with this scope applies in `context`
    pub fn applies_to(&self, context: AccountContext) -> bool {
        match self {
            Self::Both => true,
            Self::Pf => context == AccountContext::Pf,
            Self::Pj => context == AccountContext::Pj,
        }
    }

    /// Parse a scope from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PF" => Some(Self::Pf),
            "PJ" => Some(Self::Pj),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pf => write!(f, "PF"),
            Self::Pj => write!(f, "PJ"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (e.g. "Food", "Software/SaaS")
    pub name: String,

    /// Which transaction direction this category labels
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Contexts the category is available in
    #[serde(default)]
    pub scope: CategoryScope,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: TransactionType, scope: CategoryScope) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            scope,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.scope)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
