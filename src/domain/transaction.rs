//! Transaction entity
//!
//! An immutable record of a monetary movement against an account.
//! Income and expense are the two variants of a single tagged type; the
//! arithmetic sign they carry is decided by the account, not here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use super::{DomainError, Money};

/// Maximum category length in characters
pub const MAX_CATEGORY_LEN: usize = 50;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Category used when the caller provides none
pub const DEFAULT_CATEGORY: &str = "default";

/// Description used when the caller provides none
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Earliest accepted transaction date (2000-01-01T00:00:00Z).
pub fn min_date() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .expect("valid constant date")
        .and_hms_opt(0, 0, 0)
        .expect("valid constant time")
        .and_utc()
}

/// Discriminant for the two transaction variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A validated, immutable monetary movement.
///
/// Constructed only through [`Transaction::income`] and
/// [`Transaction::expense`]; every instance in the system has passed
/// validation. Identity (equality, hashing) is by `id` alone.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: Money,
    category: String,
    date: DateTime<Utc>,
    description: String,
}

impl Transaction {
    /// Create an income transaction.
    ///
    /// `category` defaults to [`DEFAULT_CATEGORY`] and `description` to
    /// [`DEFAULT_DESCRIPTION`] when absent.
    pub fn income(
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::create(TransactionKind::Income, amount, date, category, description)
    }

    /// Create an expense transaction. Same validation as [`Transaction::income`].
    pub fn expense(
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::create(TransactionKind::Expense, amount, date, category, description)
    }

    fn create(
        kind: TransactionKind,
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let description = description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        validate(&amount, date, &category, &description)?;

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category,
            date,
            description,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Shared transaction validation.
///
/// The rule order is the tie-break order: the first failing rule determines
/// the reported error.
fn validate(
    amount: &Money,
    date: DateTime<Utc>,
    category: &str,
    description: &str,
) -> Result<(), DomainError> {
    if amount.value() <= rust_decimal::Decimal::ZERO {
        return Err(DomainError::InvalidAmount);
    }

    if date < min_date() || date > Utc::now() {
        return Err(DomainError::InvalidDate);
    }

    if category.trim().is_empty() || category.chars().count() > MAX_CATEGORY_LEN {
        return Err(DomainError::InvalidCategory);
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidDescription);
    }

    Ok(())
}
