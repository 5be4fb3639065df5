//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;
use uuid::Uuid;

use super::transaction::{MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN};

/// Business rule violations raised by the domain model.
///
/// Each variant carries a stable string code (see [`DomainError::code`]) that
/// is surfaced to API clients unchanged, so handlers never have to translate
/// domain failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Money constructed with a missing or whitespace-only currency
    #[error("Currency cannot be empty.")]
    EmptyCurrency,

    /// Money constructed with a negative value. Also surfaces when an
    /// expense would drive an account balance below zero.
    #[error("Value cannot be negative.")]
    NegativeValue,

    /// Transaction amount must be strictly positive
    #[error("Amount must be greater than zero.")]
    InvalidAmount,

    /// Transaction date outside the accepted window
    #[error("Date must be between 2000-01-01 and the current time.")]
    InvalidDate,

    /// Transaction category empty, whitespace-only, or too long
    #[error("Category must be a non-empty string with a maximum length of {MAX_CATEGORY_LEN} characters.")]
    InvalidCategory,

    /// Transaction description too long
    #[error("Description must not exceed {MAX_DESCRIPTION_LEN} characters.")]
    InvalidDescription,

    /// Transaction currency does not match the account's currency
    #[error("The currency of the amount does not match the account's currency.")]
    InvalidCurrency,

    /// Balance arithmetic left the representable decimal range
    #[error("The resulting balance is outside the representable range.")]
    BalanceOverflow,

    /// Account created from an absent initial balance
    #[error("Initial balance cannot be null.")]
    InitialBalanceNull,

    /// Account lookup miss
    #[error("The specified account does not exist.")]
    AccountNotFound(Uuid),

    /// Insert of an account whose identifier is already present
    #[error("An account with this identifier already exists.")]
    AccountAlreadyExists(Uuid),
}

impl DomainError {
    /// Stable machine-readable error code, in `Scope.Name` form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyCurrency => "Money.EmptyCurrency",
            Self::NegativeValue => "Money.NegativeValue",
            Self::InvalidAmount => "Transaction.InvalidAmount",
            Self::InvalidDate => "Transaction.InvalidDate",
            Self::InvalidCategory => "Transaction.InvalidCategory",
            Self::InvalidDescription => "Transaction.InvalidDescription",
            Self::InvalidCurrency => "Account.InvalidCurrency",
            Self::BalanceOverflow => "Account.BalanceOverflow",
            Self::InitialBalanceNull => "Account.InitialBalanceNull",
            Self::AccountNotFound(_) => "Account.NotFound",
            Self::AccountAlreadyExists(_) => "Account.AlreadyExists",
        }
    }

    /// Whether this error should map to HTTP 404 rather than 400.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}
