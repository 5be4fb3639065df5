//! Command definitions
//!
//! Commands represent intentions to change the system state. They carry raw
//! caller input; the domain layer decides whether it is acceptable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Command to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountCommand {
    /// Currency of the account (ISO-style 3-letter code)
    pub currency: String,
    /// Optional opening balance; absent means a zero balance
    pub amount: Option<Decimal>,
}

impl CreateAccountCommand {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Command to record an income or expense against an account.
///
/// The same shape serves both variants; the handler picks the domain
/// operation from the transaction kind it is constructed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTransactionCommand {
    pub account_id: Uuid,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: String,
}

impl AddTransactionCommand {
    pub fn new(
        account_id: Uuid,
        amount: Decimal,
        date: DateTime<Utc>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            amount,
            date,
            category: category.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
