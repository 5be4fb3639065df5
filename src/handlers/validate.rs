//! Structural request validation
//!
//! Checks the shape of incoming commands before they reach the domain:
//! required fields, bounds, well-formed identifiers. Failures collect into a
//! per-field error map rendered as a 400 response. Business rules stay in the
//! domain layer; a command that passes here can still be rejected there.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::transaction::{min_date, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN};

use super::{AddTransactionCommand, CreateAccountCommand};

/// Field name → messages map, ordered for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn validate_create_account(command: &CreateAccountCommand) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if command.currency.trim().is_empty() {
        errors.add("currency", "Currency is required.");
    } else if command.currency.chars().count() != 3 {
        errors.add("currency", "Currency must be exactly 3 characters long.");
    }

    if let Some(amount) = command.amount {
        if amount < Decimal::ZERO {
            errors.add("amount", "Amount must be greater than or equal to zero.");
        }
    }

    errors.into_result()
}

pub fn validate_add_transaction(command: &AddTransactionCommand) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if command.account_id.is_nil() {
        errors.add("accountId", "Account ID cannot be empty.");
    }

    if command.amount <= Decimal::ZERO {
        errors.add("amount", "Amount must be greater than zero.");
    }

    if command.category.trim().is_empty() {
        errors.add("category", "Category cannot be empty.");
    } else if command.category.chars().count() > MAX_CATEGORY_LEN {
        errors.add(
            "category",
            format!("Category cannot exceed {MAX_CATEGORY_LEN} characters."),
        );
    }

    if command.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.add(
            "description",
            format!("Description cannot exceed {MAX_DESCRIPTION_LEN} characters."),
        );
    }

    if command.date < min_date() || command.date > chrono::Utc::now() {
        errors.add(
            "date",
            "Date must be between 2000-01-01 and the current time.",
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_create_account_valid() {
        let cmd = CreateAccountCommand::new("USD");
        assert!(validate_create_account(&cmd).is_ok());

        let cmd = CreateAccountCommand::new("USD").with_amount(dec!(0));
        assert!(validate_create_account(&cmd).is_ok());
    }

    #[test]
    fn test_create_account_currency_rules() {
        let errors = validate_create_account(&CreateAccountCommand::new("")).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["currency"]);

        let errors = validate_create_account(&CreateAccountCommand::new("USDX")).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["currency"]);
    }

    #[test]
    fn test_create_account_negative_amount() {
        let cmd = CreateAccountCommand::new("USD").with_amount(dec!(-1));
        let errors = validate_create_account(&cmd).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["amount"]);
    }

    #[test]
    fn test_add_transaction_valid() {
        let cmd = AddTransactionCommand::new(Uuid::new_v4(), dec!(10), Utc::now(), "Groceries");
        assert!(validate_add_transaction(&cmd).is_ok());
    }

    #[test]
    fn test_add_transaction_collects_all_failures() {
        let cmd = AddTransactionCommand::new(
            Uuid::nil(),
            dec!(0),
            Utc::now() + Duration::days(1),
            " ",
        )
        .with_description("x".repeat(MAX_DESCRIPTION_LEN + 1));

        let errors = validate_add_transaction(&cmd).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec!["accountId", "amount", "category", "date", "description"]
        );
    }

    #[test]
    fn test_add_transaction_boundary_lengths_pass() {
        let cmd = AddTransactionCommand::new(
            Uuid::new_v4(),
            dec!(1),
            Utc::now(),
            "x".repeat(MAX_CATEGORY_LEN),
        )
        .with_description("x".repeat(MAX_DESCRIPTION_LEN));

        assert!(validate_add_transaction(&cmd).is_ok());
    }
}
