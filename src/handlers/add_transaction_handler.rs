//! Add Transaction Handler
//!
//! Shared orchestration for recording incomes and expenses: look the account
//! up, build the Money in the account's own currency, invoke the aggregate
//! under its entry lock, project the DTO. The arithmetic sign and every
//! business rule belong to the Account.

use std::sync::Arc;

use crate::domain::{DomainError, Money, TransactionKind};
use crate::repository::AccountRepository;

use super::{AddTransactionCommand, TransactionDto};

pub struct AddTransactionHandler {
    repository: Arc<AccountRepository>,
    kind: TransactionKind,
}

impl AddTransactionHandler {
    pub fn income(repository: Arc<AccountRepository>) -> Self {
        Self {
            repository,
            kind: TransactionKind::Income,
        }
    }

    pub fn expense(repository: Arc<AccountRepository>) -> Self {
        Self {
            repository,
            kind: TransactionKind::Expense,
        }
    }

    pub fn execute(&self, command: AddTransactionCommand) -> Result<TransactionDto, DomainError> {
        tracing::info!(
            account_id = %command.account_id,
            kind = %self.kind,
            amount = %command.amount,
            date = %command.date,
            category = %command.category,
            "Handling AddTransactionCommand"
        );

        // The balance and the history mutate together under the account's
        // entry lock; concurrent writers on the same account serialize here.
        let outcome = self.repository.with_account(command.account_id, |account| {
            // The amount adopts the account's currency (the API caller sends
            // a bare decimal); a negative command amount fails inside Money.
            let amount = Money::new(command.amount, account.balance().currency())?;

            let transaction = match self.kind {
                TransactionKind::Income => account.add_income(
                    amount,
                    command.date,
                    Some(command.category),
                    Some(command.description),
                ),
                TransactionKind::Expense => account.add_expense(
                    amount,
                    command.date,
                    Some(command.category),
                    Some(command.description),
                ),
            }?;

            Ok(TransactionDto::from(&transaction))
        });

        match outcome {
            Err(err @ DomainError::AccountNotFound(id)) => {
                tracing::warn!(account_id = %id, "Account not found");
                Err(err)
            }
            Ok(inner) => inner,
            Err(err) => Err(err),
        }
    }
}
