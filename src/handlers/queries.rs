//! Query handlers
//!
//! Read-side orchestration: snapshot the repository, project DTOs.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::DomainError;
use crate::repository::AccountRepository;

use super::{AccountDto, TransactionDto};

/// Lists all accounts.
pub struct GetAccountsHandler {
    repository: Arc<AccountRepository>,
}

impl GetAccountsHandler {
    pub fn new(repository: Arc<AccountRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Vec<AccountDto> {
        self.repository
            .get_all()
            .iter()
            .map(AccountDto::from)
            .collect()
    }
}

/// Lists the transaction history of one account.
pub struct GetAccountTransactionsHandler {
    repository: Arc<AccountRepository>,
}

impl GetAccountTransactionsHandler {
    pub fn new(repository: Arc<AccountRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, account_id: Uuid) -> Result<Vec<TransactionDto>, DomainError> {
        tracing::info!(account_id = %account_id, "Handling GetAccountTransactions");

        let account = self
            .repository
            .get(account_id)
            .ok_or(DomainError::AccountNotFound(account_id))?;

        tracing::info!(
            account_id = %account_id,
            count = account.transactions().len(),
            "Transactions found"
        );

        Ok(account
            .transactions()
            .iter()
            .map(TransactionDto::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{
        AddTransactionCommand, AddTransactionHandler, CreateAccountCommand, CreateAccountHandler,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_get_accounts_empty() {
        let repository = Arc::new(AccountRepository::new());
        let accounts = GetAccountsHandler::new(repository).execute();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_get_accounts_lists_all() {
        let repository = Arc::new(AccountRepository::new());
        let create = CreateAccountHandler::new(Arc::clone(&repository));
        create.execute(CreateAccountCommand::new("USD")).unwrap();
        create
            .execute(CreateAccountCommand::new("EUR").with_amount(dec!(200)))
            .unwrap();

        let mut accounts = GetAccountsHandler::new(repository).execute();
        accounts.sort_by_key(|dto| dto.currency.clone());

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].currency, "EUR");
        assert_eq!(accounts[0].balance, dec!(200));
    }

    #[test]
    fn test_get_transactions_unknown_account() {
        let repository = Arc::new(AccountRepository::new());
        let missing = Uuid::new_v4();

        let err = GetAccountTransactionsHandler::new(repository)
            .execute(missing)
            .unwrap_err();

        assert_eq!(err, DomainError::AccountNotFound(missing));
    }

    #[test]
    fn test_get_transactions_projects_history() {
        let repository = Arc::new(AccountRepository::new());
        let account = CreateAccountHandler::new(Arc::clone(&repository))
            .execute(CreateAccountCommand::new("USD"))
            .unwrap();

        AddTransactionHandler::income(Arc::clone(&repository))
            .execute(AddTransactionCommand::new(
                account.id,
                dec!(100),
                Utc::now(),
                "Salary",
            ))
            .unwrap();
        AddTransactionHandler::expense(Arc::clone(&repository))
            .execute(AddTransactionCommand::new(
                account.id,
                dec!(30),
                Utc::now(),
                "Groceries",
            ))
            .unwrap();

        let transactions = GetAccountTransactionsHandler::new(repository)
            .execute(account.id)
            .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].transaction_type, "income");
        assert_eq!(transactions[1].transaction_type, "expense");
        assert_eq!(transactions[1].amount, dec!(30));
    }
}
