//! Create Account Handler
//!
//! Orchestrates account creation: build the aggregate from the command,
//! store it, project the DTO. No business rules live here.

use std::sync::Arc;

use crate::domain::{Account, DomainError, Money};
use crate::repository::AccountRepository;

use super::{AccountDto, CreateAccountCommand};

pub struct CreateAccountHandler {
    repository: Arc<AccountRepository>,
}

impl CreateAccountHandler {
    pub fn new(repository: Arc<AccountRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, command: CreateAccountCommand) -> Result<AccountDto, DomainError> {
        tracing::info!(
            currency = %command.currency,
            amount = ?command.amount,
            "Handling CreateAccountCommand"
        );

        let account = match command.amount {
            None => Account::new(&command.currency)?,
            Some(amount) => {
                let initial_balance = Money::new(amount, &command.currency)?;
                Account::with_balance(initial_balance)
            }
        };

        let dto = AccountDto::from(&account);
        self.repository.insert(account)?;

        tracing::info!(account_id = %dto.id, "Account created");
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn handler() -> (CreateAccountHandler, Arc<AccountRepository>) {
        let repository = Arc::new(AccountRepository::new());
        (CreateAccountHandler::new(Arc::clone(&repository)), repository)
    }

    #[test]
    fn test_create_with_zero_balance() {
        let (handler, repository) = handler();

        let dto = handler.execute(CreateAccountCommand::new("USD")).unwrap();

        assert_eq!(dto.balance, Decimal::ZERO);
        assert_eq!(dto.currency, "USD");
        assert!(repository.get(dto.id).is_some());
    }

    #[test]
    fn test_create_with_initial_balance() {
        let (handler, repository) = handler();

        let dto = handler
            .execute(CreateAccountCommand::new("EUR").with_amount(dec!(200)))
            .unwrap();

        assert_eq!(dto.balance, dec!(200));
        let stored = repository.get(dto.id).unwrap();
        assert_eq!(stored.balance().value(), dec!(200));
        assert_eq!(stored.balance().currency(), "EUR");
    }

    #[test]
    fn test_domain_failures_propagate_unchanged() {
        let (handler, repository) = handler();

        let err = handler.execute(CreateAccountCommand::new(" ")).unwrap_err();
        assert_eq!(err, DomainError::EmptyCurrency);

        let err = handler
            .execute(CreateAccountCommand::new("USD").with_amount(dec!(-5)))
            .unwrap_err();
        assert_eq!(err, DomainError::NegativeValue);

        assert!(repository.is_empty());
    }
}
