//! Transport DTOs
//!
//! Projections of domain objects into the wire shape. Field values are
//! carried over exactly; no rounding or reformatting happens here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: Uuid,
    pub balance: Decimal,
    pub currency: String,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            balance: account.balance().value(),
            currency: account.balance().currency().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: Uuid,
    /// "income" or "expense"
    pub transaction_type: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub currency: String,
}

impl From<&Transaction> for TransactionDto {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id(),
            transaction_type: transaction.kind().to_string(),
            amount: transaction.amount().value(),
            category: transaction.category().to_string(),
            date: transaction.date(),
            description: transaction.description().to_string(),
            currency: transaction.amount().currency().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_projection_round_trip() {
        let account = Account::with_balance(Money::new(dec!(200), "USD").unwrap());
        let dto = AccountDto::from(&account);

        assert_eq!(dto.id, account.id());
        assert_eq!(dto.balance, dec!(200));
        assert_eq!(dto.currency, "USD");
    }

    #[test]
    fn test_transaction_projection_round_trip() {
        let mut account = Account::new("USD").unwrap();
        let date = Utc::now();
        let tx = account
            .add_income(
                Money::new(dec!(250.75), "USD").unwrap(),
                date,
                Some("Salary".to_string()),
                Some("August pay".to_string()),
            )
            .unwrap();

        let dto = TransactionDto::from(&tx);
        assert_eq!(dto.id, tx.id());
        assert_eq!(dto.transaction_type, "income");
        assert_eq!(dto.amount, dec!(250.75));
        assert_eq!(dto.category, "Salary");
        assert_eq!(dto.date, date);
        assert_eq!(dto.description, "August pay");
        assert_eq!(dto.currency, "USD");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let mut account = Account::with_balance(Money::new(dec!(1), "USD").unwrap());
        let tx = account
            .add_expense(Money::new(dec!(1), "USD").unwrap(), Utc::now(), None, None)
            .unwrap();

        let json = serde_json::to_value(TransactionDto::from(&tx)).unwrap();
        assert_eq!(json["transactionType"], "expense");
        assert!(json.get("transaction_type").is_none());
    }
}
