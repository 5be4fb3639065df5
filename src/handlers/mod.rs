//! Application handlers
//!
//! One handler per use case. Each validates input shape, invokes the single
//! relevant domain operation, and maps the outcome to a transport DTO.
//! Domain failures pass through unmodified.

pub mod add_transaction_handler;
pub mod commands;
pub mod create_account_handler;
pub mod dto;
pub mod queries;
pub mod validate;

pub use add_transaction_handler::AddTransactionHandler;
pub use commands::{AddTransactionCommand, CreateAccountCommand};
pub use create_account_handler::CreateAccountHandler;
pub use dto::{AccountDto, TransactionDto};
pub use queries::{GetAccountTransactionsHandler, GetAccountsHandler};
pub use validate::{validate_add_transaction, validate_create_account, ValidationErrors};
