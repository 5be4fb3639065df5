//! Domain layer
//!
//! The bookkeeping domain model: Money value object, Transaction entity and
//! the Account aggregate root. All business rules live here; handlers and the
//! HTTP layer only orchestrate.

pub mod account;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use error::DomainError;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
