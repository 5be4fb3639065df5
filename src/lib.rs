//! Finance Tracker Library
//!
//! Personal finance bookkeeping: accounts with running balances and
//! income/expense transaction histories, served over HTTP/JSON and stored
//! in memory for the lifetime of the process.

pub mod api;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod repository;

mod error;

pub use config::Config;
pub use error::{AppError, AppResult};

pub use domain::{Account, DomainError, Money, Transaction, TransactionKind};
pub use repository::AccountRepository;
