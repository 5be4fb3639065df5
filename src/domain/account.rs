//! Account Aggregate
//!
//! Account is the aggregate root owning a balance and its transaction
//! history. It is the sole mutator of both: transactions are created and
//! attached only through [`Account::add_income`] and [`Account::add_expense`],
//! and a transaction joins the history only together with the matching
//! balance update.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{DomainError, Money, Transaction, TransactionKind};
use chrono::{DateTime, Utc};

/// Account aggregate root.
///
/// # Invariants
/// - The balance currency is fixed at creation and never changes
/// - The balance equals the initial balance plus all incomes minus all
///   expenses, exactly
/// - Every recorded transaction carries the account's currency
/// - The balance never goes negative; an expense that would make it so is
///   rejected and leaves the account untouched
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account with a zero balance in the given currency.
    ///
    /// Propagates `DomainError::EmptyCurrency` from [`Money::zero`] unchanged.
    pub fn new(currency: impl Into<String>) -> Result<Self, DomainError> {
        let balance = Money::zero(currency)?;
        Ok(Self::with_balance(balance))
    }

    /// Create an account holding the given initial balance.
    pub fn with_balance(initial_balance: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    /// Read-only snapshot of the transaction history.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Record an income: adds `amount` to the balance and appends the
    /// transaction, or fails leaving the account untouched.
    pub fn add_income(
        &mut self,
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Transaction, DomainError> {
        self.add_transaction(TransactionKind::Income, amount, date, category, description)
    }

    /// Record an expense: subtracts `amount` from the balance and appends the
    /// transaction, or fails leaving the account untouched. An expense that
    /// would overdraw the account fails with `DomainError::NegativeValue`.
    pub fn add_expense(
        &mut self,
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Transaction, DomainError> {
        self.add_transaction(TransactionKind::Expense, amount, date, category, description)
    }

    // Check order is fixed: currency match, then balance arithmetic, then
    // transaction validity. A currency mismatch is always reported over a
    // category/description problem.
    fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        date: DateTime<Utc>,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Transaction, DomainError> {
        if !self.matches_currency(amount.currency()) {
            return Err(DomainError::InvalidCurrency);
        }

        // Checked arithmetic: a candidate outside Decimal's range must fail,
        // not panic mid-request
        let candidate: Decimal = match kind {
            TransactionKind::Income => self.balance.value().checked_add(amount.value()),
            TransactionKind::Expense => self.balance.value().checked_sub(amount.value()),
        }
        .ok_or(DomainError::BalanceOverflow)?;
        // Money::new rejects a negative candidate, which on the expense path
        // is exactly the insufficient-funds case
        let new_balance = Money::new(candidate, self.balance.currency())?;

        let transaction = match kind {
            TransactionKind::Income => Transaction::income(amount, date, category, description)?,
            TransactionKind::Expense => Transaction::expense(amount, date, category, description)?,
        };

        // Both succeed: commit balance and history together
        self.balance = new_balance;
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    fn matches_currency(&self, currency: &str) -> bool {
        self.balance.currency().eq_ignore_ascii_case(currency)
    }
}
