//! Money value object
//!
//! Domain primitive pairing a decimal amount with a currency code.
//! All values are validated at construction time, ensuring invalid money
//! cannot exist in the system.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::DomainError;

/// Money represents a validated (value, currency) pair.
///
/// # Invariants
/// - Value is never negative
/// - Currency is never empty or whitespace-only
///
/// Equality is structural: two `Money` values are equal when both the value
/// and the currency match.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use finance_tracker::domain::Money;
///
/// let money = Money::new(Decimal::new(10050, 2), "USD").unwrap();
/// assert_eq!(money.value(), Decimal::new(10050, 2));
/// assert_eq!(money.currency(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    value: Decimal,
    currency: String,
}

impl Money {
    /// Create a new Money with validation.
    ///
    /// # Errors
    /// - `DomainError::EmptyCurrency` if the currency is empty or whitespace
    /// - `DomainError::NegativeValue` if the value is below zero
    pub fn new(value: Decimal, currency: impl Into<String>) -> Result<Self, DomainError> {
        let currency = currency.into();

        if currency.trim().is_empty() {
            return Err(DomainError::EmptyCurrency);
        }

        if value < Decimal::ZERO {
            return Err(DomainError::NegativeValue);
        }

        Ok(Self { value, currency })
    }

    /// Create a zero-valued Money in the given currency.
    pub fn zero(currency: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Decimal::ZERO, currency)
    }

    /// Get the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Get the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
