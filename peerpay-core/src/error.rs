//! Error types for the payment ledger

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
///
/// Every error is terminal to the operation that raised it; nothing is
/// retried internally and no partial mutation precedes a failed validation.
#[derive(Error, Debug)]
pub enum Error {
    /// Username fails the pattern match
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Username already registered in the ledger
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Card number rejected by the card validator
    #[error("Invalid credit card number")]
    InvalidCreditCard,

    /// User already has a card on file
    #[error("Only one credit card per user")]
    DuplicateCard,

    /// Actor and target are the same user
    #[error("User cannot pay themselves: {0}")]
    SelfPayment(String),

    /// Payment amount is zero or negative
    #[error("Amount must be positive: {0}")]
    InvalidAmount(Decimal),

    /// Balance insufficient and no card on file
    #[error("Insufficient funds and no credit card on file: {0}")]
    InsufficientFunds(String),

    /// Referenced username is not registered
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}
