//! Immutable payment record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Record of one completed transfer
///
/// Constructed inside the payment paths once all validations have passed,
/// and never mutated afterwards. Actor and target are held by username
/// (a snapshot of identity, like the feed entries rendered from it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment ID
    id: Uuid,

    /// Payment amount (exact decimal, always positive)
    amount: Decimal,

    /// Paying user
    actor: String,

    /// Receiving user
    target: String,

    /// Free-text note
    note: String,

    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new payment record
    pub(crate) fn new(
        amount: Decimal,
        actor: impl Into<String>,
        target: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            actor: actor.into(),
            target: target.into(),
            note: note.into(),
            created_at: Utc::now(),
        }
    }

    /// Payment ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Payment amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Paying user's username
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Receiving user's username
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Free-text note
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Payment {
    /// Render the feed entry, amount always with two decimal digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} paid {} ${:.2} for {}",
            self.actor, self.target, self.amount, self.note
        )
    }
}
