//! PeerPay Core
//!
//! Minimal peer-to-peer payment ledger: users hold a cash balance and
//! optionally one linked credit card, pay one another, and accumulate a
//! per-user activity feed; friend links generate feed entries on both sides.
//!
//! # Architecture
//!
//! - **Ledger**: registry owning all users, enforcing username uniqueness,
//!   entry point for every two-party operation
//! - **User**: balance, optional card, friend set, feed, and the
//!   payment-resolution algorithm (balance first, card fallback)
//! - **Payment**: immutable record of one transfer
//! - **Collaborator seams**: card network and feed renderer at the boundary
//!
//! # Invariants
//!
//! - Money conservation: a balance-funded payment moves exactly `amount`
//!   between the pair
//! - Card-funded payments credit the target without debiting the actor
//!   (money enters from the card network)
//! - A user's card, once set, never changes
//! - The friend relation is symmetric and idempotent
//! - Feeds are append-only, insertion order significant

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod card;
pub mod error;
pub mod ledger;
pub mod payment;
pub mod render;
pub mod user;
pub mod validate;

// Re-exports
pub use card::{CardNetwork, NullCardNetwork};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use payment::Payment;
pub use render::render_feed;
pub use user::User;
pub use validate::{is_valid_credit_card_number, is_valid_username};
