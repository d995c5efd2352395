//! User entity and payment resolution
//!
//! A user owns a balance, at most one credit card, a friend set, and an
//! append-only activity feed. Payments resolve their funding source here:
//! balance first, card fallback.

use crate::{
    card::CardNetwork,
    payment::Payment,
    validate::{is_valid_credit_card_number, is_valid_username},
    Error, Result,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// A registered user
///
/// Identity is the username, unique per ledger and immutable after
/// construction. Friend links are held by username and kept symmetric by
/// [`User::add_friend`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique username
    username: String,

    /// Cash balance (exact decimal)
    balance: Decimal,

    /// Credit card on file, at most one, immutable once set
    credit_card: Option<String>,

    /// Usernames of friends (symmetric relation)
    friends: BTreeSet<String>,

    /// Activity feed, append-only, insertion order significant
    feed: Vec<String>,
}

impl User {
    /// Create a user with a zero balance and no card
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if !is_valid_username(&username) {
            return Err(Error::InvalidUsername(username));
        }

        Ok(Self {
            username,
            balance: Decimal::ZERO,
            credit_card: None,
            friends: BTreeSet::new(),
            feed: Vec::new(),
        })
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit card on file, if any
    pub fn credit_card(&self) -> Option<&str> {
        self.credit_card.as_deref()
    }

    /// Usernames of this user's friends
    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }

    /// Check friendship by username
    pub fn has_friend(&self, username: &str) -> bool {
        self.friends.contains(username)
    }

    /// Activity feed in insertion order
    pub fn retrieve_feed(&self) -> &[String] {
        &self.feed
    }

    /// Credit the balance unconditionally
    ///
    /// Also used to seed the initial balance at registration and to credit
    /// the target of a payment. No validation of the amount, matching the
    /// permissive registration contract.
    pub fn add_to_balance(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Attach a credit card
    ///
    /// A user holds at most one card; once set it never changes.
    pub fn add_credit_card(&mut self, card_number: impl Into<String>) -> Result<()> {
        if self.credit_card.is_some() {
            return Err(Error::DuplicateCard);
        }

        let card_number = card_number.into();
        if !is_valid_credit_card_number(&card_number) {
            return Err(Error::InvalidCreditCard);
        }

        self.credit_card = Some(card_number);
        Ok(())
    }

    /// Add a symmetric friend link
    ///
    /// Idempotent: if the link already exists nothing happens, including no
    /// duplicate feed entry. Otherwise both friend sets gain the link and
    /// both feeds get the same message.
    pub fn add_friend(&mut self, other: &mut User) {
        if self.friends.contains(&other.username) {
            return;
        }

        self.friends.insert(other.username.clone());
        other.friends.insert(self.username.clone());

        let message = format!("{} and {} are now friends.", self.username, other.username);
        self.feed.push(message.clone());
        other.feed.push(message);
    }

    /// Pay another user
    ///
    /// Resolves the funding source: the balance path if the balance covers
    /// the amount, else the card path if a card is on file, else the payment
    /// fails. All validations run strictly before any balance or feed
    /// mutation.
    pub fn pay(
        &mut self,
        target: &mut User,
        amount: Decimal,
        note: &str,
        network: &dyn CardNetwork,
    ) -> Result<Payment> {
        if self.username == target.username {
            return Err(Error::SelfPayment(self.username.clone()));
        }

        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        if self.balance >= amount {
            return Ok(self.pay_with_balance(target, amount, note));
        }

        if self.credit_card.is_some() {
            return Ok(self.pay_with_card(target, amount, note, network));
        }

        Err(Error::InsufficientFunds(self.username.clone()))
    }

    /// Balance path: move `amount` from this user's balance to the target's
    ///
    /// Conserves total money across the pair.
    fn pay_with_balance(&mut self, target: &mut User, amount: Decimal, note: &str) -> Payment {
        self.balance -= amount;
        let payment = Payment::new(amount, &self.username, &target.username, note);
        target.add_to_balance(amount);

        self.record(&payment, target);
        tracing::debug!(payment_id = %payment.id(), amount = %amount, "settled from balance");
        payment
    }

    /// Card path: charge the card, credit the target
    ///
    /// The money enters the system from the card network, so this user's
    /// balance is not decremented.
    fn pay_with_card(
        &mut self,
        target: &mut User,
        amount: Decimal,
        note: &str,
        network: &dyn CardNetwork,
    ) -> Payment {
        // Funding source was resolved by `pay`: a card is on file here.
        let card_number = self.credit_card.as_deref().unwrap_or_default();
        network.charge(card_number, amount);

        let payment = Payment::new(amount, &self.username, &target.username, note);
        target.add_to_balance(amount);

        self.record(&payment, target);
        tracing::debug!(payment_id = %payment.id(), amount = %amount, "settled via card");
        payment
    }

    /// Append the rendered payment to both parties' feeds
    fn record(&mut self, payment: &Payment, target: &mut User) {
        let entry = payment.to_string();
        self.feed.push(entry.clone());
        target.feed.push(entry);
    }
}
