//! User registry and operation entry point
//!
//! The ledger owns every user, enforces username uniqueness at creation
//! time, and mediates the two-party operations: it resolves both usernames
//! to disjoint mutable borrows and hands control to the [`User`] methods
//! that carry the actual algorithm. It is an explicitly instantiated value
//! owned by its caller, never process-wide state.

use crate::{
    card::{CardNetwork, NullCardNetwork},
    payment::Payment,
    user::User,
    Error, Result,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Registry of all users
#[derive(Debug)]
pub struct Ledger {
    /// Users keyed by username, keys unique
    users: HashMap<String, User>,

    /// Card-network collaborator for card-funded payments
    card_network: Box<dyn CardNetwork>,
}

impl Ledger {
    /// Create an empty ledger with the no-op card network
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            card_network: Box::new(NullCardNetwork),
        }
    }

    /// Replace the card-network collaborator
    pub fn with_card_network(mut self, network: Box<dyn CardNetwork>) -> Self {
        self.card_network = network;
        self
    }

    /// Register a new user
    ///
    /// The username must be unique and pass validation; the initial balance
    /// is credited unconditionally (negative amounts included); a card
    /// number, if given, must pass the card validator. A card failure leaves
    /// the username unregistered.
    pub fn create_user(
        &mut self,
        username: &str,
        initial_balance: Decimal,
        card_number: Option<&str>,
    ) -> Result<&User> {
        if self.users.contains_key(username) {
            return Err(Error::DuplicateUsername(username.to_string()));
        }

        let mut user = User::new(username)?;
        user.add_to_balance(initial_balance);

        if let Some(number) = card_number {
            user.add_credit_card(number)?;
        }

        tracing::info!(username, balance = %user.balance(), "registered user");
        Ok(self.users.entry(username.to_string()).or_insert(user))
    }

    /// Look up a user by username
    pub fn get_user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Pay `amount` from `actor` to `target`
    ///
    /// Validation and funding-source resolution live in [`User::pay`]; this
    /// resolves both parties. The self-payment comparison runs first since
    /// the two map entries must be disjoint.
    pub fn pay(&mut self, actor: &str, target: &str, amount: Decimal, note: &str) -> Result<Payment> {
        if actor == target {
            return Err(Error::SelfPayment(actor.to_string()));
        }

        let [actor_user, target_user] = self.users.get_disjoint_mut([actor, target]);
        let actor_user = actor_user.ok_or_else(|| Error::UnknownUser(actor.to_string()))?;
        let target_user = target_user.ok_or_else(|| Error::UnknownUser(target.to_string()))?;

        actor_user.pay(target_user, amount, note, self.card_network.as_ref())
    }

    /// Add a symmetric friend link between two users
    ///
    /// Idempotent, as [`User::add_friend`] is. Linking a user to themselves
    /// is a no-op.
    pub fn add_friend(&mut self, username: &str, friend: &str) -> Result<()> {
        if username == friend {
            return Ok(());
        }

        let [user, friend_user] = self.users.get_disjoint_mut([username, friend]);
        let user = user.ok_or_else(|| Error::UnknownUser(username.to_string()))?;
        let friend_user = friend_user.ok_or_else(|| Error::UnknownUser(friend.to_string()))?;

        user.add_friend(friend_user);
        Ok(())
    }

    /// A user's activity feed in insertion order
    pub fn retrieve_feed(&self, username: &str) -> Result<&[String]> {
        self.users
            .get(username)
            .map(User::retrieve_feed)
            .ok_or_else(|| Error::UnknownUser(username.to_string()))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Card network that records every charge it receives
    #[derive(Debug, Default)]
    struct RecordingCardNetwork {
        charges: RefCell<Vec<(String, Decimal)>>,
    }

    impl CardNetwork for Rc<RecordingCardNetwork> {
        fn charge(&self, card_number: &str, amount: Decimal) {
            self.charges
                .borrow_mut()
                .push((card_number.to_string(), amount));
        }
    }

    fn test_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .create_user("Bobby", Decimal::new(500, 2), Some("4111111111111111"))
            .unwrap();
        ledger
            .create_user("Carol", Decimal::new(1000, 2), Some("4242424242424242"))
            .unwrap();
        ledger
    }

    #[test]
    fn test_create_user_that_already_exists() {
        let mut ledger = test_ledger();
        let result = ledger.create_user("Bobby", Decimal::new(1000, 2), None);
        assert!(matches!(result, Err(Error::DuplicateUsername(_))));

        // The first registration is retained untouched.
        let bobby = ledger.get_user("Bobby").unwrap();
        assert_eq!(bobby.balance(), Decimal::new(500, 2));
    }

    #[test]
    fn test_create_user_with_invalid_username() {
        let mut ledger = Ledger::new();
        let result = ledger.create_user("Bobby$", Decimal::new(1000, 2), None);
        assert!(matches!(result, Err(Error::InvalidUsername(_))));
        assert_eq!(ledger.user_count(), 0);
    }

    #[test]
    fn test_create_user_with_invalid_card_leaves_unregistered() {
        let mut ledger = Ledger::new();
        let result = ledger.create_user("Bobby", Decimal::new(500, 2), Some("1234"));
        assert!(matches!(result, Err(Error::InvalidCreditCard)));
        assert!(ledger.get_user("Bobby").is_none());
    }

    #[test]
    fn test_create_user_with_negative_balance_permitted() {
        let mut ledger = Ledger::new();
        let user = ledger
            .create_user("Bobby", Decimal::new(-500, 2), None)
            .unwrap();
        assert_eq!(user.balance(), Decimal::new(-500, 2));
    }

    #[test]
    fn test_payment_with_balance() {
        let mut ledger = test_ledger();
        ledger
            .pay("Bobby", "Carol", Decimal::new(500, 2), "Coffee")
            .unwrap();

        assert_eq!(ledger.get_user("Bobby").unwrap().balance(), Decimal::ZERO);
        assert_eq!(
            ledger.get_user("Carol").unwrap().balance(),
            Decimal::new(1500, 2)
        );
    }

    #[test]
    fn test_payment_with_card_charges_network() {
        let network = Rc::new(RecordingCardNetwork::default());
        let mut ledger = Ledger::new().with_card_network(Box::new(network.clone()));
        ledger
            .create_user("Bobby", Decimal::new(500, 2), None)
            .unwrap();
        ledger
            .create_user("Carol", Decimal::new(1000, 2), Some("4242424242424242"))
            .unwrap();

        ledger
            .pay("Carol", "Bobby", Decimal::new(1500, 2), "Lunch")
            .unwrap();

        assert_eq!(ledger.get_user("Bobby").unwrap().balance(), Decimal::new(2000, 2));
        assert_eq!(ledger.get_user("Carol").unwrap().balance(), Decimal::new(1000, 2));
        assert_eq!(
            *network.charges.borrow(),
            [("4242424242424242".to_string(), Decimal::new(1500, 2))]
        );
    }

    #[test]
    fn test_self_payment_rejected() {
        let mut ledger = test_ledger();
        let result = ledger.pay("Bobby", "Bobby", Decimal::ONE, "Nope");
        assert!(matches!(result, Err(Error::SelfPayment(_))));
    }

    #[test]
    fn test_unknown_actor_or_target() {
        let mut ledger = test_ledger();
        assert!(matches!(
            ledger.pay("nobody", "Carol", Decimal::ONE, "Nope"),
            Err(Error::UnknownUser(u)) if u == "nobody"
        ));
        assert!(matches!(
            ledger.pay("Bobby", "nobody", Decimal::ONE, "Nope"),
            Err(Error::UnknownUser(u)) if u == "nobody"
        ));
        assert!(matches!(
            ledger.retrieve_feed("nobody"),
            Err(Error::UnknownUser(_))
        ));
    }

    #[test]
    fn test_feed_scenario() {
        let mut ledger = test_ledger();
        ledger
            .pay("Bobby", "Carol", Decimal::new(500, 2), "Coffee")
            .unwrap();
        ledger
            .pay("Carol", "Bobby", Decimal::new(1500, 2), "Lunch")
            .unwrap();

        assert_eq!(
            ledger.retrieve_feed("Bobby").unwrap(),
            [
                "Bobby paid Carol $5.00 for Coffee",
                "Carol paid Bobby $15.00 for Lunch",
            ]
        );
    }

    #[test]
    fn test_add_friend_through_ledger() {
        let mut ledger = test_ledger();
        ledger.add_friend("Bobby", "Carol").unwrap();
        ledger.add_friend("Bobby", "Carol").unwrap();

        assert!(ledger.get_user("Bobby").unwrap().has_friend("Carol"));
        assert!(ledger.get_user("Carol").unwrap().has_friend("Bobby"));
        assert_eq!(
            ledger.retrieve_feed("Bobby").unwrap(),
            ["Bobby and Carol are now friends."]
        );
    }

    #[test]
    fn test_add_friend_to_self_is_noop() {
        let mut ledger = test_ledger();
        ledger.add_friend("Bobby", "Bobby").unwrap();
        assert!(ledger.get_user("Bobby").unwrap().friends().is_empty());
        assert!(ledger.retrieve_feed("Bobby").unwrap().is_empty());
    }

    #[test]
    fn test_balance_path_never_touches_network() {
        let network = Rc::new(RecordingCardNetwork::default());
        let mut ledger = Ledger::new().with_card_network(Box::new(network.clone()));
        ledger
            .create_user("Bobby", Decimal::new(10_000, 2), Some("4111111111111111"))
            .unwrap();
        ledger.create_user("Carol", Decimal::ZERO, None).unwrap();

        ledger
            .pay("Bobby", "Carol", Decimal::new(100, 2), "Snack")
            .unwrap();

        assert!(network.charges.borrow().is_empty());
    }
}
