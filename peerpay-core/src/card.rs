//! Card-network collaborator seam
//!
//! A real integration would authorize the charge remotely and surface
//! declines; the in-scope implementation performs no action and cannot fail.

use rust_decimal::Decimal;
use std::fmt;

/// External card network
///
/// Receives the charge for a card-funded payment. The money credited to the
/// target enters the system from here, which is why the actor's balance is
/// never decremented on the card path.
pub trait CardNetwork: fmt::Debug {
    /// Charge `amount` against `card_number`
    fn charge(&self, card_number: &str, amount: Decimal);
}

/// No-op card network that authorizes every charge
#[derive(Debug, Default)]
pub struct NullCardNetwork;

impl CardNetwork for NullCardNetwork {
    fn charge(&self, card_number: &str, amount: Decimal) {
        tracing::debug!(card = %mask(card_number), amount = %amount, "card charge authorized");
    }
}

/// Mask a card number down to its last four digits for logging
fn mask(card_number: &str) -> String {
    match card_number.char_indices().nth_back(3) {
        Some((idx, _)) if idx > 0 => format!("****{}", &card_number[idx..]),
        _ => card_number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask("4111111111111111"), "****1111");
        assert_eq!(mask("4242424242424242"), "****4242");
        assert_eq!(mask("42"), "42");
    }

    #[test]
    fn test_null_network_accepts_any_charge() {
        NullCardNetwork.charge("4111111111111111", Decimal::new(1500, 2));
    }
}
