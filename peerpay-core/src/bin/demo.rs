//! PeerPay walkthrough binary
//!
//! Creates two users, performs a balance-funded and a card-funded payment,
//! renders one user's feed, adds a friendship, and renders again.

use anyhow::Result;
use peerpay_core::{render_feed, Ledger};
use rust_decimal::Decimal;
use std::io;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut ledger = Ledger::new();
    ledger.create_user("Bobby", Decimal::new(500, 2), Some("4111111111111111"))?;
    ledger.create_user("Carol", Decimal::new(1000, 2), Some("4242424242424242"))?;

    println!("# Doing some payments");

    // Completes from balance
    ledger.pay("Bobby", "Carol", Decimal::new(500, 2), "Coffee")?;

    // Completes via card
    ledger.pay("Carol", "Bobby", Decimal::new(1500, 2), "Lunch")?;

    render_feed(&mut io::stdout(), ledger.retrieve_feed("Bobby")?)?;

    println!("\n# Adding a new friend");
    ledger.add_friend("Bobby", "Carol")?;
    render_feed(&mut io::stdout(), ledger.retrieve_feed("Bobby")?)?;

    Ok(())
}
