//! Demonstrates tracing integration with validation sessions
//!
//! Run with: cargo run --example tracing_demo --features tracing

use sentinel::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let signup = all([is_required(), is_email(), has_max_length(254)]);
    for subject in ["johndoe@example.com", "johndoe", ""] {
        let session = Session::new(subject, signup.clone());
        tracing::info!("{:?} valid: {}", subject, session.is_valid());
    }

    // The any group decides; the trailing rule is dropped
    let session = Session::new(36, [Rule::from(any([is_email(), is_greater_than(30)])), is_email()]);
    tracing::info!("leading group verdict: {}", session.is_valid());

    // Unresolvable entries fail closed with a warning
    let session = Session::new(36, [is_number(), Rule::Unresolvable]);
    tracing::info!("unresolvable verdict: {}", session.is_valid());
}
