//! Demonstrates the log events emitted by failing checks
//!
//! Run with: cargo run --example tracing_demo --features tracing

use stipulate::prelude::*;

#[derive(Debug, PartialEq)]
struct QuotaExceeded(String);

impl From<String> for QuotaExceeded {
    fn from(message: String) -> Self {
        QuotaExceeded(message)
    }
}

stipulate::message_exception!(QuotaExceeded);

fn reserve(requested: u32, available: u32) -> Result<u32, QuotaExceeded> {
    let quota = with_custom_exception::<QuotaExceeded>().map_err(|e| QuotaExceeded(e.to_string()))?;
    let granted = quota
        .requires_named(requested, "requested")
        .is_less_or_equal(available)?
        .into_inner();
    Ok(granted)
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    match requires_named("", "username").is_not_empty() {
        Ok(_) => tracing::info!("username accepted"),
        Err(e) => tracing::error!("username rejected: {}", e),
    }

    match reserve(12, 8) {
        Ok(granted) => tracing::info!("granted {} units", granted),
        Err(e) => tracing::error!("reservation failed: {:?}", e),
    }

    // Suppressed chains log the swallowed violation at debug level
    let v = ensures(None::<u64>).suppress().is_not_null();
    tracing::info!("suppressed chain result: {:?}", v.map(|v| v.into_inner()));
}
