//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used across the crate. Output goes to stderr,
//! so the cart rendering on stdout stays clean.
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` with `--verbose`.
//! The compact format hides the module prefix (`with_target(false)`); entries carry the cart id
//! and session as fields instead.
//!
//! ```bash
//! # Commands and their outcomes
//! RUST_LOG=info order-cart add "Veg Biryani"
//!
//! # Full command payloads as they enter the actor
//! RUST_LOG=debug order-cart add "Veg Biryani"
//!
//! # Only the actor plumbing
//! RUST_LOG=order_cart::framework=debug order-cart show
//! ```
//!
//! ## What Gets Traced
//!
//! With `RUST_LOG=debug` an add shows up as:
//!
//! ```text
//! DEBUG Create params=CartOpen { session: SessionId("default") }
//! INFO Cart opened cart=cart_1 session=default items=2
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! DEBUG Action entity_type="Cart" id=cart_1 action=Add { name: "Veg Biryani", price: 120.0, portion: Full }
//! INFO Action ok entity_type="Cart" id=cart_1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
pub fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding binaries).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // entity ids are logged as fields instead
        .compact()
        .try_init();
}
