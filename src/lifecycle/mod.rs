//! Wiring and shutdown of the running system, plus logging setup.

pub mod cart_system;
pub mod tracing;

pub use cart_system::CartSystem;
pub use self::tracing::setup_tracing;
