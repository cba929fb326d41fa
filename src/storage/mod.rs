//! Session-scoped key/value slots and the saved-order codec.
//!
//! The cart lives under the [`CART_KEY`] slot of its session as a JSON array of
//! `{name, price, portion, quantity}` records.
//!
//! The helpers [`load_order`], [`save_order`] and [`erase_order`] never fail: storage problems are
//! logged and the cart carries on with its in-memory state.

pub mod error;
pub mod file;
pub mod memory;

pub use error::*;
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::model::{LineItem, Order, SessionId};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Slot key holding the saved order.
pub const CART_KEY: &str = "cart";

/// A storage location tied to a browsing session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, session: &SessionId, key: &str, value: String) -> Result<(), StorageError>;

    async fn remove(&self, session: &SessionId, key: &str) -> Result<(), StorageError>;

    /// Discards every slot of the session.
    async fn end_session(&self, session: &SessionId) -> Result<(), StorageError>;
}

/// Serializes the line items of an order for the cart slot.
pub fn encode_items(items: &[LineItem]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(items)?)
}

/// Parses the cart slot and checks every order invariant.
pub fn decode_items(text: &str) -> Result<Vec<LineItem>, StorageError> {
    let items: Vec<LineItem> = serde_json::from_str(text)?;
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(StorageError::Malformed(format!("item {index} has no name")));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(StorageError::Malformed(format!(
                "item {index} has invalid price {}",
                item.price
            )));
        }
        if item.quantity < 1 {
            return Err(StorageError::Malformed(format!(
                "item {index} has quantity 0"
            )));
        }
    }
    Ok(items)
}

/// Reads the saved order of `session`.
///
/// An absent, unreadable or malformed slot yields an empty order.
pub async fn load_order(store: &dyn SessionStore, session: &SessionId) -> Order {
    let text = match store.get(session, CART_KEY).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(%session, "No saved order");
            return Order::new();
        }
        Err(e) => {
            warn!(%session, error = %e, "Saved order unreadable, starting empty");
            return Order::new();
        }
    };
    match decode_items(&text) {
        Ok(items) => {
            debug!(%session, items = items.len(), "Saved order restored");
            Order::from_items(items)
        }
        Err(e) => {
            warn!(%session, error = %e, "Saved order malformed, starting empty");
            Order::new()
        }
    }
}

/// Mirrors `order` into the cart slot of `session`.
pub async fn save_order(store: &dyn SessionStore, session: &SessionId, order: &Order) {
    let result = match encode_items(order.items()) {
        Ok(text) => store.set(session, CART_KEY, text).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        warn!(%session, error = %e, "Failed to save order");
    }
}

/// Erases the cart slot of `session`.
pub async fn erase_order(store: &dyn SessionStore, session: &SessionId) {
    if let Err(e) = store.remove(session, CART_KEY).await {
        warn!(%session, error = %e, "Failed to erase saved order");
    }
}
