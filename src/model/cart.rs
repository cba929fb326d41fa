//! Cart entity and its identifiers.

use crate::model::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for an open cart (one per page view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Token naming a browsing session. All page views of a session share one saved order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for SessionId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cart open in one page view of a browsing session.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Cart`](#impl-ActorEntity-for-Cart) for details on:
/// - Creation parameters ([`CartOpen`])
/// - Commands ([`CartCommand`](crate::cart_actor::CartCommand))
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub session: SessionId,
    pub order: Order,
}

/// Payload for opening a cart in a new page view.
#[derive(Debug, Clone)]
pub struct CartOpen {
    pub session: SessionId,
}

impl Cart {
    /// Creates an empty cart. The saved order is restored by the actor's `on_create` hook.
    pub fn new(id: CartId, session: SessionId) -> Self {
        Self {
            id,
            session,
            order: Order::new(),
        }
    }
}
