//! Cart-specific resource logic: restoring, mutating and checking out the order of a page view.

mod actions;
mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = CartClient::new(generic_client);

    (actor, client)
}
