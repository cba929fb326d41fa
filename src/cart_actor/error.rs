//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Checkout was requested with no items in the order.
    #[error("Your order is empty. Please add some items first.")]
    EmptyOrder,

    /// A populated order can only be cleared after confirmation.
    #[error("Clearing a populated order requires confirmation")]
    ConfirmationRequired,

    /// The configured destination could not be turned into a link.
    #[error("Invalid checkout link: {0}")]
    InvalidCheckoutLink(String),

    /// The cart (page view) is not open.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

impl From<crate::checkout::CheckoutError> for CartError {
    fn from(e: crate::checkout::CheckoutError) -> Self {
        match e {
            crate::checkout::CheckoutError::InvalidLink(msg) => CartError::InvalidCheckoutLink(msg),
        }
    }
}
