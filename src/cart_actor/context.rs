use crate::checkout::{CheckoutSettings, MessagingSink};
use crate::storage::SessionStore;
use crate::view::CartSurface;
use std::sync::Arc;
use std::time::Duration;

/// Fixed parameters of the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    pub checkout: CheckoutSettings,
    /// How long the "Item added to order" notice stays up.
    pub notice_duration: Duration,
}

/// Collaborators handed to every cart hook by the actor loop.
#[derive(Clone)]
pub struct CartContext {
    pub store: Arc<dyn SessionStore>,
    pub surface: Arc<dyn CartSurface>,
    pub sink: Arc<dyn MessagingSink>,
    pub settings: CartSettings,
}

impl CartContext {
    pub fn currency(&self) -> &str {
        &self.settings.checkout.currency
    }
}
