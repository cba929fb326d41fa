//! Commands accepted by an open cart.
//!
//! These are the operations the page's controls dispatch: the add button of a menu item, the
//! per-row quantity and remove controls, the clear button and the checkout button. They are
//! handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{LineItem, Portion};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Adds one unit; an existing `(name, price, portion)` entry gets its quantity bumped.
    Add {
        name: String,
        price: f64,
        portion: Portion,
    },
    /// Deletes the row at `index`.
    Remove { index: usize },
    /// Overwrites the quantity of the row at `index`. Zero removes the row.
    SetQuantity { index: usize, quantity: u32 },
    /// Empties the order. A populated order is only cleared once the user has confirmed.
    Clear { confirmed: bool },
    /// Hands the order to the messaging channel.
    Checkout,
}

/// Results from [`CartCommand`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum CartOutcome {
    /// The row that received the unit and its new quantity.
    Added { index: usize, quantity: u32 },
    Removed(LineItem),
    QuantitySet { index: usize, quantity: u32 },
    Cleared,
    /// The command referred to a row that does not exist, or there was nothing to clear.
    Unchanged,
    /// The deep link handed to the messaging sink.
    CheckedOut { url: Url },
}
