//! Pure data structures: the order value and the cart entity that owns it.

pub mod cart;
pub mod line_item;
pub mod order;

pub use cart::*;
pub use line_item::*;
pub use order::*;
