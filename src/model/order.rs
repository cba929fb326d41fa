//! The in-progress customer order.
//!
//! [`Order`] is a plain value: every mutation is a method on `&mut Order` that recomputes the
//! total before returning. Persistence, rendering and notices are performed by the owner of the
//! value (see [`crate::cart_actor`]), never from here.

use crate::model::line_item::{LineItem, Portion};

/// Externally visible cart state, derived purely from emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    Populated,
}

/// Result of [`Order::set_quantity`] on a valid index.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    /// The item now has this quantity.
    Set(u32),
    /// The requested quantity was below 1 and the item was removed.
    Removed(LineItem),
}

/// Ordered sequence of line items (insertion order) plus the derived total.
///
/// Invariants:
/// - `total` equals the sum of `price * quantity` over `items`.
/// - every present item has `quantity >= 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<LineItem>,
    total: f64,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an order from previously persisted items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut order = Self { items, total: 0.0 };
        order.recompute_total();
        order
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities, as shown on the item-count badge. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    /// Adds one unit of `(name, price, portion)`.
    ///
    /// Returns the index of the line item that received the unit. A quantity already at
    /// `u32::MAX` stays there.
    pub fn add(&mut self, name: impl Into<String>, price: f64, portion: Portion) -> usize {
        let name = name.into();
        let index = match self
            .items
            .iter()
            .position(|item| item.is_same(&name, price, portion))
        {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(LineItem::new(name, price, portion));
                self.items.len() - 1
            }
        };
        self.recompute_total();
        index
    }

    /// Deletes the entry at `index`. Out-of-range indices leave the order untouched.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.recompute_total();
        Some(removed)
    }

    /// Overwrites the quantity at `index`; a quantity below 1 removes the item instead.
    ///
    /// Out-of-range indices leave the order untouched and return `None`.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Option<QuantityChange> {
        if quantity < 1 {
            return self.remove(index).map(QuantityChange::Removed);
        }
        let item = self.items.get_mut(index)?;
        item.quantity = quantity;
        self.recompute_total();
        Some(QuantityChange::Set(quantity))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    /// Replaces the whole sequence with restored items.
    pub fn restore(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(LineItem::line_total).sum();
    }
}
