//! Projection of an order to what the page shows, and the surfaces that show it.
//!
//! [`CartView::project`] is a pure function of the order. Every row carries the commands its
//! controls dispatch, so a surface that replaces all rows on each render also gets fresh
//! handlers for them.

pub mod html;
pub mod terminal;

pub use html::HtmlSurface;
pub use terminal::TerminalSurface;

use crate::cart_actor::CartCommand;
use crate::model::{CartState, Order, Portion};

/// Text shown in place of rows when the order has no items.
pub const EMPTY_ORDER_TEXT: &str = "Your order is empty";

/// Formats an amount with two decimals, e.g. `₹70.00`.
pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

/// Commands bound to the controls of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowControls {
    pub decrement: CartCommand,
    pub increment: CartCommand,
    pub remove: CartCommand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub index: usize,
    pub name: String,
    pub portion: Portion,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
    pub controls: RowControls,
}

impl CartRow {
    /// Name with portion label, e.g. `Paneer Tikka (Half)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.portion.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub item_count: u32,
    pub total: String,
    pub state: CartState,
}

impl CartView {
    pub fn project(order: &Order, currency: &str) -> Self {
        let rows = order
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                name: item.name.clone(),
                portion: item.portion,
                unit_price: format_price(item.price, currency),
                quantity: item.quantity,
                line_total: format_price(item.line_total(), currency),
                controls: RowControls {
                    decrement: CartCommand::SetQuantity {
                        index,
                        quantity: item.quantity.saturating_sub(1),
                    },
                    increment: CartCommand::SetQuantity {
                        index,
                        quantity: item.quantity.saturating_add(1),
                    },
                    remove: CartCommand::Remove { index },
                },
            })
            .collect();

        Self {
            rows,
            item_count: order.item_count(),
            total: format_price(order.total(), currency),
            state: order.state(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == CartState::Empty
    }

    /// Placeholder text shown instead of rows, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_ORDER_TEXT)
    }
}

/// Short messages raised by the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient confirmation after an add; dismissed by a timer.
    ItemAdded { name: String },
    /// Checkout refused; stays until the user acknowledges it.
    EmptyOrder,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::ItemAdded { .. } => "Item added to order",
            Notice::EmptyOrder => "Your order is empty. Please add some items first.",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::EmptyOrder)
    }
}

/// Write-only output of the cart: rows, badges, totals and notices.
pub trait CartSurface: Send + Sync {
    fn render(&self, view: &CartView);

    fn show_notice(&self, notice: &Notice);

    fn dismiss_notice(&self, _notice: &Notice) {}
}

/// Discards everything. Used when nothing is displayed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl CartSurface for NullSurface {
    fn render(&self, _view: &CartView) {}

    fn show_notice(&self, _notice: &Notice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_formats_rows_and_totals() {
        let mut order = Order::new();
        order.add("Paneer Tikka", 140.0, Portion::Half);
        order.add("Chai", 15.5, Portion::Full);
        order.add("Chai", 15.5, Portion::Full);

        let view = CartView::project(&order, "₹");

        assert_eq!(view.state, CartState::Populated);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "₹171.00");
        assert_eq!(view.rows.len(), 2);

        let chai = &view.rows[1];
        assert_eq!(chai.title(), "Chai (Full)");
        assert_eq!(chai.unit_price, "₹15.50");
        assert_eq!(chai.line_total, "₹31.00");
        assert_eq!(chai.quantity, 2);
    }

    #[test]
    fn test_row_controls_target_their_row() {
        let mut order = Order::new();
        order.add("Samosa", 20.0, Portion::Full);
        order.add("Lassi", 50.0, Portion::Full);

        let view = CartView::project(&order, "₹");
        let lassi = &view.rows[1].controls;
        assert_eq!(
            lassi.decrement,
            CartCommand::SetQuantity { index: 1, quantity: 0 }
        );
        assert_eq!(
            lassi.increment,
            CartCommand::SetQuantity { index: 1, quantity: 2 }
        );
        assert_eq!(lassi.remove, CartCommand::Remove { index: 1 });
    }

    #[test]
    fn test_project_large_quantities() {
        let mut order = Order::new();
        order.add("Samosa", 20.0, Portion::Full);
        order.add("Lassi", 50.0, Portion::Full);
        order.set_quantity(0, u32::MAX);

        let view = CartView::project(&order, "₹");
        assert_eq!(view.item_count, u32::MAX);
        assert_eq!(
            view.rows[0].controls.increment,
            CartCommand::SetQuantity {
                index: 0,
                quantity: u32::MAX
            }
        );
    }

    #[test]
    fn test_project_empty_order() {
        let view = CartView::project(&Order::new(), "₹");
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "₹0.00");
        assert_eq!(view.empty_message(), Some("Your order is empty"));
    }
}
