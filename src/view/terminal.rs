use crate::view::{CartSurface, CartView, Notice, EMPTY_ORDER_TEXT};
use console::style;
use std::sync::Mutex;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Renders the cart as a table. Rows are numbered from 1.
pub fn format_cart_table(view: &CartView) -> String {
    if view.is_empty() {
        return style(EMPTY_ORDER_TEXT).dim().to_string();
    }

    let rows: Vec<CartTableRow> = view
        .rows
        .iter()
        .map(|row| CartTableRow {
            row: row.index + 1,
            item: row.title(),
            price: row.unit_price.clone(),
            quantity: row.quantity,
            amount: row.line_total.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    format!(
        "{}\n{}: {}   {}: {}",
        table,
        style("Items").bold(),
        view.item_count,
        style("Total").bold(),
        style(&view.total).green()
    )
}

/// Terminal surface for the command line front end.
///
/// Notices print immediately on stderr. The cart itself is printed once, on [`print`](Self::print),
/// from the most recent render.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    latest: Mutex<Option<CartView>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<CartView> {
        self.latest.lock().ok().and_then(|view| view.clone())
    }

    pub fn print(&self) {
        if let Some(view) = self.latest() {
            println!("{}", format_cart_table(&view));
        }
    }
}

impl CartSurface for TerminalSurface {
    fn render(&self, view: &CartView) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(view.clone());
        }
    }

    fn show_notice(&self, notice: &Notice) {
        if notice.is_blocking() {
            eprintln!("{} {}", style("!").red().bold(), style(notice.text()).red());
        } else {
            eprintln!("{} {}", style("✓").green(), notice.text());
        }
    }
}
