//! Markup rendering for the cart sidebar of the menu page.
//!
//! The widget has three write-only regions: the `.cart-items` list, every `.cart-count` badge,
//! and the `.total-price` text. Rows are replaced wholesale on each render.

use crate::view::{CartRow, CartSurface, CartView, Notice, EMPTY_ORDER_TEXT};
use std::fmt::Write;
use std::sync::Mutex;

/// Current contents of the cart regions of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlDocument {
    pub cart_items: String,
    pub cart_count: String,
    pub total_price: String,
    pub notice: Option<String>,
}

/// Escapes text for use inside element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_row(out: &mut String, row: &CartRow) {
    let index = row.index;
    let _ = write!(
        out,
        concat!(
            r#"<div class="cart-item">"#,
            r#"<div class="cart-item-info">"#,
            r#"<div class="cart-item-name">{title}</div>"#,
            r#"<div class="cart-item-price">{price}</div>"#,
            r#"<div class="cart-item-quantity">"#,
            r#"<button class="quantity-btn minus" data-index="{index}">-</button>"#,
            r#"<input type="text" class="quantity-value" value="{quantity}" readonly>"#,
            r#"<button class="quantity-btn plus" data-index="{index}">+</button>"#,
            r#"</div>"#,
            r#"</div>"#,
            r#"<button class="remove-item" data-index="{index}"><i class="fas fa-trash"></i></button>"#,
            r#"</div>"#,
        ),
        title = escape_html(&row.title()),
        price = escape_html(&row.unit_price),
        index = index,
        quantity = row.quantity,
    );
}

/// Inner markup of the `.cart-items` container.
pub fn render_items(view: &CartView) -> String {
    if view.is_empty() {
        return format!(r#"<div class="empty-cart">{EMPTY_ORDER_TEXT}</div>"#);
    }
    let mut out = String::new();
    for row in &view.rows {
        render_row(&mut out, row);
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::ItemAdded { .. } => format!(
            r#"<div class="cart-notification show"><i class="fas fa-check-circle"></i> {}</div>"#,
            notice.text()
        ),
        Notice::EmptyOrder => format!(r#"<div class="cart-alert">{}</div>"#, notice.text()),
    }
}

pub fn render_document(view: &CartView) -> HtmlDocument {
    HtmlDocument {
        cart_items: render_items(view),
        cart_count: view.item_count.to_string(),
        total_price: escape_html(&view.total),
        notice: None,
    }
}

/// Keeps the latest rendered regions in memory for an embedding page to pick up.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    document: Mutex<HtmlDocument>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> HtmlDocument {
        self.document
            .lock()
            .map(|doc| doc.clone())
            .unwrap_or_default()
    }
}

impl CartSurface for HtmlSurface {
    fn render(&self, view: &CartView) {
        if let Ok(mut doc) = self.document.lock() {
            let notice = doc.notice.take();
            *doc = render_document(view);
            doc.notice = notice;
        }
    }

    fn show_notice(&self, notice: &Notice) {
        if let Ok(mut doc) = self.document.lock() {
            doc.notice = Some(render_notice(notice));
        }
    }

    fn dismiss_notice(&self, notice: &Notice) {
        if let Ok(mut doc) = self.document.lock() {
            if doc.notice.as_deref() == Some(render_notice(notice).as_str()) {
                doc.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, Portion};

    #[test]
    fn test_row_markup_carries_row_index() {
        let mut order = Order::new();
        order.add("Samosa", 20.0, Portion::Full);
        order.add("Paneer Tikka", 140.0, Portion::Half);
        let html = render_items(&CartView::project(&order, "₹"));

        assert_eq!(html.matches(r#"class="cart-item""#).count(), 2);
        assert!(html.contains(r#"<div class="cart-item-name">Paneer Tikka (Half)</div>"#));
        assert!(html.contains(r#"<div class="cart-item-price">₹140.00</div>"#));
        assert!(html.contains(r#"<button class="quantity-btn plus" data-index="1">+</button>"#));
        assert!(html.contains(r#"<button class="remove-item" data-index="0">"#));
    }

    #[test]
    fn test_empty_markup() {
        let html = render_items(&CartView::project(&Order::new(), "₹"));
        assert_eq!(html, r#"<div class="empty-cart">Your order is empty</div>"#);
    }

    #[test]
    fn test_names_are_escaped() {
        let mut order = Order::new();
        order.add("<b>Chef's</b> Special", 99.0, Portion::Full);
        let html = render_items(&CartView::project(&order, "₹"));
        assert!(html.contains("&lt;b&gt;Chef&#39;s&lt;/b&gt; Special (Full)"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_surface_tracks_badge_total_and_notice() {
        let surface = HtmlSurface::new();
        let mut order = Order::new();
        order.add("Chai", 15.0, Portion::Full);
        order.add("Chai", 15.0, Portion::Full);

        let notice = Notice::ItemAdded { name: "Chai".into() };
        surface.show_notice(&notice);
        surface.render(&CartView::project(&order, "₹"));

        let doc = surface.document();
        assert_eq!(doc.cart_count, "2");
        assert_eq!(doc.total_price, "₹30.00");
        assert!(doc.notice.as_deref().unwrap().contains("Item added to order"));

        surface.dismiss_notice(&notice);
        assert_eq!(surface.document().notice, None);
    }
}
