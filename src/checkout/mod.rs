//! Order hand-off to the chat channel.
//!
//! The order is summarized as a plain-text message, percent-encoded the way a browser's
//! `encodeURIComponent` does, and appended to a deep link for the destination number. Delivery is
//! not observed: the link is handed to a [`MessagingSink`] and forgotten.

pub mod sink;

pub use sink::*;

use crate::model::Order;
use crate::view::format_price;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use url::Url;

/// Characters left as-is by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Invalid checkout link: {0}")]
    InvalidLink(String),
}

/// Fixed parts of the hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSettings {
    /// Addressed in the greeting line.
    pub restaurant_name: String,
    /// Chat destination, digits only.
    pub destination: String,
    /// Deep-link base, e.g. `https://wa.me/`.
    pub messaging_base: Url,
    pub currency: String,
}

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Human-readable summary of the order.
pub fn order_message(order: &Order, settings: &CheckoutSettings) -> String {
    let currency = settings.currency.as_str();
    let mut message = format!(
        "Hello {},\n\nI would like to order:\n\n",
        settings.restaurant_name
    );

    for item in order.items() {
        message.push_str(&format!(
            "{} ({}) - {} x {} = {}\n",
            item.name,
            item.portion.label(),
            item.quantity,
            format_price(item.price, currency),
            format_price(item.line_total(), currency),
        ));
    }

    message.push_str(&format!(
        "\nTotal: {}\n\n",
        format_price(order.total(), currency)
    ));
    message.push_str("My delivery address is: \n");
    message.push_str("My contact number is: \n\n");
    message.push_str("Thank you!");
    message
}

/// The order summary, URL-safe encoded.
pub fn format_order_message(order: &Order, settings: &CheckoutSettings) -> String {
    encode_uri_component(&order_message(order, settings))
}

/// Deep link `{base}{destination}?text={message}`.
pub fn checkout_url(order: &Order, settings: &CheckoutSettings) -> Result<Url, CheckoutError> {
    let mut url = settings
        .messaging_base
        .join(&settings.destination)
        .map_err(|e| CheckoutError::InvalidLink(e.to_string()))?;
    url.set_query(Some(&format!(
        "text={}",
        format_order_message(order, settings)
    )));
    Ok(url)
}
