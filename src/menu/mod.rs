//! Menu items and their price labels.
//!
//! A menu item carries its price as display text, either a single price (`₹120`) or a half/full
//! pair (`₹40 / ₹70`). [`parse_price`] turns that text into a [`MenuPrice`].

pub mod portion;
pub mod scanner;

pub use portion::*;
pub use scanner::{MenuScanner, ScanError};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

lazy_static::lazy_static! {
    static ref PRICE_TOKEN: Regex = Regex::new(r"[\d.]+").unwrap();
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Price text {0:?} has no usable amount")]
    UnparseablePrice(String),

    #[error("No menu item matches {0:?}")]
    UnknownItem(String),

    #[error("Failed to read menu: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed menu: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One entry of the menu source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(rename = "price")]
    pub price_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            category: None,
        }
    }

    pub fn price(&self) -> Result<MenuPrice, MenuError> {
        parse_price(&self.price_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuPrice {
    Single(f64),
    HalfFull { half: f64, full: f64 },
}

/// Parses a price label.
///
/// With at least two numeric runs, the first is the half price and the second the full price; the
/// label is a half/full pair only if it contains `/`, otherwise the second run is the single
/// price. With fewer runs the price is every digit and `.` of the label.
pub fn parse_price(text: &str) -> Result<MenuPrice, MenuError> {
    let tokens: Vec<&str> = PRICE_TOKEN.find_iter(text).map(|m| m.as_str()).collect();

    if tokens.len() >= 2 {
        let full = parse_amount(tokens[1], text)?;
        if !text.contains('/') {
            return Ok(MenuPrice::Single(full));
        }
        let half = parse_amount(tokens[0], text)?;
        return Ok(MenuPrice::HalfFull { half, full });
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_amount(&cleaned, text).map(MenuPrice::Single)
}

fn parse_amount(token: &str, text: &str) -> Result<f64, MenuError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| MenuError::UnparseablePrice(text.to_string()))
}

/// The menu in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Reads a JSON array of `{ "name", "price", "category" }` objects.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let items: Vec<MenuItem> = serde_json::from_str(&text)?;
        debug!(path = %path.display(), items = items.len(), "Menu loaded");
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Resolves `query` as a 1-based listing number, or else a case-insensitive name.
    pub fn find(&self, query: &str) -> Result<&MenuItem, MenuError> {
        let query = query.trim();
        let by_number = query
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.items.get(index));

        by_number
            .or_else(|| {
                self.items
                    .iter()
                    .find(|item| item.name.eq_ignore_ascii_case(query))
            })
            .ok_or_else(|| MenuError::UnknownItem(query.to_string()))
    }
}
