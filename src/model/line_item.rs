use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Serving size of a line item.
///
/// Items that offer no portion choice are recorded as [`Portion::Full`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Half,
    #[default]
    Full,
}

impl Portion {
    /// Label shown next to the item name, e.g. `Paneer Tikka (Half)`.
    pub fn label(&self) -> &'static str {
        match self {
            Portion::Half => "Half",
            Portion::Full => "Full",
        }
    }
}

impl Display for Portion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a portion tag is neither `half` nor `full`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown portion: {0}")]
pub struct UnknownPortion(pub String);

impl FromStr for Portion {
    type Err = UnknownPortion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" => Ok(Portion::Half),
            "full" => Ok(Portion::Full),
            _ => Err(UnknownPortion(s.to_string())),
        }
    }
}

/// One entry in the order.
///
/// Identity is value based: two additions are the same line item when `name`, `price` and
/// `portion` all match. The same dish at two prices is two line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub portion: Portion,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item with quantity 1.
    pub fn new(name: impl Into<String>, price: f64, portion: Portion) -> Self {
        Self {
            name: name.into(),
            price,
            portion,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn is_same(&self, name: &str, price: f64, portion: Portion) -> bool {
        self.name == name && self.price == price && self.portion == portion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_serializes_lowercase() {
        let item = LineItem::new("Dal Makhani", 90.0, Portion::Half);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Dal Makhani","price":90.0,"portion":"half","quantity":1}"#
        );
    }

    #[test]
    fn test_portion_from_str() {
        assert_eq!("half".parse::<Portion>(), Ok(Portion::Half));
        assert_eq!(" FULL ".parse::<Portion>(), Ok(Portion::Full));
        assert!("quarter".parse::<Portion>().is_err());
    }

    #[test]
    fn test_identity_includes_price() {
        let item = LineItem::new("Chai", 15.0, Portion::Full);
        assert!(item.is_same("Chai", 15.0, Portion::Full));
        assert!(!item.is_same("Chai", 10.0, Portion::Full));
        assert!(!item.is_same("Chai", 15.0, Portion::Half));
    }
}
