use crate::menu::MenuItem;
use crate::model::Portion;
use crate::view::format_price;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::warn;

/// Chooses between the half and full portion of an item.
///
/// `None` means the choice was dismissed and nothing is added.
pub trait PortionSelector: Send + Sync {
    fn choose(&self, item: &MenuItem, half: f64, full: f64) -> Option<Portion>;
}

/// Always picks the same portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPortion(pub Portion);

impl PortionSelector for FixedPortion {
    fn choose(&self, _item: &MenuItem, _half: f64, _full: f64) -> Option<Portion> {
        Some(self.0)
    }
}

/// Asks on the terminal. Escape dismisses.
#[derive(Debug, Clone)]
pub struct PromptSelector {
    currency: String,
}

impl PromptSelector {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn labels(&self, half: f64, full: f64) -> [String; 2] {
        [
            format!("Half - {}", format_price(half, &self.currency)),
            format!("Full - {}", format_price(full, &self.currency)),
        ]
    }
}

impl PortionSelector for PromptSelector {
    fn choose(&self, item: &MenuItem, half: f64, full: f64) -> Option<Portion> {
        let theme = ColorfulTheme::default();
        let selection = Select::with_theme(&theme)
            .with_prompt(format!("Select portion for {}", item.name))
            .items(&self.labels(half, full))
            .default(1)
            .interact_opt();

        match selection {
            Ok(Some(0)) => Some(Portion::Half),
            Ok(Some(_)) => Some(Portion::Full),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Portion prompt failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_labels_show_both_prices() {
        let selector = PromptSelector::new("₹");
        assert_eq!(
            selector.labels(40.0, 70.0),
            ["Half - ₹40.00".to_string(), "Full - ₹70.00".to_string()]
        );
    }
}
