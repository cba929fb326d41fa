use crate::cart_actor::{CartError, CartOutcome};
use crate::clients::CartClient;
use crate::menu::{Menu, MenuError, MenuItem, MenuPrice, PortionSelector};
use crate::model::{CartId, Portion};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Routes "add" on a menu item into the cart, asking for a portion where the item has two.
pub struct MenuScanner {
    menu: Menu,
    client: CartClient,
}

impl MenuScanner {
    pub fn new(menu: Menu, client: CartClient) -> Self {
        Self { menu, client }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn find(&self, query: &str) -> Result<&MenuItem, MenuError> {
        self.menu.find(query)
    }

    /// Adds one unit of `item` to `cart`.
    ///
    /// Returns `Ok(None)` when the portion choice was dismissed.
    #[instrument(skip(self, item, selector), fields(item = %item.name))]
    pub async fn add_to_cart(
        &self,
        cart: CartId,
        item: &MenuItem,
        selector: &dyn PortionSelector,
    ) -> Result<Option<CartOutcome>, ScanError> {
        let (price, portion) = match item.price()? {
            MenuPrice::Single(price) => (price, Portion::Full),
            MenuPrice::HalfFull { half, full } => match selector.choose(item, half, full) {
                Some(Portion::Half) => (half, Portion::Half),
                Some(Portion::Full) => (full, Portion::Full),
                None => {
                    debug!("Portion choice dismissed");
                    return Ok(None);
                }
            },
        };

        let outcome = self
            .client
            .add(cart, item.name.clone(), price, portion)
            .await?;
        Ok(Some(outcome))
    }
}
