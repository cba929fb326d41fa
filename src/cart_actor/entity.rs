//! Entity trait implementation for the Cart domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Cart`] to be
//! managed by the generic [`crate::framework::ResourceActor`]. Every mutating command leaves the
//! order, the session slot and the surface consistent before the actor answers.
//!
//! See the trait implementation on [`Cart`] for method documentation.

use super::actions::{CartCommand, CartOutcome};
use super::context::CartContext;
use super::error::CartError;
use crate::checkout::checkout_url;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartId, CartOpen, Portion, QuantityChange};
use crate::storage::{erase_order, load_order, save_order};
use crate::view::{CartView, Notice};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartOpen;
    type Action = CartCommand;
    type ActionResult = CartOutcome;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartOpen) -> Result<Self, CartError> {
        Ok(Self::new(id, params.session))
    }

    /// Restores the saved order of the session and renders it.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        self.order = load_order(ctx.store.as_ref(), &self.session).await;
        info!(
            cart = %self.id,
            session = %self.session,
            items = self.order.len(),
            "Cart opened"
        );
        self.render(ctx);
        Ok(())
    }

    /// Page unload. The session slot outlives the page view.
    async fn on_delete(&self, _ctx: &CartContext) -> Result<(), CartError> {
        debug!(cart = %self.id, session = %self.session, "Cart closed");
        Ok(())
    }

    /// Handles cart commands.
    ///
    /// # Commands
    /// - `Add`: bumps or appends a row, saves, renders and raises the transient notice
    /// - `Remove` / `SetQuantity`: `Unchanged` for a row that does not exist
    /// - `Clear`: erases the saved slot; a populated order needs `confirmed`
    /// - `Checkout`: refuses an empty order, otherwise hands the deep link to the sink
    async fn handle_action(
        &mut self,
        action: CartCommand,
        ctx: &CartContext,
    ) -> Result<CartOutcome, CartError> {
        match action {
            CartCommand::Add {
                name,
                price,
                portion,
            } => Ok(self.add(name, price, portion, ctx).await),
            CartCommand::Remove { index } => match self.order.remove(index) {
                Some(item) => {
                    self.commit(ctx).await;
                    Ok(CartOutcome::Removed(item))
                }
                None => {
                    debug!(cart = %self.id, index, "Remove of missing row ignored");
                    Ok(CartOutcome::Unchanged)
                }
            },
            CartCommand::SetQuantity { index, quantity } => {
                match self.order.set_quantity(index, quantity) {
                    Some(change) => {
                        self.commit(ctx).await;
                        Ok(match change {
                            QuantityChange::Set(quantity) => {
                                CartOutcome::QuantitySet { index, quantity }
                            }
                            QuantityChange::Removed(item) => CartOutcome::Removed(item),
                        })
                    }
                    None => {
                        debug!(cart = %self.id, index, "Quantity change of missing row ignored");
                        Ok(CartOutcome::Unchanged)
                    }
                }
            }
            CartCommand::Clear { confirmed } => {
                if self.order.is_empty() {
                    return Ok(CartOutcome::Unchanged);
                }
                if !confirmed {
                    return Err(CartError::ConfirmationRequired);
                }
                self.order.clear();
                erase_order(ctx.store.as_ref(), &self.session).await;
                self.render(ctx);
                Ok(CartOutcome::Cleared)
            }
            CartCommand::Checkout => {
                if self.order.is_empty() {
                    ctx.surface.show_notice(&Notice::EmptyOrder);
                    return Err(CartError::EmptyOrder);
                }
                let url = checkout_url(&self.order, &ctx.settings.checkout)?;
                info!(
                    cart = %self.id,
                    items = self.order.len(),
                    total = self.order.total(),
                    "Checking out"
                );
                ctx.sink.open(&url);
                Ok(CartOutcome::CheckedOut { url })
            }
        }
    }
}

impl Cart {
    async fn add(
        &mut self,
        name: String,
        price: f64,
        portion: Portion,
        ctx: &CartContext,
    ) -> CartOutcome {
        let notice = Notice::ItemAdded { name: name.clone() };
        let index = self.order.add(name, price, portion);
        let quantity = self.order.items()[index].quantity;
        self.commit(ctx).await;
        announce(ctx, notice);
        CartOutcome::Added { index, quantity }
    }

    /// Saves and re-renders after a mutation.
    async fn commit(&self, ctx: &CartContext) {
        save_order(ctx.store.as_ref(), &self.session, &self.order).await;
        self.render(ctx);
    }

    fn render(&self, ctx: &CartContext) {
        ctx.surface
            .render(&CartView::project(&self.order, ctx.currency()));
    }
}

/// Shows `notice` and dismisses it after the configured duration.
///
/// The timer is never cancelled; a later notice does not extend an earlier one.
fn announce(ctx: &CartContext, notice: Notice) {
    ctx.surface.show_notice(&notice);
    let surface = ctx.surface.clone();
    let duration = ctx.settings.notice_duration;
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        surface.dismiss_notice(&notice);
    });
}
