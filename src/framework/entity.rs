//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource must satisfy to be owned by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). It names the ID, creation payload, command
//! set, context and error types, and provides the lifecycle hooks (`on_create`, `on_delete`,
//! `handle_action`).
//!
//! In this crate the only resource is the [`Cart`](crate::model::Cart): one entity per open page
//! view, created with a session token and driven by [`CartCommand`](crate::cart_actor::CartCommand).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await their side effects (session storage,
/// timers). The `Context` type is injected into every hook at `run()` time, which keeps the
/// entity free of any concrete storage or rendering dependency.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Add`, `Checkout`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every action of the entity; clients match on it directly.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the actor.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
