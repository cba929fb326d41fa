//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns entity state and processes
//! requests sequentially. It is the single holder of every cart: mutations, persistence and
//! rendering all happen inside its loop, one request at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor owns the `store` and the receiver end of the channel. Requests are handled one at a
/// time, so entity state needs no `Mutex` or `RwLock`: the event queue serializes every
/// interaction.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Operations
///
/// * **Create**: allocates the next `u32` ID, builds the entity with `from_create_params`,
///   runs `on_create`, then stores it.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` against the stored entity and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls wait
    /// until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "order_cart::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- A minimal counter entity, independent of the cart domain ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyOpen {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Reset,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally error: {0}")]
    struct TallyError(String);

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyOpen;
        type Action = TallyAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TallyError;

        fn from_create_params(id: u32, params: TallyOpen) -> Result<Self, Self::Error> {
            if params.label.is_empty() {
                return Err(TallyError("empty label".into()));
            }
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => self.count += 1,
                TallyAction::Reset => self.count = 0,
            }
            Ok(self.count)
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client.create(TallyOpen { label: "tabs".into() }).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 1);
        assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 2);

        let tally = client.get(id).await.unwrap().unwrap();
        assert_eq!(tally.count, 2);
        assert_eq!(tally.label, "tabs");

        assert_eq!(client.perform_action(id, TallyAction::Reset).await.unwrap(), 0);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_create_still_advances_id() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let first = client.create(TallyOpen { label: "a".into() }).await.unwrap();
        let failed = client.create(TallyOpen { label: String::new() }).await;
        assert!(matches!(failed, Err(FrameworkError::EntityError(_))));
        let second = client.create(TallyOpen { label: "b".into() }).await.unwrap();

        assert_eq!(first, 1);
        // The failed create still advanced the counter.
        assert_eq!(second, 3);
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let result = client.perform_action(42, TallyAction::Bump).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));

        let result = client.delete(42).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        drop(actor);

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
