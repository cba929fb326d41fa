use crate::cart_actor::CartContext;
use crate::clients::CartClient;
use crate::model::SessionId;
use crate::storage::StorageError;
use tracing::{error, info};

/// The runtime orchestrator for the cart.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the cart actor
/// - **Dependency Wiring**: Handing the session store, surface and messaging sink to the actor
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(context);
///
/// let cart = system.cart_client.open(SessionId::from("default")).await?;
/// system.cart_client.add(cart, "Veg Biryani", 120.0, Portion::Full).await?;
/// system.cart_client.close(cart).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    context: CartContext,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Spawns the cart actor with `context` injected.
    pub fn new(context: CartContext) -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let handle = tokio::spawn(cart_actor.run(context.clone()));

        Self {
            cart_client,
            context,
            handle,
        }
    }

    /// Ends a browsing session, discarding every slot it saved.
    pub async fn end_session(&self, session: &SessionId) -> Result<(), StorageError> {
        self.context.store.end_session(session).await?;
        info!(%session, "Session ended");
        Ok(())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor drains what is queued, logs its final
    /// state and exits. Fails only if the actor task panicked.
    ///
    /// Clones of the client held elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
