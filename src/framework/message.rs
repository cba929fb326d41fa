//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::framework::ResourceClient) and
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The lifecycle variants (`Create`, `Get`, `Delete`) apply to any resource; everything
/// resource-specific travels as an `Action` carrying the entity's own command enum.
///
/// For a cart:
/// - **Create**: a page view opens and restores the session's saved order.
/// - **Get**: a snapshot of the cart (for rendering in a presentation adapter).
/// - **Delete**: the page view closes. The session slot is left in place.
/// - **Action**: one [`CartCommand`](crate::cart_actor::CartCommand).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
