use crate::cart_actor::{CartCommand, CartError, CartOutcome};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartId, CartOpen, Order, Portion, SessionId};
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

/// Client for interacting with the Cart actor.
///
/// Each `open` corresponds to a page load of a session; `close` to unloading it.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    /// Opens a cart for a new page view, restoring the session's saved order.
    #[instrument(skip(self))]
    pub async fn open(&self, session: SessionId) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartOpen { session })
            .await
            .map_err(Self::map_error)
    }

    /// Closes the page view. The saved order stays in the session.
    pub async fn close(&self, id: CartId) -> Result<(), CartError> {
        self.delete(id).await
    }

    /// Current order of an open cart.
    pub async fn snapshot(&self, id: CartId) -> Result<Order, CartError> {
        self.get(id)
            .await?
            .map(|cart| cart.order)
            .ok_or_else(|| CartError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn dispatch(
        &self,
        id: CartId,
        command: CartCommand,
    ) -> Result<CartOutcome, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, command)
            .await
            .map_err(Self::map_error)
    }

    pub async fn add(
        &self,
        id: CartId,
        name: impl Into<String>,
        price: f64,
        portion: Portion,
    ) -> Result<CartOutcome, CartError> {
        let command = CartCommand::Add {
            name: name.into(),
            price,
            portion,
        };
        self.dispatch(id, command).await
    }

    pub async fn remove(&self, id: CartId, index: usize) -> Result<CartOutcome, CartError> {
        self.dispatch(id, CartCommand::Remove { index }).await
    }

    pub async fn set_quantity(
        &self,
        id: CartId,
        index: usize,
        quantity: u32,
    ) -> Result<CartOutcome, CartError> {
        self.dispatch(id, CartCommand::SetQuantity { index, quantity })
            .await
    }

    pub async fn clear(&self, id: CartId, confirmed: bool) -> Result<CartOutcome, CartError> {
        self.dispatch(id, CartCommand::Clear { confirmed }).await
    }

    /// Hands the order to the messaging sink and returns the link it received.
    pub async fn checkout(&self, id: CartId) -> Result<Url, CartError> {
        match self.dispatch(id, CartCommand::Checkout).await? {
            CartOutcome::CheckedOut { url } => Ok(url),
            other => Err(CartError::ActorCommunicationError(format!(
                "unexpected checkout outcome: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};

    #[tokio::test]
    async fn test_open_sends_session() {
        let (inner, mut receiver) = create_mock_client::<Cart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.open(SessionId::from("tab-1")).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.session, SessionId::from("tab-1"));
        responder.send(Ok(CartId(1))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(CartId(1)));
    }

    #[tokio::test]
    async fn test_add_builds_command() {
        let (inner, mut receiver) = create_mock_client::<Cart>(10);
        let client = CartClient::new(inner);

        let task =
            tokio::spawn(async move { client.add(CartId(1), "Chai", 15.0, Portion::Full).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        assert_eq!(
            action,
            CartCommand::Add {
                name: "Chai".into(),
                price: 15.0,
                portion: Portion::Full
            }
        );
        responder
            .send(Ok(CartOutcome::Added {
                index: 0,
                quantity: 1,
            }))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Ok(CartOutcome::Added {
                index: 0,
                quantity: 1
            })
        );
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1))
            .return_err(FrameworkError::EntityError(Box::new(CartError::EmptyOrder)));
        mock.expect_action(CartId(9))
            .return_err(FrameworkError::NotFound("cart_9".into()));

        let client = CartClient::new(mock.client());
        assert_eq!(client.checkout(CartId(1)).await, Err(CartError::EmptyOrder));
        assert_eq!(
            client.checkout(CartId(9)).await,
            Err(CartError::NotFound("cart_9".into()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_snapshot_of_closed_cart_is_not_found() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get(CartId(4)).return_ok(None);

        let client = CartClient::new(mock.client());
        assert_eq!(
            client.snapshot(CartId(4)).await,
            Err(CartError::NotFound("cart_4".into()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (inner, receiver) = create_mock_client::<Cart>(10);
        drop(receiver);
        let client = CartClient::new(inner);

        let result = client.remove(CartId(1), 0).await;
        assert!(matches!(result, Err(CartError::ActorCommunicationError(_))));
    }
}
