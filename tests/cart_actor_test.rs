mod common;

use common::{context, RecordingSink, RecordingSurface};
use order_cart::cart_actor::{CartCommand, CartError, CartOutcome};
use order_cart::clients::actor_client::ActorClient;
use order_cart::model::{CartId, CartState, Portion, SessionId};
use order_cart::storage::{MemorySessionStore, SessionStore, CART_KEY};
use order_cart::view::Notice;
use std::sync::Arc;

struct Harness {
    store: Arc<MemorySessionStore>,
    surface: Arc<RecordingSurface>,
    sink: Arc<RecordingSink>,
    client: order_cart::clients::CartClient,
    handle: tokio::task::JoinHandle<()>,
}

fn start() -> Harness {
    let store = Arc::new(MemorySessionStore::new());
    let surface = Arc::new(RecordingSurface::default());
    let sink = Arc::new(RecordingSink::default());

    let (actor, client) = order_cart::cart_actor::new();
    let handle = tokio::spawn(actor.run(context(store.clone(), surface.clone(), sink.clone())));

    Harness {
        store,
        surface,
        sink,
        client,
        handle,
    }
}

fn session() -> SessionId {
    SessionId::from("tab-1")
}

/// The real Cart actor restores the saved order when a page view opens.
#[tokio::test]
async fn test_reload_restores_same_sequence() {
    let h = start();

    let first = h.client.open(session()).await.unwrap();
    h.client.add(first, "Paneer Tikka", 140.0, Portion::Half).await.unwrap();
    h.client.add(first, "Butter Naan", 35.0, Portion::Full).await.unwrap();
    let before = h.client.snapshot(first).await.unwrap();
    h.client.close(first).await.unwrap();

    let second = h.client.open(session()).await.unwrap();
    assert_ne!(first, second);
    let after = h.client.snapshot(second).await.unwrap();
    assert_eq!(after, before);
    assert_eq!(after.total(), 175.0);

    // The restore is rendered straight away.
    let view = h.surface.last_render().unwrap();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.total, "₹175.00");
}

#[tokio::test]
async fn test_clear_then_reload_is_empty() {
    let h = start();

    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Chai", 15.0, Portion::Full).await.unwrap();
    assert_eq!(
        h.client.clear(cart, true).await.unwrap(),
        CartOutcome::Cleared
    );
    assert_eq!(h.store.get(&session(), CART_KEY).await.unwrap(), None);
    h.client.close(cart).await.unwrap();

    let reopened = h.client.open(session()).await.unwrap();
    let order = h.client.snapshot(reopened).await.unwrap();
    assert!(order.is_empty());
    assert_eq!(h.surface.last_render().unwrap().state, CartState::Empty);
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();

    // Nothing to clear.
    assert_eq!(
        h.client.clear(cart, false).await.unwrap(),
        CartOutcome::Unchanged
    );

    h.client.add(cart, "Chai", 15.0, Portion::Full).await.unwrap();
    assert_eq!(
        h.client.clear(cart, false).await,
        Err(CartError::ConfirmationRequired)
    );
    assert_eq!(h.client.snapshot(cart).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_checkout_is_refused_without_handoff() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();

    assert_eq!(h.client.checkout(cart).await, Err(CartError::EmptyOrder));
    assert!(h.sink.opened().is_empty());
    assert_eq!(h.surface.shown(), vec![Notice::EmptyOrder]);
}

#[tokio::test]
async fn test_checkout_hands_link_to_sink() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Item A", 70.0, Portion::Full).await.unwrap();
    h.client.add(cart, "Item A", 70.0, Portion::Full).await.unwrap();

    let url = h.client.checkout(cart).await.unwrap();
    assert_eq!(h.sink.opened(), vec![url.clone()]);
    assert_eq!(url.path(), "/918447830914");

    let text = url
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .unwrap();
    assert!(text.contains("Item A (Full) - 2 x ₹70.00 = ₹140.00\n"));
    assert!(text.contains("\nTotal: ₹140.00\n"));

    // Checkout leaves the order alone.
    assert_eq!(h.client.snapshot(cart).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_every_mutation_persists_and_renders() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    let renders = h.surface.render_count();

    h.client.add(cart, "Samosa", 20.0, Portion::Full).await.unwrap();
    h.client.add(cart, "Dal", 40.0, Portion::Half).await.unwrap();
    assert_eq!(
        h.client.set_quantity(cart, 0, 3).await.unwrap(),
        CartOutcome::QuantitySet {
            index: 0,
            quantity: 3
        }
    );
    assert!(matches!(
        h.client.remove(cart, 1).await.unwrap(),
        CartOutcome::Removed(item) if item.name == "Dal"
    ));

    assert_eq!(h.surface.render_count(), renders + 4);
    let view = h.surface.last_render().unwrap();
    assert_eq!(view.item_count, 3);
    assert_eq!(view.total, "₹60.00");

    let saved = h.store.get(&session(), CART_KEY).await.unwrap().unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&saved).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Samosa");
    assert_eq!(items[0]["quantity"], 3);
}

#[tokio::test]
async fn test_bad_rows_change_nothing() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Samosa", 20.0, Portion::Full).await.unwrap();
    let renders = h.surface.render_count();

    assert_eq!(
        h.client.remove(cart, 5).await.unwrap(),
        CartOutcome::Unchanged
    );
    assert_eq!(
        h.client.set_quantity(cart, 5, 2).await.unwrap(),
        CartOutcome::Unchanged
    );
    assert_eq!(h.surface.render_count(), renders);
}

#[tokio::test]
async fn test_decrement_to_zero_removes_row() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Samosa", 20.0, Portion::Full).await.unwrap();

    let decrement = h.surface.last_render().unwrap().rows[0].controls.decrement.clone();
    assert_eq!(
        decrement,
        CartCommand::SetQuantity {
            index: 0,
            quantity: 0
        }
    );
    assert!(matches!(
        h.client.dispatch(cart, decrement).await.unwrap(),
        CartOutcome::Removed(_)
    ));
    assert!(h.client.snapshot(cart).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_added_notice_dismisses_itself() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Chai", 15.0, Portion::Full).await.unwrap();

    let added = Notice::ItemAdded {
        name: "Chai".into(),
    };
    assert_eq!(h.surface.shown(), vec![added.clone()]);

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(h.surface.dismissed(), vec![added]);
}

#[tokio::test]
async fn test_malformed_slot_opens_empty() {
    let h = start();
    h.store
        .set(&session(), CART_KEY, "{not json".into())
        .await
        .unwrap();

    let cart = h.client.open(session()).await.unwrap();
    assert!(h.client.snapshot(cart).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_cart_is_not_found() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.close(cart).await.unwrap();

    assert_eq!(h.client.get(cart).await.unwrap().map(|c| c.id), None::<CartId>);
    assert_eq!(
        h.client.checkout(cart).await,
        Err(CartError::NotFound(cart.to_string()))
    );
}

#[tokio::test]
async fn test_actor_stops_when_clients_drop() {
    let h = start();
    let cart = h.client.open(session()).await.unwrap();
    h.client.add(cart, "Chai", 15.0, Portion::Full).await.unwrap();

    drop(h.client);
    h.handle.await.unwrap();

    // The session slot survives the actor.
    assert!(h.store.get(&session(), CART_KEY).await.unwrap().is_some());
}
