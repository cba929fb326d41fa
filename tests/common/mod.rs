#![allow(dead_code)]

use order_cart::cart_actor::{CartContext, CartSettings};
use order_cart::checkout::{CheckoutSettings, MessagingSink};
use order_cart::storage::SessionStore;
use order_cart::view::{CartSurface, CartView, Notice};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Records every render and notice.
#[derive(Default)]
pub struct RecordingSurface {
    pub renders: Mutex<Vec<CartView>>,
    pub shown: Mutex<Vec<Notice>>,
    pub dismissed: Mutex<Vec<Notice>>,
}

impl RecordingSurface {
    pub fn last_render(&self) -> Option<CartView> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn shown(&self) -> Vec<Notice> {
        self.shown.lock().unwrap().clone()
    }

    pub fn dismissed(&self) -> Vec<Notice> {
        self.dismissed.lock().unwrap().clone()
    }
}

impl CartSurface for RecordingSurface {
    fn render(&self, view: &CartView) {
        self.renders.lock().unwrap().push(view.clone());
    }

    fn show_notice(&self, notice: &Notice) {
        self.shown.lock().unwrap().push(notice.clone());
    }

    fn dismiss_notice(&self, notice: &Notice) {
        self.dismissed.lock().unwrap().push(notice.clone());
    }
}

/// Records every link handed to the messaging channel.
#[derive(Default)]
pub struct RecordingSink {
    pub opened: Mutex<Vec<Url>>,
}

impl RecordingSink {
    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().unwrap().clone()
    }
}

impl MessagingSink for RecordingSink {
    fn open(&self, url: &Url) {
        self.opened.lock().unwrap().push(url.clone());
    }
}

pub fn settings(notice_duration: Duration) -> CartSettings {
    CartSettings {
        checkout: CheckoutSettings {
            restaurant_name: "Perfect Food Corner".into(),
            destination: "918447830914".into(),
            messaging_base: Url::parse("https://wa.me/").unwrap(),
            currency: "₹".into(),
        },
        notice_duration,
    }
}

pub fn context(
    store: Arc<dyn SessionStore>,
    surface: Arc<RecordingSurface>,
    sink: Arc<RecordingSink>,
) -> CartContext {
    CartContext {
        store,
        surface,
        sink,
        settings: settings(Duration::from_millis(20)),
    }
}
