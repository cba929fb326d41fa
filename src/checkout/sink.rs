use tracing::info;
use url::Url;

/// Receives the checkout deep link. Delivery is never awaited or observed.
pub trait MessagingSink: Send + Sync {
    fn open(&self, url: &Url);
}

/// Prints the link so the user can open it in a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MessagingSink for StdoutSink {
    fn open(&self, url: &Url) {
        info!(host = url.host_str().unwrap_or_default(), "Handing order to messaging channel");
        println!("{url}");
    }
}
