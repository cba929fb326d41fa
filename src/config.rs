//! Runtime configuration, read from the environment (and a `.env` file when present).

use crate::cart_actor::CartSettings;
use crate::checkout::CheckoutSettings;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("CART_DESTINATION must be a non-empty string of digits, got {0:?}")]
    InvalidDestination(String),

    #[error("CART_MESSAGING_BASE is not a valid URL: {0}")]
    InvalidMessagingBase(String),

    #[error("CART_NOTICE_MS must be a positive number of milliseconds, got {0:?}")]
    InvalidNoticeDuration(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub restaurant_name: String,
    pub destination: String,
    pub messaging_base: String,
    pub currency: String,
    pub session: String,
    pub state_dir: PathBuf,
    pub menu: PathBuf,
    pub notice_ms: u64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Perfect Food Corner".to_string(),
            destination: "918447830914".to_string(),
            messaging_base: "https://wa.me/".to_string(),
            currency: "₹".to_string(),
            session: "default".to_string(),
            state_dir: PathBuf::from(".order-cart"),
            menu: PathBuf::from("menu.json"),
            notice_ms: 2000,
        }
    }
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::debug!(session = %config.session, state_dir = %config.state_dir.display(), "Config loaded");
        Ok(config)
    }

    /// Builds the configuration from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let notice_ms = match lookup("CART_NOTICE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNoticeDuration(raw.clone()))?,
            None => defaults.notice_ms,
        };

        let config = Self {
            restaurant_name: lookup("CART_RESTAURANT_NAME").unwrap_or(defaults.restaurant_name),
            destination: lookup("CART_DESTINATION").unwrap_or(defaults.destination),
            messaging_base: lookup("CART_MESSAGING_BASE").unwrap_or(defaults.messaging_base),
            currency: lookup("CART_CURRENCY").unwrap_or(defaults.currency),
            session: lookup("CART_SESSION").unwrap_or(defaults.session),
            state_dir: lookup("CART_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_dir),
            menu: lookup("CART_MENU").map(PathBuf::from).unwrap_or(defaults.menu),
            notice_ms,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destination.is_empty() || !self.destination.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidDestination(self.destination.clone()));
        }
        self.messaging_base_url()?;
        if self.notice_ms == 0 {
            return Err(ConfigError::InvalidNoticeDuration(self.notice_ms.to_string()));
        }
        Ok(())
    }

    /// Applies command line overrides.
    pub fn with_overrides(
        mut self,
        session: Option<String>,
        state_dir: Option<PathBuf>,
        menu: Option<PathBuf>,
    ) -> Self {
        if let Some(session) = session {
            self.session = session;
        }
        if let Some(state_dir) = state_dir {
            self.state_dir = state_dir;
        }
        if let Some(menu) = menu {
            self.menu = menu;
        }
        self
    }

    pub fn settings(&self) -> Result<CartSettings, ConfigError> {
        Ok(CartSettings {
            checkout: CheckoutSettings {
                restaurant_name: self.restaurant_name.clone(),
                destination: self.destination.clone(),
                messaging_base: self.messaging_base_url()?,
                currency: self.currency.clone(),
            },
            notice_duration: Duration::from_millis(self.notice_ms),
        })
    }

    fn messaging_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.messaging_base)
            .map_err(|e| ConfigError::InvalidMessagingBase(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidMessagingBase(self.messaging_base.clone()));
        }
        Ok(url)
    }
}
