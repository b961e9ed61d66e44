//! Configuration for the Secret Admirer demo.
//!
//! Every field has a default matching the demo's fixed timings, so an empty
//! TOML file (or no file at all) yields the stock behaviour.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "ADMIRER_CONFIG";

/// The signed-in user exposed by the mock wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockUser {
    pub username: String,
    pub fid: u64,
}

impl Default for MockUser {
    fn default() -> Self {
        Self {
            username: "usuario_teste".to_string(),
            fid: 123_456,
        }
    }
}

/// Price charged for a reveal attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

impl Default for Price {
    fn default() -> Self {
        Self {
            amount: 0.1,
            currency: "USDC".to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmirerConfig {
    /// Fake latency of the message rewrite
    pub compose_delay_ms: u64,
    /// Fake latency of the payment
    pub payment_delay_ms: u64,
    /// Pause between a confirmed payment and the game screen
    pub game_delay_ms: u64,
    /// Guesses per round
    pub max_attempts: u8,
    /// Message length cap, counted in chars
    pub max_message_chars: usize,
    pub price: Price,
    pub user: MockUser,
    /// UI theme name ("neon" or "midnight")
    pub theme: String,
}

impl Default for AdmirerConfig {
    fn default() -> Self {
        Self {
            compose_delay_ms: 2000,
            payment_delay_ms: 1500,
            game_delay_ms: 1000,
            max_attempts: 3,
            max_message_chars: 280,
            price: Price::default(),
            user: MockUser::default(),
            theme: "neon".to_string(),
        }
    }
}

impl AdmirerConfig {
    /// Create a config with no artificial latency (for tests and previews)
    pub fn instant() -> Self {
        Self {
            compose_delay_ms: 0,
            payment_delay_ms: 0,
            game_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load from the file named by `ADMIRER_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                tracing::info!(path = %path.display(), "Loading config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject values that would break session invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        if self.max_message_chars == 0 {
            return Err(ConfigError::Invalid(
                "max_message_chars must be at least 1".into(),
            ));
        }
        if self.user.username.trim().is_empty() {
            return Err(ConfigError::Invalid("user.username is empty".into()));
        }
        if !self.price.amount.is_finite() || self.price.amount < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "price.amount must be a non-negative number, got {}",
                self.price.amount
            )));
        }
        Ok(())
    }

    pub fn compose_delay(&self) -> Duration {
        Duration::from_millis(self.compose_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn game_delay(&self) -> Duration {
        Duration::from_millis(self.game_delay_ms)
    }
}
