//! Shared app state provided via Dioxus context.

use std::sync::{Arc, OnceLock};

use admirer_core::{AdmirerConfig, Gateway, MockGateway, Session};
use dioxus::prelude::*;

/// Config resolved by `main` before launch.
pub static CONFIG: OnceLock<AdmirerConfig> = OnceLock::new();

/// The launch config, or defaults when embedded without one.
pub fn launch_config() -> AdmirerConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Record the launch config. A second call keeps the first and returns false.
pub fn install_config(config: AdmirerConfig) -> bool {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Config already set, keeping the first one");
        return false;
    }
    true
}

/// Top-level app phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPhase {
    /// Not mounted yet, show the splash
    Loading,
    Ready,
}

/// Everything the screens need: the session, the gateway and the config.
#[derive(Clone)]
pub struct AdmirerContext {
    pub session: Signal<Session>,
    pub gateway: Arc<dyn Gateway>,
    pub config: Arc<AdmirerConfig>,
}

impl AdmirerContext {
    pub fn new(config: AdmirerConfig, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            session: Signal::new(Session::new(&config)),
            gateway,
            config: Arc::new(config),
        }
    }

    /// Context backed by the timer-based mock gateway.
    pub fn mock(config: AdmirerConfig) -> Self {
        let gateway = Arc::new(MockGateway::new(&config));
        Self::new(config, gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_config_keeps_first() {
        let first = AdmirerConfig {
            theme: "midnight".to_string(),
            ..AdmirerConfig::default()
        };
        assert!(install_config(first));
        assert!(!install_config(AdmirerConfig::default()));
        assert_eq!(launch_config().theme, "midnight");
    }
}
