//! Error types for the Secret Admirer session

use thiserror::Error;

use crate::session::Screen;

/// Rejected session actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition { screen: Screen, action: &'static str },

    #[error("recipient handle is empty")]
    MissingRecipient,

    #[error("message is empty")]
    MissingMessage,

    #[error("another operation is still in flight")]
    Busy,
}

/// Failures a gateway may report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("payment declined: {0}")]
    PaymentDeclined(String),

    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
