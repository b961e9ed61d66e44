//! Secret Admirer core: the session state machine behind the demo app.
//!
//! This crate has no UI. It provides:
//!
//! - [`Session`]: screen navigation, the compose form and the guessing round
//! - [`Gateway`] / [`MockGateway`]: the fake message rewrite and payment
//! - [`flow`]: the async send and pay sequences the UI spawns
//! - [`AdmirerConfig`]: delays, attempts and the mock user, loadable from TOML
//!
//! The desktop front-end lives in the `secret-admirer` crate.

pub mod config;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod message;
pub mod session;

pub use config::{AdmirerConfig, MockUser, Price, CONFIG_ENV};
pub use error::{ConfigError, GatewayError, SessionError};
pub use flow::SessionAccess;
pub use gateway::{ComposeRequest, Gateway, MockGateway, PaymentReceipt, PaymentRequest};
pub use message::{Tone, PLACEHOLDER_MESSAGE};
pub use session::{GuessOutcome, Outcome, PaymentStatus, Screen, Session};
