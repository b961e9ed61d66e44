//! Gateway seam for the two "remote" operations.
//!
//! The demo has no backend: [`MockGateway`] stands in for the message
//! rewriter and the wallet, sleeping a fixed delay and always succeeding.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use admirer_core::{AdmirerConfig, Gateway, MockGateway, Session};
//!
//! let config = AdmirerConfig::default();
//! let gateway = MockGateway::new(&config);
//! let mut session = Session::new(&config);
//!
//! session.set_recipient("ana");
//! session.set_message("oi");
//! let request = session.begin_send()?;
//! let text = gateway.compose(&request).await?;
//! session.finish_send(text)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{AdmirerConfig, MockUser, Price};
use crate::error::GatewayError;
use crate::message::{self, Tone};

/// Input to the message rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    pub recipient: String,
    pub message: String,
    pub tone: Tone,
}

/// A charge against the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Price,
}

/// Confirmation of a completed charge
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub amount: Price,
    pub payer: String,
}

/// Remote operations the session depends on.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Rewrite the user's note into the final anonymous message.
    async fn compose(&self, request: &ComposeRequest) -> Result<String, GatewayError>;

    /// Charge the signed-in user.
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError>;

    /// The signed-in user.
    fn current_user(&self) -> &MockUser;
}

/// Timer-backed gateway that never fails.
#[derive(Debug, Clone)]
pub struct MockGateway {
    user: MockUser,
    compose_delay: Duration,
    payment_delay: Duration,
}

impl MockGateway {
    pub fn new(config: &AdmirerConfig) -> Self {
        Self {
            user: config.user.clone(),
            compose_delay: config.compose_delay(),
            payment_delay: config.payment_delay(),
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(&AdmirerConfig::default())
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn compose(&self, request: &ComposeRequest) -> Result<String, GatewayError> {
        tracing::debug!(recipient = %request.recipient, tone = ?request.tone, "Composing message");
        tokio::time::sleep(self.compose_delay).await;
        Ok(message::rewrite(
            &request.recipient,
            &request.message,
            request.tone,
        ))
    }

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
        tracing::debug!(amount = %request.amount, payer = %self.user.username, "Processing payment");
        tokio::time::sleep(self.payment_delay).await;
        Ok(PaymentReceipt {
            amount: request.amount.clone(),
            payer: self.user.username.clone(),
        })
    }

    fn current_user(&self) -> &MockUser {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tone: Tone) -> ComposeRequest {
        ComposeRequest {
            recipient: "ana".to_string(),
            message: "oi".to_string(),
            tone,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_compose_waits_then_rewrites() {
        let gateway = MockGateway::default();
        let start = tokio::time::Instant::now();

        let text = gateway.compose(&request(Tone::Sweet)).await.unwrap();

        assert_eq!(text, "Olá @ana, alguém admira muito seu brilho... oi ✨💌");
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_compose_spicy() {
        let gateway = MockGateway::default();
        let text = gateway.compose(&request(Tone::Spicy)).await.unwrap();
        assert_eq!(
            text,
            "Ei @ana, não consigo parar de pensar no quanto você é atraente... oi 🔥😈"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_pay_always_succeeds() {
        let gateway = MockGateway::default();
        let start = tokio::time::Instant::now();

        let receipt = gateway
            .pay(&PaymentRequest {
                amount: Price::default(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.payer, "usuario_teste");
        assert_eq!(receipt.amount.to_string(), "0.1 USDC");
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_current_user_from_config() {
        let gateway = MockGateway::default();
        assert_eq!(gateway.current_user().username, "usuario_teste");
        assert_eq!(gateway.current_user().fid, 123_456);
    }

    #[test]
    fn test_instant_gateway_resolves_immediately() {
        let gateway = MockGateway::new(&AdmirerConfig::instant());
        let text = tokio_test::block_on(gateway.compose(&request(Tone::Sweet))).unwrap();
        assert!(text.starts_with("Olá @ana"));
    }
}
