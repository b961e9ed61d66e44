use std::time::Duration;

use admirer_core::*;
use async_trait::async_trait;
use tokio::time::Instant;

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

/// Gateway whose wallet always declines.
struct DecliningGateway {
    inner: MockGateway,
}

#[async_trait]
impl Gateway for DecliningGateway {
    async fn compose(&self, request: &ComposeRequest) -> Result<String, GatewayError> {
        self.inner.compose(request).await
    }

    async fn pay(&self, _request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
        Err(GatewayError::PaymentDeclined("insufficient balance".into()))
    }

    fn current_user(&self) -> &MockUser {
        self.inner.current_user()
    }
}

async fn send(session: &mut Session, gateway: &dyn Gateway, recipient: &str, text: &str) {
    session.set_recipient(recipient);
    session.set_message(text);
    flow::send(gateway, session).await.unwrap();
}

async fn pay_and_play(session: &mut Session, gateway: &dyn Gateway, config: &AdmirerConfig) {
    assert_eq!(flow::pay(gateway, config, session).await, Ok(true));
}

// ----------------------------------------------------------------------------
// Compose
// ----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_send_sweet_message() {
    let config = AdmirerConfig::default();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);

    let start = Instant::now();
    send(&mut session, &gateway, "ana", "oi").await;

    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(session.screen(), Screen::Sent);
    assert_eq!(
        session.generated(),
        "Olá @ana, alguém admira muito seu brilho... oi ✨💌"
    );
}

#[tokio::test(start_paused = true)]
async fn test_send_spicy_message() {
    let config = AdmirerConfig::default();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);
    session.toggle_spicy();

    send(&mut session, &gateway, "ana", "oi").await;

    assert_eq!(
        session.generated(),
        "Ei @ana, não consigo parar de pensar no quanto você é atraente... oi 🔥😈"
    );
}

#[tokio::test(start_paused = true)]
async fn test_sent_message_shows_up_in_inbox() {
    let config = AdmirerConfig::default();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);

    send(&mut session, &gateway, "bia", "você é incrível").await;
    session.send_another().unwrap();
    session.open_inbox().unwrap();

    assert_eq!(session.screen(), Screen::Inbox);
    assert!(session.generated().contains("@bia"));
    assert!(session.generated().contains("você é incrível"));
}

// ----------------------------------------------------------------------------
// Reveal game
// ----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_full_round_lose_then_reset() {
    let config = AdmirerConfig::default();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);

    session.open_inbox().unwrap();
    let start = Instant::now();
    pay_and_play(&mut session, &gateway, &config).await;
    assert!(start.elapsed() >= Duration::from_millis(2500));
    assert_eq!(session.screen(), Screen::Game);

    let mut seen = vec![session.attempts()];
    for guess in ["x", "y", "z"] {
        session.set_guess(guess);
        session.submit_guess().unwrap();
        seen.push(session.attempts());
    }

    assert_eq!(seen, vec![3, 2, 1, 0]);
    assert_eq!(session.outcome(), Some(Outcome::Lose));
    assert_eq!(session.screen(), Screen::Result);

    session.reset().unwrap();
    assert_eq!(session.screen(), Screen::Home);
    assert_eq!(session.attempts(), 3);
    assert!(session.guess().is_empty());
    assert_eq!(session.outcome(), None);
}

#[tokio::test(start_paused = true)]
async fn test_full_round_win_with_gateway_user() {
    let config = AdmirerConfig::default();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);

    session.open_inbox().unwrap();
    pay_and_play(&mut session, &gateway, &config).await;

    session.set_guess("wrong");
    session.submit_guess().unwrap();
    session.set_guess(gateway.current_user().username.to_uppercase());
    assert_eq!(session.submit_guess().unwrap(), GuessOutcome::Correct);
    assert_eq!(session.outcome(), Some(Outcome::Win));
    assert_eq!(session.attempts(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_second_round_after_reset() {
    let config = AdmirerConfig::instant();
    let gateway = MockGateway::new(&config);
    let mut session = Session::new(&config);

    for _ in 0..2 {
        session.open_inbox().unwrap();
        pay_and_play(&mut session, &gateway, &config).await;
        session.set_guess("usuario_teste");
        session.submit_guess().unwrap();
        session.reset().unwrap();
    }

    assert_eq!(session.screen(), Screen::Home);
    assert_eq!(session.payment(), PaymentStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_declined_payment_stays_in_inbox() {
    let config = AdmirerConfig::default();
    let gateway = DecliningGateway {
        inner: MockGateway::new(&config),
    };
    let mut session = Session::new(&config);

    session.open_inbox().unwrap();

    assert_eq!(flow::pay(&gateway, &config, &mut session).await, Ok(false));
    assert_eq!(session.payment(), PaymentStatus::Idle);
    assert_eq!(session.screen(), Screen::Inbox);
    assert!(session.can_pay());
}
