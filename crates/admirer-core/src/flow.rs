//! Async drivers for the two gateway-backed actions.
//!
//! Both take the session's busy flag, await the gateway, then apply the answer.
//! The session is reached through [`SessionAccess`] so the UI can keep it in a
//! signal while the driver is suspended; no borrow is held across an await.

use crate::config::AdmirerConfig;
use crate::error::SessionError;
use crate::gateway::Gateway;
use crate::session::Session;

/// Short-lived mutable access to a [`Session`].
pub trait SessionAccess {
    fn with<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R;
}

impl SessionAccess for Session {
    fn with<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(self)
    }
}

impl<A: SessionAccess> SessionAccess for &mut A {
    fn with<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        (**self).with(f)
    }
}

/// Compose the note and show the sent screen.
///
/// A compose failure clears the busy flag and keeps the form.
pub async fn send<A: SessionAccess>(
    gateway: &dyn Gateway,
    session: &mut A,
) -> Result<(), SessionError> {
    let request = session.with(|s| s.begin_send())?;
    tracing::info!(recipient = %request.recipient, tone = ?request.tone, "Sending anonymous note");

    match gateway.compose(&request).await {
        Ok(text) => session.with(|s| s.finish_send(text)),
        Err(e) => {
            session.with(|s| s.send_failed(&e));
            Ok(())
        }
    }
}

/// Pay for the reveal, wait `game_delay`, then open the game.
///
/// Returns whether the game was entered.
pub async fn pay<A: SessionAccess>(
    gateway: &dyn Gateway,
    config: &AdmirerConfig,
    session: &mut A,
) -> Result<bool, SessionError> {
    let request = session.with(|s| s.begin_payment())?;
    let result = gateway.pay(&request).await;
    if !session.with(|s| s.settle_payment(result))? {
        return Ok(false);
    }

    tokio::time::sleep(config.game_delay()).await;
    session.with(|s| s.enter_game())?;
    Ok(true)
}
