//! UI-side wrappers around the session drivers.
//!
//! The async sequences live in `admirer_core::flow`; this module adapts the
//! session signal to them and logs rejected transitions. Signal write guards
//! are never held across an await.

use admirer_core::{flow, GuessOutcome, Session, SessionAccess, SessionError};
use dioxus::prelude::*;

use crate::state::AdmirerContext;

/// Session signal seen through [`SessionAccess`].
struct SignalSession(Signal<Session>);

impl SessionAccess for SignalSession {
    fn with<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut *self.0.write())
    }
}

/// Compose the note, then show the sent screen.
pub async fn send(ctx: AdmirerContext) {
    let mut session = SignalSession(ctx.session);
    if let Err(e) = flow::send(ctx.gateway.as_ref(), &mut session).await {
        tracing::warn!(error = %e, "Send rejected");
    }
}

/// Pay for the reveal, then open the game after a short pause.
pub async fn pay(ctx: AdmirerContext) {
    let mut session = SignalSession(ctx.session);
    match flow::pay(ctx.gateway.as_ref(), &ctx.config, &mut session).await {
        Ok(true) => tracing::info!("Reveal game unlocked"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Payment rejected"),
    }
}

/// Submit the current guess.
pub fn guess(mut session: Signal<Session>) {
    let outcome = session.write().submit_guess();
    match outcome {
        Ok(GuessOutcome::Correct) => tracing::info!("Sender guessed"),
        Ok(GuessOutcome::OutOfAttempts) => tracing::info!("Out of attempts"),
        Ok(GuessOutcome::Wrong { .. }) => {}
        Err(e) => tracing::warn!(error = %e, "Guess rejected"),
    }
}

/// Run a synchronous session action, logging a rejected transition.
pub fn apply<F>(mut session: Signal<Session>, action: F)
where
    F: FnOnce(&mut Session) -> Result<(), SessionError>,
{
    let result = action(&mut *session.write());
    if let Err(e) = result {
        tracing::warn!(error = %e, "Action rejected");
    }
}
