//! Session state machine.
//!
//! `Session` holds everything a single visit needs: the current screen, the
//! compose form, the payment status and the guessing round. The UI reads it
//! through accessors and mutates it only through the action methods below,
//! which keep attempts within `[0, max_attempts]` and set the outcome at most
//! once per round.
//!
//! Asynchronous actions are split in two halves: `begin_*` validates and marks
//! the session busy, the caller awaits the gateway, then feeds the result back
//! with the matching completion method.

use std::fmt;

use crate::config::{AdmirerConfig, Price};
use crate::error::{GatewayError, SessionError};
use crate::gateway::{ComposeRequest, PaymentReceipt, PaymentRequest};
use crate::message::{self, Tone};

/// Which screen the app is displaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Sent,
    Inbox,
    Game,
    Result,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Sent => "sent",
            Screen::Inbox => "inbox",
            Screen::Game => "game",
            Screen::Result => "result",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Success,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Result of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong { remaining: u8 },
    OutOfAttempts,
}

/// Per-visit UI state.
#[derive(Clone, Debug)]
pub struct Session {
    screen: Screen,

    // Compose form
    recipient: String,
    message: String,
    spicy: bool,
    loading: bool,

    // Reveal flow
    payment: PaymentStatus,
    guess: String,
    attempts: u8,
    outcome: Option<Outcome>,

    generated: String,

    // Fixed for the session
    sender: String,
    price: Price,
    max_attempts: u8,
    max_message_chars: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AdmirerConfig::default())
    }
}

impl Session {
    pub fn new(config: &AdmirerConfig) -> Self {
        Self {
            screen: Screen::Home,
            recipient: String::new(),
            message: String::new(),
            spicy: false,
            loading: false,
            payment: PaymentStatus::Idle,
            guess: String::new(),
            attempts: config.max_attempts,
            outcome: None,
            generated: message::PLACEHOLDER_MESSAGE.to_string(),
            sender: config.user.username.clone(),
            price: config.price.clone(),
            max_attempts: config.max_attempts,
            max_message_chars: config.max_message_chars,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message length in chars, for the `n/max` counter.
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    pub fn max_message_chars(&self) -> usize {
        self.max_message_chars
    }

    pub fn is_spicy(&self) -> bool {
        self.spicy
    }

    pub fn tone(&self) -> Tone {
        Tone::from_spicy(self.spicy)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn payment(&self) -> PaymentStatus {
        self.payment
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Last generated message, or the placeholder before the first send.
    pub fn generated(&self) -> &str {
        &self.generated
    }

    /// The handle that actually sent the note.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Whether the send button should be enabled.
    pub fn can_send(&self) -> bool {
        self.screen == Screen::Home
            && !self.loading
            && !self.recipient.is_empty()
            && !self.message.is_empty()
    }

    /// Whether the pay button should be enabled.
    pub fn can_pay(&self) -> bool {
        self.screen == Screen::Inbox && self.payment == PaymentStatus::Idle
    }

    // ------------------------------------------------------------------
    // Form input
    // ------------------------------------------------------------------

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient = recipient.into();
    }

    /// Set the message, dropping anything past the char limit.
    pub fn set_message(&mut self, text: &str) {
        self.message = message::clamp_chars(text, self.max_message_chars);
    }

    pub fn toggle_spicy(&mut self) {
        self.spicy = !self.spicy;
    }

    pub fn set_guess(&mut self, guess: impl Into<String>) {
        self.guess = guess.into();
    }

    // ------------------------------------------------------------------
    // Home
    // ------------------------------------------------------------------

    /// Validate the form and enter the composing state.
    pub fn begin_send(&mut self) -> Result<ComposeRequest, SessionError> {
        self.expect_screen(Screen::Home, "send")?;
        if self.loading {
            return Err(SessionError::Busy);
        }
        if self.recipient.is_empty() {
            return Err(SessionError::MissingRecipient);
        }
        if self.message.is_empty() {
            return Err(SessionError::MissingMessage);
        }

        self.loading = true;
        Ok(ComposeRequest {
            recipient: self.recipient.clone(),
            message: self.message.clone(),
            tone: self.tone(),
        })
    }

    /// Store the composed text and show the sent screen.
    pub fn finish_send(&mut self, composed: String) -> Result<(), SessionError> {
        self.expect_screen(Screen::Home, "finish sending")?;
        if !self.loading {
            return Err(SessionError::InvalidTransition {
                screen: self.screen,
                action: "finish sending",
            });
        }

        self.generated = composed;
        self.loading = false;
        self.screen = Screen::Sent;
        Ok(())
    }

    /// Leave the composing state after the rewrite failed, keeping the form.
    pub fn send_failed(&mut self, error: &GatewayError) {
        tracing::error!(error = %error, "Compose failed");
        self.loading = false;
    }

    /// Jump straight to the recipient's inbox (demo preview).
    pub fn open_inbox(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Home, "preview the inbox")?;
        if self.loading {
            return Err(SessionError::Busy);
        }
        self.screen = Screen::Inbox;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sent
    // ------------------------------------------------------------------

    /// Clear the form and go back home to write another note.
    pub fn send_another(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Sent, "send another")?;
        self.recipient.clear();
        self.message.clear();
        self.screen = Screen::Home;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Inbox
    // ------------------------------------------------------------------

    /// Return home from the inbox preview.
    pub fn leave_inbox(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Inbox, "leave the inbox")?;
        if self.payment != PaymentStatus::Idle {
            return Err(SessionError::Busy);
        }
        self.screen = Screen::Home;
        Ok(())
    }

    /// Mark the payment as processing and build the request.
    pub fn begin_payment(&mut self) -> Result<PaymentRequest, SessionError> {
        self.expect_screen(Screen::Inbox, "pay")?;
        if self.payment != PaymentStatus::Idle {
            return Err(SessionError::Busy);
        }
        self.payment = PaymentStatus::Processing;
        Ok(PaymentRequest {
            amount: self.price.clone(),
        })
    }

    /// Apply the gateway's answer. Returns true when the game should follow.
    pub fn settle_payment(
        &mut self,
        result: Result<PaymentReceipt, GatewayError>,
    ) -> Result<bool, SessionError> {
        if self.payment != PaymentStatus::Processing {
            return Err(SessionError::InvalidTransition {
                screen: self.screen,
                action: "settle a payment",
            });
        }

        match result {
            Ok(receipt) => {
                tracing::info!(amount = %receipt.amount, payer = %receipt.payer, "Payment confirmed");
                self.payment = PaymentStatus::Success;
                Ok(true)
            }
            Err(e) => {
                tracing::error!(error = %e, "Payment failed");
                self.payment = PaymentStatus::Idle;
                Ok(false)
            }
        }
    }

    /// Move from a paid inbox to the guessing game.
    pub fn enter_game(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Inbox, "start the game")?;
        if self.payment != PaymentStatus::Success {
            return Err(SessionError::InvalidTransition {
                screen: self.screen,
                action: "start the game before paying",
            });
        }
        self.screen = Screen::Game;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Game
    // ------------------------------------------------------------------

    /// Check the current guess against the real sender, ignoring case.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, SessionError> {
        self.expect_screen(Screen::Game, "guess")?;

        if self.guess.to_lowercase() == self.sender.to_lowercase() {
            self.outcome = Some(Outcome::Win);
            self.screen = Screen::Result;
            return Ok(GuessOutcome::Correct);
        }

        self.attempts = self.attempts.saturating_sub(1);
        if self.attempts == 0 {
            self.outcome = Some(Outcome::Lose);
            self.screen = Screen::Result;
            Ok(GuessOutcome::OutOfAttempts)
        } else {
            tracing::info!(remaining = self.attempts, "Wrong guess");
            Ok(GuessOutcome::Wrong {
                remaining: self.attempts,
            })
        }
    }

    // ------------------------------------------------------------------
    // Result
    // ------------------------------------------------------------------

    /// Start over: clear the round and return home.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Result, "reset")?;
        self.attempts = self.max_attempts;
        self.guess.clear();
        self.outcome = None;
        self.payment = PaymentStatus::Idle;
        self.screen = Screen::Home;
        Ok(())
    }

    fn expect_screen(&self, screen: Screen, action: &'static str) -> Result<(), SessionError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                screen: self.screen,
                action,
            })
        }
    }
}
