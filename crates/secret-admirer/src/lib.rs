//! Secret Admirer desktop app.
//!
//! Re-exports the screen components, shared state and theme so the app can be
//! embedded in another Dioxus host.

pub mod actions;
pub mod components;
pub mod state;
pub mod theme;

/// App stylesheet, including both themes.
pub const ADMIRER_CSS: &str = include_str!("../assets/admirer.css");
