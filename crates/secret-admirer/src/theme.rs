//! Theme for the admirer app.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Neon green backdrop with pink accents
    #[default]
    Neon,
    /// Dark purple night mode
    Midnight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Midnight => "midnight",
        }
    }

    /// Parse a config value, falling back to the default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "midnight" => Theme::Midnight,
            "neon" => Theme::Neon,
            other => {
                tracing::warn!(theme = other, "Unknown theme, using neon");
                Theme::Neon
            }
        }
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
