//! Root app component with mount splash and screen routing.

use admirer_core::Screen;
use dioxus::prelude::*;

use crate::state::{self, AdmirerContext, AppPhase};
use crate::theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Root application component.
#[component]
pub fn App() -> Element {
    let mut phase = use_signal(|| AppPhase::Loading);
    let ctx = use_context_provider(|| AdmirerContext::mock(state::launch_config()));

    let theme_name = ctx.config.theme.clone();
    use_hook(move || {
        *CURRENT_THEME.write() = Theme::from_name(&theme_name);
    });

    // Flip to Ready once mounted so the first frame is the splash
    use_effect(move || {
        if *phase.read() == AppPhase::Loading {
            phase.set(AppPhase::Ready);
        }
    });

    if *phase.read() == AppPhase::Loading {
        return rsx! {
            div { class: "splash",
                div { class: "splash-text", "Aguarde..." }
            }
        };
    }

    let screen = ctx.session.read().screen();

    rsx! {
        ThemedRoot {
            div { class: "admirer-app",
                div { class: "admirer-frame",
                    match screen {
                        Screen::Home => rsx! { super::home::Home {} },
                        Screen::Sent => rsx! { super::sent::Sent {} },
                        Screen::Inbox => rsx! { super::inbox::Inbox {} },
                        Screen::Game => rsx! { super::game::Game {} },
                        Screen::Result => rsx! { super::result::RoundResult {} },
                    }
                }
            }
        }
    }
}
