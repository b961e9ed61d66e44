//! Guessing game: who sent the note?

use dioxus::prelude::*;

use crate::actions;
use crate::state::AdmirerContext;

#[component]
pub fn Game() -> Element {
    let mut session = use_context::<AdmirerContext>().session;

    let attempts = session.read().attempts();
    let guess = session.read().guess().to_string();

    rsx! {
        div { class: "card game",
            h2 { class: "screen-title", "Quem mandou isso? 🤔" }

            div { class: "attempts",
                span { class: "attempts-count", "{attempts}" }
                p { class: "muted", "Tentativas restantes" }
            }

            div { class: "handle-input",
                span { class: "handle-prefix", "@" }
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "username",
                    value: "{guess}",
                    oninput: move |evt: Event<FormData>| {
                        session.write().set_guess(evt.value());
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            actions::guess(session);
                        }
                    },
                }
            }

            button {
                class: "button-light",
                onclick: move |_| actions::guess(session),
                "Verificar"
            }
        }
    }
}
