//! Home screen: compose form, spicy toggle and the inbox preview link.

use dioxus::prelude::*;

use crate::actions;
use crate::state::AdmirerContext;

#[component]
pub fn Home() -> Element {
    let ctx = use_context::<AdmirerContext>();
    let mut session = ctx.session;

    let s = session.read();
    let recipient = s.recipient().to_string();
    let message = s.message().to_string();
    let count = s.message_len();
    let max = s.max_message_chars();
    let spicy = s.is_spicy();
    let icon = s.tone().icon();
    let loading = s.is_loading();
    let can_send = s.can_send();
    drop(s);

    let send_ctx = ctx.clone();

    rsx! {
        div { class: "card home",
            div { class: "home-header",
                h1 { class: "home-title",
                    "Secret "
                    span { class: "home-title-accent", "Admirer" }
                }
                p { class: "home-subtitle", "Envie flertes anônimos 💌" }
            }

            div { class: "input-group",
                label { class: "input-label", "Para quem?" }
                div { class: "handle-input",
                    span { class: "handle-prefix", "@" }
                    input {
                        class: "text-input",
                        r#type: "text",
                        placeholder: "username",
                        value: "{recipient}",
                        oninput: move |evt: Event<FormData>| {
                            session.write().set_recipient(evt.value());
                        },
                    }
                }
            }

            div { class: "input-group",
                label { class: "input-label", "Sua mensagem" }
                textarea {
                    class: "text-input textarea",
                    placeholder: "Escreva o que sente...",
                    value: "{message}",
                    oninput: move |evt: Event<FormData>| {
                        session.write().set_message(&evt.value());
                    },
                }
                div { class: "char-counter", "{count}/{max}" }
            }

            div {
                class: "spicy-toggle",
                onclick: move |_| session.write().toggle_spicy(),
                div { class: "spicy-label",
                    span { class: "spicy-icon", "{icon}" }
                    span { "Modo Picante" }
                }
                div { class: if spicy { "switch on" } else { "switch" },
                    div { class: "switch-knob" }
                }
            }

            button {
                class: if can_send { "button-primary" } else { "button-primary disabled" },
                disabled: !can_send,
                onclick: move |_| {
                    let ctx = send_ctx.clone();
                    spawn(actions::send(ctx));
                },
                if loading {
                    span { class: "spinner", "⏳" }
                } else {
                    span { "🔒 Enviar Anônimo" }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| actions::apply(session, |s| s.open_inbox()),
                "[Demo] Simular visão do Destinatário"
            }
        }
    }
}
