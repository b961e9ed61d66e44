use dioxus::prelude::*;

use crate::actions;
use crate::state::AdmirerContext;

#[component]
pub fn Sent() -> Element {
    let session = use_context::<AdmirerContext>().session;
    let generated = session.read().generated().to_string();

    rsx! {
        div { class: "card sent",
            div { class: "sent-badge", "✈️" }
            h2 { class: "screen-title", "Enviado! 🤫" }
            p { class: "muted", "Sua identidade está protegida criptograficamente." }

            div { class: "preview-box",
                p { class: "preview-label", "Prévia da IA:" }
                p { class: "preview-text", "\"{generated}\"" }
            }

            button {
                class: "link-button accent",
                onclick: move |_| actions::apply(session, |s| s.send_another()),
                "Enviar outro"
            }
        }
    }
}
