use admirer_core::Outcome;
use dioxus::prelude::*;

use crate::actions;
use crate::state::AdmirerContext;

/// Win or lose card for a finished round.
#[component]
pub fn RoundResult() -> Element {
    let session = use_context::<AdmirerContext>().session;

    let s = session.read();
    let won = s.outcome() == Some(Outcome::Win);
    let sender = s.sender().to_string();
    let currency = s.price().currency.clone();
    drop(s);

    rsx! {
        div { class: if won { "card result win" } else { "card result lose" },
            if won {
                span { class: "result-icon", "🎉" }
                h1 { class: "result-title", "ACERTOU!" }
                p { class: "result-text",
                    "Foi o "
                    span { class: "result-sender", "@{sender}" }
                    "!"
                }
            } else {
                span { class: "result-icon", "❌" }
                h1 { class: "result-title", "PERDEU!" }
                p { class: "result-text", "Suas tentativas acabaram." }
                p { class: "result-note", "O {currency} ficou com o criador." }
            }

            button {
                class: "button-pill",
                onclick: move |_| actions::apply(session, |s| s.reset()),
                "Voltar ao início"
            }
        }
    }
}
