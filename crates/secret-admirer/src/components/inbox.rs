//! Recipient's view: the note plus the pay-to-guess offer.

use admirer_core::PaymentStatus;
use dioxus::prelude::*;

use crate::actions;
use crate::state::AdmirerContext;

#[component]
pub fn Inbox() -> Element {
    let ctx = use_context::<AdmirerContext>();
    let session = ctx.session;

    let s = session.read();
    let generated = s.generated().to_string();
    let attempts = s.max_attempts();
    let price = s.price().to_string();
    let processing = s.payment() == PaymentStatus::Processing;
    let can_pay = s.can_pay();
    drop(s);

    let pay_ctx = ctx.clone();

    rsx! {
        div { class: "card inbox",
            span { class: "inbox-heart", "💕" }
            h1 { class: "screen-title", "Você tem um Admirador Secreto!" }

            div { class: "note-box",
                p { class: "note-text", "\"{generated}\"" }
            }

            div { class: "reveal-box",
                h3 { class: "reveal-title", "❓ Quer saber quem foi?" }
                p { class: "muted",
                    "Você tem "
                    strong { "{attempts} chances" }
                    " para adivinhar."
                }

                button {
                    class: if can_pay { "button-pay" } else { "button-pay disabled" },
                    disabled: !can_pay,
                    onclick: move |_| {
                        let ctx = pay_ctx.clone();
                        spawn(actions::pay(ctx));
                    },
                    if processing {
                        "Processando Pagamento..."
                    } else {
                        "💰 Pagar {price}"
                    }
                }
            }

            button {
                class: "link-button",
                disabled: !can_pay,
                onclick: move |_| actions::apply(session, |s| s.leave_inbox()),
                "Voltar ao início"
            }
        }
    }
}
