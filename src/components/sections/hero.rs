use dioxus::prelude::*;

use crate::content::{FLOATING_CARDS, HERO_IMAGE, HERO_LEAD, TRUST_BADGES};
use crate::types::SectionId;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: SectionId::Home.anchor_id(),
            class: "hero",

            // Decorative blobs
            div { class: "blob blob-primary" }
            div { class: "blob blob-accent" }

            div { class: "hero-copy fade-up",
                span { class: "hand-note", "Bienvenido!" }
                h1 { class: "hero-title",
                    "Gestión "
                    span { class: "hero-highlight", "integral" }
                    " "
                    br {}
                    "de la tecnología a tu servicio"
                }
                p { class: "hero-lead", {HERO_LEAD} }

                div { class: "trust-badges",
                    for badge in TRUST_BADGES.iter() {
                        div { key: "{badge.label}", class: "trust-badge",
                            span { class: "trust-badge-icon {badge.tone}", {badge.icon} }
                            span { class: "trust-badge-label", {badge.label} }
                        }
                    }
                }
            }

            div { class: "hero-media",
                img {
                    class: "hero-image",
                    src: HERO_IMAGE,
                    alt: "Tarjeta de presentación Novamed Ingeniería",
                }
                for card in FLOATING_CARDS.iter() {
                    div { key: "{card.title}", class: card.class,
                        div { class: "floating-card-icon", {card.icon} }
                        div {
                            p { class: "floating-card-title", {card.title} }
                            p { class: "floating-card-caption", {card.caption} }
                        }
                    }
                }
            }
        }
    }
}
