use dioxus::prelude::*;

use crate::content::SERVICES;
use crate::types::{SectionId, ServiceCard};

#[component]
pub fn Features() -> Element {
    rsx! {
        section {
            id: SectionId::Features.anchor_id(),
            class: "section section-light",
            div { class: "container",
                div { class: "section-heading",
                    span { class: "hand-note", "Nuestros servicios" }
                    h2 { "Servicios de gestión integral" }
                }
                div { class: "grid grid-3",
                    for (idx, card) in SERVICES.iter().enumerate() {
                        FeatureCard { key: "{card.test_id}", card: *card, delay: 0.1 * (idx + 1) as f64 }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeatureCard(card: ServiceCard, delay: f64) -> Element {
    rsx! {
        div {
            class: "card feature-card fade-up",
            style: format!("animation-delay: {delay:.1}s"),
            "data-testid": card.test_id,
            div { class: "feature-card-media",
                img { src: card.image, alt: card.title }
            }
            div { class: "feature-card-body",
                h3 { {card.title} }
                p { {card.description} }
            }
        }
    }
}
