use dioxus::prelude::*;

use crate::content::{COMPANY_NAME, MISSION, VISION};
use crate::types::SectionId;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: SectionId::About.anchor_id(),
            class: "section section-white",
            div { class: "container",
                div { class: "section-heading",
                    span { class: "hand-note", "Quiénes somos" }
                    h2 { {COMPANY_NAME} }
                    p { class: "section-subtitle",
                        "Somos un equipo multidisciplinario enfocado en diseñar soluciones ingenieriles que mejoren la calidad de vida."
                    }
                }
                div { class: "grid grid-2",
                    div { class: "card statement-card fade-up",
                        h3 { "Misión" }
                        p { {MISSION} }
                    }
                    div { class: "card statement-card fade-up",
                        h3 { "Visión" }
                        p { {VISION} }
                    }
                }
            }
        }
    }
}
