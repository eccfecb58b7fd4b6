use dioxus::prelude::*;

use crate::content::AREA_GROUPS;
use crate::types::{AreaGroup, SectionId};

#[component]
pub fn Areas() -> Element {
    rsx! {
        section {
            id: SectionId::Areas.anchor_id(),
            class: "section section-grey",
            div { class: "container",
                div { class: "section-heading",
                    span { class: "hand-note", "Áreas" }
                    h2 { "Áreas de aplicación" }
                    p { class: "section-subtitle",
                        "Prestamos servicios en múltiples entornos clínicos e industriales."
                    }
                }
                div { class: "grid grid-2",
                    for group in AREA_GROUPS.iter() {
                        AreaCard { key: "{group.title}", group: *group }
                    }
                }
            }
        }
    }
}

#[component]
fn AreaCard(group: AreaGroup) -> Element {
    rsx! {
        div { class: "card area-card fade-up",
            h3 { {group.title} }
            ul { class: "check-list",
                for item in group.items.iter() {
                    li { key: "{item}",
                        span { class: "check-icon", "✔" }
                        span { {*item} }
                    }
                }
            }
        }
    }
}
