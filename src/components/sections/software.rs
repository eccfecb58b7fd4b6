use dioxus::prelude::*;

use crate::content::{SOFTWARE_FEATURES, SOFTWARE_MODULES};
use crate::types::SectionId;

#[component]
pub fn Software() -> Element {
    rsx! {
        section {
            id: SectionId::Software.anchor_id(),
            class: "section section-sky",
            div { class: "container grid grid-2 align-center",
                div { class: "fade-up",
                    span { class: "hand-note", "Software" }
                    h2 { "Gestión Documental y Habilitación" }
                    p { class: "software-lead",
                        "Solución integral para la gestión documental y cumplimiento de la "
                        strong { "Resolución 3100 de 2019" }
                        " del Ministerio de Salud colombiano."
                    }

                    div { class: "software-features",
                        for feature in SOFTWARE_FEATURES.iter() {
                            div { key: "{feature.title}", class: "software-feature",
                                span { class: "check-icon", "✔" }
                                div {
                                    h3 { {feature.title} }
                                    p { {feature.description} }
                                }
                            }
                        }
                    }

                    a { class: "software-cta", href: "#footer",
                        button { class: "btn-primary btn-pill", "Solicitar demostración" }
                    }
                }

                div { class: "card software-panel fade-up",
                    h3 { class: "software-panel-title", "Resolución 3100/2019" }
                    p {
                        "Cumple con todos los requisitos de habilitación para instituciones prestadoras de servicios de salud, garantizando seguridad del paciente y eficiencia operativa."
                    }
                    div { class: "software-modules",
                        h4 { "Módulos principales:" }
                        ul {
                            for module in SOFTWARE_MODULES.iter() {
                                li { key: "{module}",
                                    span { class: "dot" }
                                    span { {*module} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
