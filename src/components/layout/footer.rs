use dioxus::prelude::*;

use crate::browser::current_year;
use crate::components::layout::ContactPanel;
use crate::content::{COMPANY_NAME, CONTACT_LINKS, LOGO_WHITE};

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { id: "footer", class: "footer",
            div { class: "container",
                div { class: "grid grid-3 footer-top",
                    // Logo
                    div { class: "footer-column fade-up",
                        img { class: "footer-logo", src: LOGO_WHITE, alt: COMPANY_NAME }
                        p { class: "footer-text",
                            "Soluciones integrales de gestión tecnológica para instituciones de salud."
                        }
                    }

                    // Contact links
                    div { class: "footer-column fade-up",
                        h3 { class: "footer-heading", "Contacto" }
                        div { class: "contact-links",
                            for link in CONTACT_LINKS.iter() {
                                a {
                                    key: "{link.label}",
                                    class: "contact-link",
                                    href: link.href,
                                    target: link.target(),
                                    rel: link.rel(),
                                    title: link.label,
                                    span { class: "contact-link-icon", {link.icon} }
                                    span { class: "contact-link-text", {link.text} }
                                }
                            }
                        }
                    }

                    ContactPanel {}
                }

                div { class: "footer-divider" }

                div { class: "footer-bottom",
                    p { "© {year} {COMPANY_NAME}. Todos los derechos reservados." }
                    p { "Desarrollado por ♥ Novamed Ingeniería S.A.S" }
                }
            }
        }
    }
}
