use dioxus::prelude::*;

use crate::components::navigation::MobileMenu;
use crate::hooks::use_nav_state;
use crate::types::SectionId;

#[component]
pub fn NavBar() -> Element {
    let mut nav = use_nav_state();

    rsx! {
        nav { class: "nav-bar",
            // Desktop links
            div { class: "nav-links",
                for section in SectionId::ALL {
                    a {
                        key: "{section}",
                        href: section.href(),
                        "data-testid": "link-{section}",
                        class: if nav.is_active(section) { "nav-link nav-link-active" } else { "nav-link" },
                        {section.label()}
                        if nav.is_active(section) {
                            span { class: "nav-indicator" }
                        }
                    }
                }
            }

            a { class: "nav-cta", href: "#footer",
                button {
                    class: "btn-primary btn-pill",
                    "data-testid": "button-join-nav",
                    "Contactanos"
                }
            }

            button {
                class: "nav-toggle",
                "data-testid": "button-menu-toggle",
                "aria-expanded": if nav.is_menu_open() { "true" } else { "false" },
                onclick: move |_| nav.toggle_menu(),
                if nav.is_menu_open() { "✕" } else { "☰" }
            }

            if nav.is_menu_open() {
                MobileMenu { nav }
            }
        }
    }
}
