use dioxus::prelude::*;

use crate::hooks::NavState;
use crate::types::SectionId;

#[component]
pub fn MobileMenu(nav: NavState) -> Element {
    let mut nav = nav;

    rsx! {
        div { class: "mobile-menu",
            for (idx, section) in SectionId::ALL.into_iter().enumerate() {
                a {
                    key: "{section}",
                    href: section.href(),
                    "data-testid": "link-{section}-mobile",
                    class: if nav.is_active(section) { "mobile-link mobile-link-active" } else { "mobile-link" },
                    style: stagger_style(idx),
                    onclick: move |_| nav.follow_link(),
                    {section.label()}
                }
            }
            div { class: "mobile-menu-footer",
                a {
                    href: "#footer",
                    class: "mobile-cta",
                    onclick: move |_| nav.follow_link(),
                    button {
                        class: "btn-primary btn-pill btn-block",
                        "data-testid": "button-join-mobile",
                        "Contactanos"
                    }
                }
            }
        }
    }
}

/// Links slide in one after another.
fn stagger_style(idx: usize) -> String {
    format!("animation-delay: {:.2}s", idx as f64 * 0.08)
}
