use dioxus::prelude::*;

use crate::hooks::use_contact_form;

#[component]
pub fn ContactPanel() -> Element {
    let mut contact = use_contact_form();

    rsx! {
        div { class: "footer-column fade-up",
            h3 { class: "footer-heading", "Contáctanos" }
            p { class: "footer-text",
                "Déjanos tu correo y nos pondremos en contacto pronto."
            }
            form {
                class: "contact-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    contact.submit();
                },
                input {
                    class: "contact-input",
                    r#type: "email",
                    required: true,
                    placeholder: "tu@email.com",
                    value: contact.email(),
                    oninput: move |evt| contact.set_email(evt.value()),
                }
                button {
                    class: "btn-primary btn-pill btn-block",
                    r#type: "submit",
                    if contact.is_acknowledged() { "✓ Enviado" } else { "Enviar" }
                }
            }
        }
    }
}
