pub mod use_active_section;
pub mod use_contact_form;
pub mod use_nav_state;

pub use use_active_section::{resolve_active_section, use_active_section, ActiveSectionTracker};
pub use use_contact_form::{use_contact_form, AckTicket, ContactForm, ContactFormState};
pub use use_nav_state::{use_nav_state, MenuDisclosure, NavState};
