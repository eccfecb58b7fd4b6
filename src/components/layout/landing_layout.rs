use dioxus::prelude::*;

use crate::components::layout::Footer;
use crate::components::navigation::NavBar;
use crate::components::sections::{About, Areas, Features, Hero, Software};

#[component]
pub fn LandingLayout() -> Element {
    rsx! {
        div { class: "landing",
            NavBar {}
            Hero {}
            Areas {}
            Features {}
            Software {}
            About {}
            Footer {}
        }
    }
}
