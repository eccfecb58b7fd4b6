use dioxus::prelude::*;
use crate::components::layout::LandingLayout;

#[component]
pub fn Home() -> Element {
    rsx! {
        LandingLayout {}
    }
}
