use dioxus::prelude::*;

use novamed_landing::pages::Home;
use novamed_landing::LandingConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(LandingConfig::load);
    use_hook(move || {
        tracing::info!(
            "landing page mounted (threshold {}px, ack reset {}ms)",
            config.scroll_threshold_px,
            config.ack_reset_delay_ms
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Novamed Ingeniería" }

        Router::<Route> {}
    }
}
