use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod components;
pub mod format_helpers;
mod routes;
mod state;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = search_engine::config();
    use_context_provider(|| config.features.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Trademark Search" }
        Router::<Route> {}
    }
}

/// Feature flags from `config.toml`, provided by [`App`].
pub fn use_feature_flags() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
