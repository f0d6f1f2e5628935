//! Yide top bar
//!
//! Mounts the quick-search bar and the "Share a Yide" dialog. Rides are
//! posted to `/api/ride` on the origin the app is served from.

use dioxus::prelude::*;
use yide_ui::components::QuickSearchBar;
use yide_ui::state::FormState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("yide-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(FormState::new);

    use_effect(move || {
        if state.config.read().is_none() {
            log::warn!("No ride endpoint for this page; submitting a ride will fail");
        }
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            QuickSearchBar {}
        }
    }
}
