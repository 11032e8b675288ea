use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use story_ui::route::Route;
use story_ui::session::{probe_session, SessionState};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let session = use_context_provider(|| Signal::new(SessionState::default()));

    use_effect(move || {
        spawn(async move {
            probe_session(session).await;
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
