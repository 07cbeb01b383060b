use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use video_chat_widget::{load_widget_config, VideoChatWidget};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_widget_config);
    rsx! {
        VideoChatWidget { config }
    }
}
