use dioxus::prelude::*;

#[component]
pub fn ProcessingPanel() -> Element {
    rsx! {
        div {
            class: "phase-panel centered",
            div { class: "spinner" }
            h3 { class: "phase-heading", "Processing Video" }
            p {
                class: "phase-copy",
                "Analyzing video content and preparing to answer your questions..."
            }
            div {
                class: "bounce-dots",
                span {}
                span {}
                span {}
            }
        }
    }
}
