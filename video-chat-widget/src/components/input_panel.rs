use dioxus::prelude::*;

#[component]
pub fn InputPanel(
    value: String,
    on_input: Callback<String>,
    on_keydown: Callback<KeyboardEvent>,
    on_analyze: Callback<()>,
) -> Element {
    let blank = value.trim().is_empty();

    rsx! {
        div {
            class: "phase-panel",
            div { class: "phase-icon", "▶️" }
            h3 { class: "phase-heading", "YouTube Video Analyzer" }
            p { class: "phase-copy", "Enter a YouTube video ID or URL to get started" }

            div {
                input {
                    class: "video-input",
                    r#type: "text",
                    placeholder: "Enter YouTube video ID or URL",
                    value: "{value}",
                    oninput: move |e: FormEvent| on_input.call(e.value()),
                    onkeydown: move |e| on_keydown.call(e),
                }
                p {
                    class: "input-hint",
                    "Example: dQw4w9WgXcQ or https://youtube.com/watch?v=..."
                }
            }

            button {
                class: "primary-button",
                disabled: blank,
                onclick: move |_| on_analyze.call(()),
                "Analyze Video"
            }
        }
    }
}
