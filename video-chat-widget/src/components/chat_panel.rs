use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use shared_types::{ChatMessage, Sender};

use crate::interop::CHAT_END_ELEMENT_ID;

#[component]
pub fn ChatPanel(
    messages: Vec<ChatMessage>,
    typing: bool,
    value: String,
    on_input: Callback<String>,
    on_keydown: Callback<KeyboardEvent>,
    on_send: Callback<()>,
) -> Element {
    let send_disabled = typing || value.trim().is_empty();

    rsx! {
        div {
            class: "messages-scroll-area",
            for message in messages {
                MessageBubble { key: "{message.id}", message }
            }
            if typing {
                TypingIndicator {}
            }
            div { id: CHAT_END_ELEMENT_ID }
        }

        div {
            class: "chat-input-area",
            input {
                class: "question-input",
                r#type: "text",
                placeholder: "Ask a question about the video...",
                value: "{value}",
                disabled: typing,
                oninput: move |e: FormEvent| on_input.call(e.value()),
                onkeydown: move |e| on_keydown.call(e),
            }
            button {
                class: "send-button",
                "aria-label": "Send",
                disabled: send_disabled,
                onclick: move |_| on_send.call(()),
                "➤"
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = matches!(message.sender, Sender::User);

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },
            div {
                class: if is_user {
                    "message-bubble user-bubble"
                } else {
                    "message-bubble assistant-bubble"
                },
                "{message.content}"
                span { class: "message-time", "{format_timestamp(message.timestamp)}" }
            }
        }
    }
}

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row assistant-row",
            div {
                class: "typing-indicator",
                span {}
                span {}
                span {}
            }
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_render_hours_and_minutes() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 42).unwrap();
        assert_eq!(format_timestamp(timestamp), "09:07");
    }
}
