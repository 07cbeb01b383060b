use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use shared_types::{ConversationPhase, Position, WidgetConfig, WidgetSize};
use std::rc::Rc;
use widget_core::{Conversation, ConversationDriver, ConversationHandle, DragController};

use crate::components::styles::WIDGET_STYLES;
use crate::components::{ChatPanel, InputPanel, ProcessingPanel};
use crate::interop::{
    get_viewport_size, scroll_chat_to_end, show_alert, DocumentDragListeners, GlooTimer,
    ViewportListener,
};

/// Conversation state stored in a Dioxus signal.
#[derive(Clone, Copy)]
pub struct SignalConversation(pub Signal<Conversation>);

impl ConversationHandle for SignalConversation {
    fn read<R>(&self, f: impl FnOnce(&Conversation) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> R {
        let mut signal = self.0;
        let mut conversation = signal.write();
        f(&mut conversation)
    }
}

fn is_submit_key(key: &Key, modifiers: Modifiers) -> bool {
    let held = Modifiers::SHIFT | Modifiers::CONTROL | Modifiers::ALT | Modifiers::META;
    *key == Key::Enter && !modifiers.intersects(held)
}

fn widget_style(position: Position, size: WidgetSize) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        position.x, position.y, size.width, size.height
    )
}

fn badge_style(position: Position) -> String {
    format!("left: {}px; top: {}px;", position.x, position.y)
}

#[component]
pub fn VideoChatWidget(config: WidgetConfig) -> Element {
    let initial = config.clone();
    let mut drag = use_signal(move || {
        let mut controller = DragController::new_in(
            initial.initial_position,
            initial.widget_size,
            get_viewport_size(),
        );
        if initial.start_minimized {
            controller.minimize();
        }
        controller
    });
    let conversation = use_signal(Conversation::new);
    let mut video_input = use_signal(String::new);
    let mut question_input = use_signal(String::new);
    let mut drag_listeners = use_signal(|| None::<DocumentDragListeners>);
    let mut viewport_listener = use_signal(|| None::<ViewportListener>);

    let driver = use_hook(|| {
        Rc::new(ConversationDriver::simulated(
            SignalConversation(conversation),
            Rc::new(GlooTimer),
        ))
    });

    {
        let driver = driver.clone();
        use_drop(move || {
            driver.shutdown();
        });
    }

    // Re-clamp on viewport resize outside of a gesture.
    use_effect(move || {
        if viewport_listener.peek().is_some() {
            return;
        }
        let listener = ViewportListener::attach(move |viewport| {
            if !drag.peek().is_dragging() {
                drag.write().fit_to_viewport(viewport);
            }
        });
        viewport_listener.set(listener);
    });

    // Document listeners live exactly as long as the gesture.
    let dragging = use_memo(move || drag.read().is_dragging());
    use_effect(move || {
        if !dragging() {
            if drag_listeners.peek().is_some() {
                drag_listeners.set(None);
            }
            return;
        }
        if drag_listeners.peek().is_some() {
            return;
        }
        let listeners = DocumentDragListeners::attach(
            move |pointer| {
                drag.write().on_gesture_move(pointer, get_viewport_size());
            },
            move || {
                drag.write().on_gesture_end();
            },
        );
        if listeners.is_none() {
            drag.write().on_gesture_end();
        }
        drag_listeners.set(listeners);
    });

    // Keep the newest message in view.
    use_effect(move || {
        let conversation = conversation.read();
        let _ = (conversation.messages().len(), conversation.is_typing());
        scroll_chat_to_end();
    });

    let analyze = {
        let driver = driver.clone();
        use_callback(move |_: ()| {
            let raw = video_input.peek().clone();
            match driver.submit_video_reference(&raw) {
                Ok(Some(completion)) => {
                    info!("Video accepted, analysis running");
                    spawn(completion);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Rejected video reference: {e}");
                    show_alert(&e.to_string());
                }
            }
        })
    };

    let send = {
        let driver = driver.clone();
        use_callback(move |_: ()| {
            let text = question_input.peek().clone();
            if let Some(completion) = driver.submit_question(&text) {
                question_input.set(String::new());
                spawn(completion);
            }
        })
    };

    let on_keydown = use_callback(move |e: KeyboardEvent| {
        if !is_submit_key(&e.key(), e.modifiers()) {
            return;
        }
        e.prevent_default();
        let phase = conversation.peek().phase();
        match phase {
            ConversationPhase::Input => analyze.call(()),
            ConversationPhase::Processing | ConversationPhase::Chat => send.call(()),
        }
    });

    let (position, minimized) = {
        let controller = drag.read();
        (controller.position(), controller.is_minimized())
    };

    if minimized {
        return rsx! {
            style { {WIDGET_STYLES} }
            div {
                class: "minimized-badge",
                role: "button",
                "aria-label": "Open video assistant",
                style: "{badge_style(position)}",
                onclick: move |_| drag.write().restore(get_viewport_size()),
                "💬"
            }
        };
    }

    let (phase, messages, typing) = {
        let conversation = conversation.read();
        (
            conversation.phase(),
            conversation.messages().to_vec(),
            conversation.is_typing(),
        )
    };

    rsx! {
        style { {WIDGET_STYLES} }

        div {
            class: "video-chat-widget",
            role: "dialog",
            "aria-label": config.title.clone(),
            style: "{widget_style(position, config.widget_size)}",

            div {
                class: "widget-header",
                onmousedown: move |e: MouseEvent| {
                    let point = e.data().client_coordinates();
                    let pointer = Position::new(point.x as i32, point.y as i32);
                    if drag.write().on_gesture_start(pointer) {
                        e.prevent_default();
                    }
                },

                div {
                    class: "widget-title",
                    span { "▶️" }
                    span { "{config.title}" }
                }

                div {
                    class: "widget-controls",
                    button {
                        class: "widget-control",
                        "aria-label": "Minimize",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |_| drag.write().minimize(),
                        "−"
                    }
                    button {
                        class: "widget-control",
                        "aria-label": "Close",
                        onmousedown: move |e| e.stop_propagation(),
                        "×"
                    }
                }
            }

            div {
                class: "widget-body",
                match phase {
                    ConversationPhase::Input => rsx! {
                        InputPanel {
                            value: video_input(),
                            on_input: move |value| video_input.set(value),
                            on_keydown,
                            on_analyze: analyze,
                        }
                    },
                    ConversationPhase::Processing => rsx! { ProcessingPanel {} },
                    ConversationPhase::Chat => rsx! {
                        ChatPanel {
                            messages,
                            typing,
                            value: question_input(),
                            on_input: move |value| question_input.set(value),
                            on_keydown,
                            on_send: send,
                        }
                    },
                }
            }
        }
    }
}
