use dioxus_logger::tracing::{debug, warn};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use gloo_timers::future::TimeoutFuture;
use shared_types::{Position, Viewport, WidgetConfig};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use widget_core::Timer;

/// Id of the `<script type="application/json">` element a host page may use
/// to configure the widget.
pub const CONFIG_ELEMENT_ID: &str = "video-chat-widget-config";

/// Id of the sentinel element at the bottom of the message list.
pub const CHAT_END_ELEMENT_ID: &str = "video-chat-end";

/// Browser viewport dimensions. Zero when no `window` exists.
pub fn get_viewport_size() -> Viewport {
    let Some(window) = window() else {
        return Viewport::default();
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0).round() as u32)
            .unwrap_or(0)
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// Read the host-supplied config, falling back to defaults.
pub fn load_widget_config() -> WidgetConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return WidgetConfig::default();
    };

    match WidgetConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring widget config from #{CONFIG_ELEMENT_ID}: {e}");
            WidgetConfig::default()
        }
    }
}

pub fn show_alert(message: &str) {
    let Some(window) = window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        warn!("alert blocked: {message}");
    }
}

/// Smooth-scroll the message list so its newest entry is visible.
pub fn scroll_chat_to_end() {
    let Some(end) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CHAT_END_ELEMENT_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    end.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Document-level mouse listeners for one drag gesture.
///
/// Registered by [`DocumentDragListeners::attach`] and removed again when the
/// value is dropped.
pub struct DocumentDragListeners {
    document: web_sys::Document,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

impl DocumentDragListeners {
    pub fn attach(
        mut on_move: impl FnMut(Position) + 'static,
        mut on_end: impl FnMut() + 'static,
    ) -> Option<Self> {
        let document = window()?.document()?;

        let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            on_move(Position::new(e.client_x(), e.client_y()));
        }) as Box<dyn FnMut(MouseEvent)>);
        let on_up = Closure::wrap(Box::new(move |_e: MouseEvent| {
            on_end();
        }) as Box<dyn FnMut(MouseEvent)>);

        let listeners = Self {
            document,
            on_move,
            on_up,
        };
        let registered = listeners
            .document
            .add_event_listener_with_callback("mousemove", listeners.on_move.as_ref().unchecked_ref())
            .and_then(|_| {
                listeners.document.add_event_listener_with_callback(
                    "mouseup",
                    listeners.on_up.as_ref().unchecked_ref(),
                )
            });
        if let Err(e) = registered {
            warn!("Failed to register drag listeners: {e:?}");
            return None;
        }
        debug!("drag listeners attached");
        Some(listeners)
    }
}

impl Drop for DocumentDragListeners {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        debug!("drag listeners removed");
    }
}

/// Window resize listener feeding the current viewport to `on_resize`.
pub struct ViewportListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ViewportListener {
    pub fn attach(mut on_resize: impl FnMut(Viewport) + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            on_resize(get_viewport_size());
        }) as Box<dyn FnMut(web_sys::Event)>);

        for event in ["resize", "orientationchange"] {
            if let Err(e) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Failed to register {event} listener: {e:?}");
            }
        }
        Some(Self { window, callback })
    }
}

impl Drop for ViewportListener {
    fn drop(&mut self) {
        for event in ["resize", "orientationchange"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// [`Timer`] on the browser event loop.
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}
