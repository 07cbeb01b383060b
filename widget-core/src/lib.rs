//! Platform-independent core of the video chat widget
//!
//! - [`drag`]: header drag gestures clamped to the viewport
//! - [`conversation`]: the input → processing → chat state machine
//! - [`driver`]: wires the state machine to its async capabilities
//! - [`services`]: those capabilities and their simulated implementations

pub mod conversation;
pub mod drag;
pub mod driver;
pub mod error;
pub mod picker;
pub mod services;
pub mod video_ref;

pub use conversation::{seed_message, Conversation, PendingQuestion};
pub use drag::{clamp_position, DragController, DragSession};
pub use driver::{Completion, ConversationDriver, ConversationHandle};
pub use error::WidgetError;
pub use picker::{ResponsePicker, SeededPicker, SequencePicker, UniformPicker};
pub use services::*;
pub use video_ref::extract_video_id;
