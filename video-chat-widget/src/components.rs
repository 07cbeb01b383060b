pub mod chat_panel;
pub mod input_panel;
pub mod processing_panel;
pub mod styles;

pub use chat_panel::{ChatPanel, MessageBubble, TypingIndicator};
pub use input_panel::InputPanel;
pub use processing_panel::ProcessingPanel;
