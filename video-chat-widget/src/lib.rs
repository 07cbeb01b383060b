pub mod chat_widget;
pub mod components;
pub mod interop;

pub use chat_widget::*;
pub use components::*;
pub use interop::*;
