#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Please enter a valid YouTube video ID or URL")]
    InvalidVideoReference { input: String },
}
