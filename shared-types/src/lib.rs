//! Shared types between the widget and its embedding page
//!
//! These types are used by both:
//! - the platform-independent widget core (native Rust, tests)
//! - the Dioxus front end (WASM)
//!
//! Serializable with serde so a host page can hand the widget its config as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// ============================================================================
// Geometry
// ============================================================================

/// Pixel offset of the widget's top-left corner from the viewport origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed outer size of the expanded widget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub struct WidgetSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self {
            width: 400,
            height: 500,
        }
    }
}

/// Browser viewport in CSS pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Conversation
// ============================================================================

/// The three mutually exclusive conversation stages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub enum ConversationPhase {
    #[default]
    Input,
    Processing,
    Chat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub enum Sender {
    User,
    Assistant,
}

/// Chat message for UI display. Append-only once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            content: content.into(),
            timestamp,
        }
    }
}

/// Canonical YouTube video identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub struct VideoId(pub String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Embedding Config
// ============================================================================

pub const DEFAULT_WIDGET_TITLE: &str = "YouTube Video Assistant";

/// Widget settings a host page can supply as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(default)]
#[ts(export, export_to = "../../video-chat-widget/bindings/generated.ts")]
pub struct WidgetConfig {
    pub title: String,
    pub initial_position: Position,
    pub widget_size: WidgetSize,
    pub start_minimized: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WIDGET_TITLE.to_string(),
            initial_position: Position::new(50, 50),
            widget_size: WidgetSize::default(),
            start_minimized: false,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),
    #[error("Invalid widget size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

impl WidgetConfig {
    /// Parse a host-supplied JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WidgetSize { width, height } = self.widget_size;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidSize { width, height });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let now = Utc::now();
        let a = ChatMessage::new(Sender::User, "hi", now);
        let b = ChatMessage::new(Sender::User, "hi", now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID length
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        let json = serde_json::to_string(&ConversationPhase::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        assert_eq!(ConversationPhase::default(), ConversationPhase::Input);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config = WidgetConfig::from_json(r#"{"title": "Ask the video"}"#).unwrap();
        assert_eq!(config.title, "Ask the video");
        assert_eq!(config.initial_position, Position::new(50, 50));
        assert_eq!(config.widget_size, WidgetSize { width: 400, height: 500 });
        assert!(!config.start_minimized);
    }

    #[test]
    fn test_config_rejects_bad_json_and_sizes() {
        let err = WidgetConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err =
            WidgetConfig::from_json(r#"{"widget_size": {"width": 0, "height": 500}}"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSize {
                width: 0,
                height: 500
            }
        );
    }

    #[test]
    fn test_video_id_displays_verbatim() {
        let id = VideoId("dQw4w9WgXcQ".to_string());
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }
}
