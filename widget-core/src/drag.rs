//! Header drag gestures and viewport clamping.

use shared_types::{Position, Viewport, WidgetSize};

/// Delta between the pointer and the widget origin, fixed for one gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub anchor_offset: Position,
}

/// Clamp each axis to `[0, viewport - widget]`. A viewport smaller than the
/// widget pins that axis to 0.
pub fn clamp_position(candidate: Position, size: WidgetSize, viewport: Viewport) -> Position {
    let max_x = viewport.width as i32 - size.width;
    let max_y = viewport.height as i32 - size.height;
    Position {
        x: candidate.x.min(max_x).max(0),
        y: candidate.y.min(max_y).max(0),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragController {
    position: Position,
    size: WidgetSize,
    minimized: bool,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(position: Position, size: WidgetSize) -> Self {
        Self {
            position,
            size,
            minimized: false,
            session: None,
        }
    }

    /// Like [`DragController::new`], with the starting position clamped to
    /// `viewport`.
    pub fn new_in(position: Position, size: WidgetSize, viewport: Viewport) -> Self {
        let mut controller = Self::new(position, size);
        controller.fit_to_viewport(viewport);
        controller
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> WidgetSize {
        self.size
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Arm a drag from the header. Returns false when minimized.
    ///
    /// A start while a session is live ends that session first and anchors a
    /// new one at the current pointer.
    pub fn on_gesture_start(&mut self, pointer: Position) -> bool {
        if self.minimized {
            return false;
        }
        if self.session.take().is_some() {
            tracing::debug!("drag restarted before previous gesture ended");
        }
        self.session = Some(DragSession {
            anchor_offset: Position {
                x: pointer.x - self.position.x,
                y: pointer.y - self.position.y,
            },
        });
        true
    }

    /// Move the widget with the pointer, clamped to the viewport as it is now.
    /// Returns the new position, or `None` when no gesture is active.
    pub fn on_gesture_move(&mut self, pointer: Position, viewport: Viewport) -> Option<Position> {
        let session = self.session?;
        let candidate = Position {
            x: pointer.x - session.anchor_offset.x,
            y: pointer.y - session.anchor_offset.y,
        };
        self.position = clamp_position(candidate, self.size, viewport);
        Some(self.position)
    }

    /// Returns whether a gesture was actually ended.
    pub fn on_gesture_end(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn minimize(&mut self) {
        self.session = None;
        self.minimized = true;
    }

    pub fn restore(&mut self, viewport: Viewport) {
        self.minimized = false;
        self.fit_to_viewport(viewport);
    }

    /// Re-clamp after a viewport resize outside of a gesture.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) {
        self.position = clamp_position(self.position, self.size, viewport);
    }
}
