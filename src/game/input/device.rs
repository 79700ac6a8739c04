use bevy::prelude::*;

use super::events::{InputKey, PointerState};

/// Something that can report the pointer's current position and buttons.
pub trait PointerDevice {
    fn sample(&self) -> PointerState;
}

impl PointerDevice for PointerState {
    fn sample(&self) -> PointerState {
        *self
    }
}

/// Reads the primary window's cursor and Bevy's mouse button state.
///
/// When the cursor leaves the window its last known position is reported,
/// so leaving the window does not count as a move.
pub struct WindowPointer<'a> {
    pub window: Option<&'a Window>,
    pub buttons: Option<&'a ButtonInput<MouseButton>>,
    pub last_position: Vec2,
}

impl PointerDevice for WindowPointer<'_> {
    fn sample(&self) -> PointerState {
        let position = self
            .window
            .and_then(|w| w.cursor_position())
            .unwrap_or(self.last_position);

        let mut state = PointerState::at(position);
        if let Some(buttons) = self.buttons {
            for key in InputKey::ALL {
                if buttons.pressed(key.mouse_button()) {
                    state = state.with_pressed(key);
                }
            }
        }
        state
    }
}
