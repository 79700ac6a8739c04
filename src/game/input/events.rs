use bevy::prelude::*;

/// Logical pointer buttons the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Inject fluid (left mouse button).
    Primary = 0,
    /// Drain a column (right mouse button).
    Secondary = 1,
    /// Toggle passability (middle mouse button).
    Tertiary = 2,
}

impl InputKey {
    /// Polling and dispatch order.
    pub const ALL: [InputKey; 3] = [InputKey::Primary, InputKey::Secondary, InputKey::Tertiary];

    pub fn mouse_button(self) -> MouseButton {
        match self {
            InputKey::Primary => MouseButton::Left,
            InputKey::Secondary => MouseButton::Right,
            InputKey::Tertiary => MouseButton::Middle,
        }
    }
}

/// One sample of the pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Window position in logical pixels, top-left origin.
    pub position: Vec2,
    pub pressed: [bool; 3],
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            pressed: [false; 3],
        }
    }

    pub fn with_pressed(mut self, key: InputKey) -> Self {
        self.pressed[key as usize] = true;
        self
    }

    pub fn is_pressed(&self, key: InputKey) -> bool {
        self.pressed[key as usize]
    }
}

/// Discrete input events produced by [`InputEventSource`](super::InputEventSource).
///
/// Within one poll a `Moved` event always precedes any button events, since
/// button handlers act on the hover state the move establishes.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Moved {
        current: PointerState,
        previous: PointerState,
    },
    /// Fired on first contact and then once per hold cooldown while held.
    /// `hold_duration_ms` is 0 on first contact.
    Pressed { key: InputKey, hold_duration_ms: f32 },
    Released { key: InputKey },
}
