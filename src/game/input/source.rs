use bevy::prelude::*;

use super::events::{InputEvent, InputKey, PointerState};

pub const DEFAULT_HOLD_COOLDOWN_MS: f32 = 200.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct HoldTimer {
    cooldown_ms: f32,
    total_ms: f32,
}

/// Turns successive pointer samples into discrete [`InputEvent`]s.
///
/// Presses are level-triggered with a cooldown: a held button fires once on
/// contact and again every `hold_threshold_ms` for as long as it stays down.
#[derive(Resource, Debug, Clone)]
pub struct InputEventSource {
    hold_threshold_ms: f32,
    timers: [HoldTimer; 3],
    previous: Option<PointerState>,
}

impl Default for InputEventSource {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_COOLDOWN_MS)
    }
}

impl InputEventSource {
    pub fn new(hold_threshold_ms: f32) -> Self {
        Self {
            hold_threshold_ms,
            timers: [HoldTimer::default(); 3],
            previous: None,
        }
    }

    pub fn hold_threshold_ms(&self) -> f32 {
        self.hold_threshold_ms
    }

    /// Position from the most recent sample.
    pub fn pointer_position(&self) -> Option<Vec2> {
        self.previous.map(|s| s.position)
    }

    pub fn hold_cooldown_ms(&self, key: InputKey) -> f32 {
        self.timers[key as usize].cooldown_ms
    }

    pub fn total_hold_ms(&self, key: InputKey) -> f32 {
        self.timers[key as usize].total_ms
    }

    /// Let the next sample with `key` held fire a press immediately.
    pub fn reset_cooldown(&mut self, key: InputKey) {
        self.timers[key as usize].cooldown_ms = 0.0;
    }

    /// Compare `current` with the previous sample and emit the resulting
    /// events: a move first (if the position changed), then each button in
    /// [`InputKey::ALL`] order.
    pub fn poll(&mut self, current: PointerState, elapsed_ms: f32) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(previous) = self.previous {
            if previous.position != current.position {
                events.push(InputEvent::Moved { current, previous });
            }
        }

        for key in InputKey::ALL {
            let was_pressed = self.previous.is_some_and(|p| p.is_pressed(key));
            let is_pressed = current.is_pressed(key);
            let threshold = self.hold_threshold_ms;
            let timer = &mut self.timers[key as usize];

            if was_pressed {
                if is_pressed {
                    timer.cooldown_ms = (timer.cooldown_ms - elapsed_ms).max(0.0);
                    timer.total_ms += elapsed_ms;
                } else {
                    *timer = HoldTimer::default();
                    events.push(InputEvent::Released { key });
                }
            }

            if is_pressed && timer.cooldown_ms <= 0.0 {
                events.push(InputEvent::Pressed {
                    key,
                    hold_duration_ms: timer.total_ms,
                });
                timer.cooldown_ms = threshold;
            }
        }

        self.previous = Some(current);
        events
    }
}
