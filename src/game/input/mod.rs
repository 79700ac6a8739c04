/// Pointer input - device sampling and press/hold/release events.
///
/// The [`InputEventSource`] resource is polled once per simulation tick and
/// its events are published as [`InputEvent`] messages for the interaction
/// layer, in the order they were produced.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

mod device;
mod events;
mod source;


pub use device::{PointerDevice, WindowPointer};
pub use events::{InputEvent, InputKey, PointerState};
pub use source::{InputEventSource, DEFAULT_HOLD_COOLDOWN_MS};

use crate::game::TickSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputEventSource>()
            .add_message::<InputEvent>()
            .add_systems(FixedUpdate, poll_pointer.in_set(TickSet::Input));
    }
}

/// Sample the mouse and publish whatever events the source derives from it.
pub fn poll_pointer(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut source: ResMut<InputEventSource>,
    mut events: MessageWriter<InputEvent>,
) {
    let device = WindowPointer {
        window: windows.single().ok(),
        buttons: buttons.as_deref(),
        last_position: source.pointer_position().unwrap_or_default(),
    };

    let elapsed_ms = time.delta_secs() * 1000.0;
    for event in source.poll(device.sample(), elapsed_ms) {
        events.write(event);
    }
}
