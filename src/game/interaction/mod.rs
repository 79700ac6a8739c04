/// Pointer gestures applied to the fluid grid.
///
/// - primary: inject fluid into the hovered tile
/// - secondary: drain the hovered column down to the first blocked tile
/// - tertiary: toggle passability, dragging to paint

use bevy::prelude::*;

mod controller;
mod view;


pub use controller::{BuildMode, InteractionController, InteractionTuning, PressOrigin};
pub use view::{BorderClass, TileView};

use crate::game::input::InputEvent;
use crate::game::tiles::TileGrid;
use crate::game::TickSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            apply_input_events
                .in_set(TickSet::Interaction)
                .run_if(resource_exists::<TileGrid>)
                .run_if(resource_exists::<InteractionController>),
        );
    }
}

/// Feed this tick's input events to the controller in arrival order.
pub fn apply_input_events(
    mut events: MessageReader<InputEvent>,
    mut controller: ResMut<InteractionController>,
    mut grid: ResMut<TileGrid>,
) {
    for event in events.read() {
        controller.handle(event, &mut grid);
    }
}
