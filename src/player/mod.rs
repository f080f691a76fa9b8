pub mod components;
pub mod direction;
mod facing;
pub mod interpolation;
pub mod movement;
pub mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    // Scene plugins decide which spawner to run; every system here is a
    // no-op until a player exists.
    app
      // FixedFirst: Shift positions for interpolation
      .add_systems(FixedFirst, interpolation::shift_positions)
      .add_systems(
        FixedUpdate,
        (
          movement::refresh_move_direction,    // Keys + camera -> direction
          movement::update_motion_state,       // Idle / Running
          movement::handle_jump_input,         // Grounded jump edge
          movement::handle_movement_input,     // Horizontal velocity
          movement::apply_gravity,             // Vertical velocity (Airborne only)
          movement::apply_walk_translation,    // Position-driven strategy
          movement::apply_velocity_to_controller, // Velocity-driven strategy
          facing::face_move_direction,
        )
          .chain()
          .before(PhysicsSet::SyncBackend),
      )
      // Read physics output AFTER Rapier writeback (still in FixedUpdate)
      .add_systems(
        FixedUpdate,
        (
          movement::sync_ground_from_physics,
          interpolation::store_current_position,
        )
          .chain()
          .after(PhysicsSet::Writeback),
      )
      // Update: Interpolate the visual entity for smooth rendering
      .add_systems(
        Update,
        (
          interpolation::interpolate_visual,
          interpolation::sync_visual_transform,
        )
          .chain(),
      );
  }
}
