use bevy::prelude::*;

use super::components::{MoveDirection, Player};

/// Turns the character to face its movement direction. Idle characters keep
/// their last facing.
pub fn face_move_direction(mut players: Query<(&MoveDirection, &mut Transform), With<Player>>) {
  for (move_direction, mut transform) in &mut players {
    if move_direction.0 == Vec3::ZERO {
      continue;
    }
    transform.look_to(move_direction.0, Vec3::Y);
  }
}
