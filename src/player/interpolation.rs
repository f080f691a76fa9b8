use bevy::prelude::*;

use super::components::{
  CurrentPosition, Player, PlayerVisual, PreviousPosition, VisualPosition,
};

/// Runs in FixedFirst: Shift positions for interpolation
pub fn shift_positions(
  mut players: Query<(&mut PreviousPosition, &CurrentPosition), With<Player>>,
) {
  for (mut prev, current) in &mut players {
    prev.0 = current.0;
  }
}

/// Runs after Rapier writeback: Store new current position
pub fn store_current_position(
  mut players: Query<(&Transform, &mut CurrentPosition), With<Player>>,
) {
  for (transform, mut current) in &mut players {
    current.0 = transform.translation;
  }
}

/// Runs in Update: Interpolate between the last two fixed ticks for smooth
/// rendering
pub fn interpolate_visual(
  mut players: Query<(&PreviousPosition, &CurrentPosition, &mut VisualPosition), With<Player>>,
  fixed_time: Res<Time<Fixed>>,
) {
  let t = fixed_time.overstep_fraction();

  for (prev, current, mut visual) in &mut players {
    visual.0 = prev.0.lerp(current.0, t);
  }
}

/// Moves the visual entity to the interpolated position, carrying over the
/// physics entity's facing.
pub fn sync_visual_transform(
  players: Query<(&VisualPosition, &Transform), With<Player>>,
  mut visuals: Query<&mut Transform, (With<PlayerVisual>, Without<Player>)>,
) {
  let Ok((visual_pos, player_transform)) = players.single() else {
    return;
  };
  let Ok(mut visual_transform) = visuals.single_mut() else {
    return;
  };

  visual_transform.translation = visual_pos.0;
  visual_transform.rotation = player_transform.rotation;
}
