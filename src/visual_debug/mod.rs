use bevy::prelude::*;
#[cfg(feature = "visual_debug")]
use bevy_rapier3d::prelude::RapierDebugRenderPlugin;

use crate::player::components::{CharacterVelocity, MoveDirection, Player};

/// Resource for frame-by-frame debug mode
#[derive(Resource, Default)]
pub struct FrameStepMode {
  pub enabled: bool,
  advance_requested: bool,
}

pub struct VisualDebugPlugin;

impl Plugin for VisualDebugPlugin {
  fn build(&self, app: &mut App) {
    #[cfg(feature = "visual_debug")]
    if !app.is_plugin_added::<RapierDebugRenderPlugin>() {
      app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app
      .init_resource::<FrameStepMode>()
      .add_systems(PreUpdate, frame_step_control)
      .add_systems(Update, draw_debug_vectors);
  }
}

/// Controls frame-by-frame stepping mode
/// F5: Toggle frame-step mode
/// Right Arrow: Advance one frame (when in frame-step mode)
fn frame_step_control(
  keyboard: Res<ButtonInput<KeyCode>>,
  mut frame_step: ResMut<FrameStepMode>,
  mut time: ResMut<Time<Virtual>>,
) {
  if keyboard.just_pressed(KeyCode::F5) {
    frame_step.enabled = !frame_step.enabled;
    if frame_step.enabled {
      time.pause();
      info!("Frame-step mode ENABLED (press Right Arrow to advance, F5 to disable)");
    } else {
      time.unpause();
      info!("Frame-step mode DISABLED");
    }
  }

  if frame_step.enabled {
    if keyboard.just_pressed(KeyCode::ArrowRight) {
      // Request advance - unpause for this frame
      frame_step.advance_requested = true;
      time.unpause();
    } else if frame_step.advance_requested {
      // Previous frame was an advance, pause again
      frame_step.advance_requested = false;
      time.pause();
    }
  }
}

/// Draws the movement direction (green) and character velocity (yellow) as
/// world-space arrows at the character's chest height.
fn draw_debug_vectors(
  mut gizmos: Gizmos,
  players: Query<(&Transform, &MoveDirection, Option<&CharacterVelocity>), With<Player>>,
) {
  const VELOCITY_SCALE: f32 = 0.3;
  const DIRECTION_LENGTH: f32 = 1.5;

  for (transform, move_direction, velocity) in &players {
    let origin = transform.translation + Vec3::Y * 0.5;

    if move_direction.0 != Vec3::ZERO {
      gizmos.arrow(
        origin,
        origin + move_direction.0 * DIRECTION_LENGTH,
        Color::srgb(0.0, 1.0, 0.0),
      );
    }

    if let Some(velocity) = velocity {
      if velocity.0.length_squared() > 0.01 {
        gizmos.arrow(
          origin,
          origin + velocity.0 * VELOCITY_SCALE,
          Color::srgb(1.0, 1.0, 0.0),
        );
      }
    }
  }
}
