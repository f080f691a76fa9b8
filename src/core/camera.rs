use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::player::components::{Player, VisualPosition};

/// Keep the camera above the ground plane and away from the pole.
const MIN_PITCH: f32 = 0.05;
const MAX_PITCH: f32 = 1.5;

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

/// Spherical-coordinate orbit camera around a target point.
///
/// Yaw wraps freely, pitch is clamped to stay between the horizon and the
/// pole, radius is clamped to the configured zoom range. The movement basis
/// for the character is derived from this camera's transform.
#[derive(Component)]
pub struct OrbitCamera {
  /// Horizontal angle in radians (wraps around).
  pub yaw: f32,
  /// Vertical angle in radians, 0 = horizon.
  pub pitch: f32,
  /// Distance from the target.
  pub radius: f32,
  pub target: Vec3,
}

pub fn setup_camera(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.spawn((
    GameCamera,
    Camera3d::default(),
    OrbitCamera {
      yaw: -FRAC_PI_2,
      pitch: FRAC_PI_4,
      radius: config.camera.radius,
      target: Vec3::ZERO,
    },
    Transform::default(),
  ));
}

/// Left-mouse drag orbits, scroll wheel zooms.
pub fn orbit_camera_input(
  mouse_buttons: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  mouse_scroll: Res<AccumulatedMouseScroll>,
  config: Res<ConfigLoaded>,
  mut cameras: Query<&mut OrbitCamera>,
) {
  let Ok(mut orbit) = cameras.single_mut() else {
    return;
  };

  if mouse_buttons.pressed(MouseButton::Left) {
    let delta = mouse_motion.delta;
    orbit.yaw -= delta.x * config.camera.orbit_sensitivity;
    orbit.pitch =
      (orbit.pitch + delta.y * config.camera.orbit_sensitivity).clamp(MIN_PITCH, MAX_PITCH);
  }

  let scroll = mouse_scroll.delta.y;
  if scroll != 0.0 {
    orbit.radius = (orbit.radius - scroll * config.camera.zoom_step)
      .clamp(config.camera.min_radius, config.camera.max_radius);
  }
}

/// Tracks the character's interpolated position, offset upward so the camera
/// looks over the character rather than at its feet. No smoothing: the target
/// uses the exact same position as the visual to prevent jitter.
pub fn follow_player_target(
  players: Query<&VisualPosition, With<Player>>,
  config: Res<ConfigLoaded>,
  mut cameras: Query<&mut OrbitCamera>,
) {
  let Ok(visual_pos) = players.single() else {
    return;
  };
  let Ok(mut orbit) = cameras.single_mut() else {
    return;
  };

  orbit.target = Vec3::new(
    visual_pos.0.x,
    config.camera.target_height,
    visual_pos.0.z,
  );
}

/// Places the camera on its orbit sphere and aims it at the target.
pub fn sync_camera_transform(
  mut cameras: Query<(&OrbitCamera, &mut Transform), With<GameCamera>>,
) {
  for (orbit, mut transform) in &mut cameras {
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = orbit.pitch.sin_cos();
    let offset = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw) * orbit.radius;
    transform.translation = orbit.target + offset;
    transform.look_at(orbit.target, Vec3::Y);
  }
}
