use bevy::prelude::*;

#[derive(Component)]
pub struct Player;

/// Marker for the visual entity (capsule mesh, camera anchor)
#[derive(Component)]
pub struct PlayerVisual;

/// World-space planar movement direction for the current tick.
/// Unit length, or exactly zero when no keys are held or they cancel out.
#[derive(Component, Default)]
pub struct MoveDirection(pub Vec3);

/// Character velocity for the velocity-driven strategy. Horizontal
/// components are overwritten from input each tick; the vertical component
/// integrates under gravity and jump impulses. Absent on the walker, whose
/// locomotion is position-driven.
#[derive(Component, Default)]
pub struct CharacterVelocity(pub Vec3);

/// Jump key level from the previous tick, tracked per character so the
/// impulse fires only on the key-down edge.
#[derive(Component, Default)]
pub struct JumpKeyState {
  pub was_pressed: bool,
}

#[derive(Component)]
pub struct CharacterMovementConfig {
  pub move_speed: f32,
  pub jump_impulse: f32,
  pub terminal_velocity: f32,
}

#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionState {
  #[default]
  Grounded,
  Airborne,
}

/// Stand-in for the Run/Idle animation switch: Idle exactly when the
/// movement direction is zero.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
  #[default]
  Idle,
  Running,
}

/// Physics position from the previous fixed tick, for interpolation.
#[derive(Component)]
pub struct PreviousPosition(pub Vec3);

/// Physics position from the latest fixed tick.
#[derive(Component)]
pub struct CurrentPosition(pub Vec3);

/// The interpolated visual position for this frame.
#[derive(Component, Default)]
pub struct VisualPosition(pub Vec3);
