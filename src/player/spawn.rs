use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{
  CharacterMovementConfig, CharacterVelocity, CurrentPosition, JumpKeyState, LocomotionState,
  MotionState, MoveDirection, Player, PlayerVisual, PreviousPosition, VisualPosition,
};
use crate::config::{ConfigLoaded, PlayerConfig};
use crate::input::{PlayerInput, player_input_actions};

/// Spawn the position-driven walker: planar movement only, no vertical state.
pub fn spawn_walker(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let player = &config.player;
  let spawn_pos = Vec3::from(player.spawn);

  commands.spawn((
    Player,
    MoveDirection::default(),
    MotionState::default(),
    Transform::from_translation(spawn_pos),
    RigidBody::KinematicPositionBased,
    capsule_collider(player),
    character_controller(player),
    CharacterMovementConfig {
      move_speed: player.walk.speed,
      jump_impulse: 0.0,
      terminal_velocity: 0.0,
    },
    interpolation_bundle(spawn_pos),
    PlayerInput,
    player_input_actions(),
  ));

  spawn_visual(&mut commands, &mut meshes, &mut materials, player, spawn_pos);
  info!("Spawned walker at {spawn_pos:?}");
}

/// Spawn the velocity-driven capsule: gravity, jumping, ground tracking.
pub fn spawn_jumper(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let player = &config.player;
  let spawn_pos = Vec3::from(player.spawn);

  commands.spawn((
    Player,
    MoveDirection::default(),
    MotionState::default(),
    Transform::from_translation(spawn_pos),
    RigidBody::KinematicPositionBased,
    capsule_collider(player),
    character_controller(player),
    CharacterVelocity::default(),
    JumpKeyState::default(),
    LocomotionState::Airborne, // Start airborne so gravity applies until landing
    CharacterMovementConfig {
      move_speed: player.jump.speed,
      jump_impulse: player.jump.impulse,
      terminal_velocity: player.jump.terminal_velocity,
    },
    interpolation_bundle(spawn_pos),
    PlayerInput,
    player_input_actions(),
  ));

  spawn_visual(&mut commands, &mut meshes, &mut materials, player, spawn_pos);
  info!("Spawned jumper at {spawn_pos:?}");
}

fn capsule_collider(player: &PlayerConfig) -> Collider {
  // Rapier capsule_y uses half_height (cylinder part) and radius
  let half_height = (player.capsule_height - 2.0 * player.capsule_radius) / 2.0;
  Collider::capsule_y(half_height, player.capsule_radius)
}

fn character_controller(player: &PlayerConfig) -> KinematicCharacterController {
  KinematicCharacterController {
    snap_to_ground: Some(CharacterLength::Absolute(player.snap_to_ground)),
    max_slope_climb_angle: player.max_slope_angle.to_radians(),
    min_slope_slide_angle: player.max_slope_angle.to_radians(),
    apply_impulse_to_dynamic_bodies: true,
    ..default()
  }
}

fn interpolation_bundle(spawn_pos: Vec3) -> impl Bundle {
  (
    PreviousPosition(spawn_pos),
    CurrentPosition(spawn_pos),
    VisualPosition(spawn_pos),
  )
}

/// Visual entity - separate root entity that follows VisualPosition, so the
/// rendered capsule moves smoothly between fixed ticks.
fn spawn_visual(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  materials: &mut Assets<StandardMaterial>,
  player: &PlayerConfig,
  spawn_pos: Vec3,
) {
  let cylinder_height = player.capsule_height - 2.0 * player.capsule_radius;

  commands.spawn((
    PlayerVisual,
    Mesh3d(meshes.add(Capsule3d::new(player.capsule_radius, cylinder_height))),
    MeshMaterial3d(materials.add(Color::srgb(0.85, 0.55, 0.25))),
    Transform::from_translation(spawn_pos),
  ));
}
