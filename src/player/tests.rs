use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::{interpolation, movement};
use crate::core::GravityConfig;

fn physics_app() -> App {
  let mut app = App::new();

  app
    .add_plugins(MinimalPlugins)
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .insert_resource(GravityConfig { value: 18.0 });

  // Input-free subset of the player schedule: gravity integration, the
  // controller sweep and the post-physics ground sync.
  app
    .add_systems(FixedFirst, interpolation::shift_positions)
    .add_systems(
      FixedUpdate,
      (
        movement::apply_gravity,
        movement::apply_velocity_to_controller,
      )
        .chain()
        .before(PhysicsSet::SyncBackend),
    )
    .add_systems(
      FixedUpdate,
      (
        movement::sync_ground_from_physics,
        interpolation::store_current_position,
      )
        .chain()
        .after(PhysicsSet::Writeback),
    );

  app
}

fn spawn_capsule(app: &mut App, spawn_pos: Vec3) -> Entity {
  app
    .world_mut()
    .spawn((
      Player,
      Transform::from_translation(spawn_pos),
      RigidBody::KinematicPositionBased,
      Collider::capsule_y(0.3, 0.6),
      KinematicCharacterController::default(),
      MoveDirection::default(),
      CharacterVelocity::default(),
      CharacterMovementConfig {
        move_speed: 2.0,
        jump_impulse: 13.0,
        terminal_velocity: 50.0,
      },
      LocomotionState::Airborne,
      PreviousPosition(spawn_pos),
      CurrentPosition(spawn_pos),
      VisualPosition(spawn_pos),
    ))
    .id()
}

/// Updates until the predicate holds, returning false if it never did.
/// Updates accumulate real elapsed time, so the cap is generous.
fn run_until(app: &mut App, mut predicate: impl FnMut(&World) -> bool) -> bool {
  for _ in 0..50_000 {
    app.update();
    if predicate(app.world()) {
      return true;
    }
  }
  false
}

#[test]
fn capsule_falls_with_gravity() {
  let mut app = physics_app();

  let spawn_pos = Vec3::new(0.0, 40.0, 0.0);
  let player = spawn_capsule(&mut app, spawn_pos);

  // First update to initialize Rapier
  app.update();

  let initial_y = app.world().get::<Transform>(player).unwrap().translation.y;

  assert!(
    run_until(&mut app, |world| {
      world.get::<Transform>(player).unwrap().translation.y < initial_y - 2.0
    }),
    "Capsule never fell"
  );

  let final_vel = app.world().get::<CharacterVelocity>(player).unwrap().0;
  assert!(
    final_vel.y < -1.0,
    "Vertical velocity should build up while falling. vel_y={}",
    final_vel.y
  );
}

#[test]
fn landing_grounds_and_stops_vertical_motion() {
  let mut app = physics_app();

  // Ground slab, top face at y = 0
  app.world_mut().spawn((
    Transform::from_xyz(0.0, -0.5, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(20.0, 0.5, 20.0),
  ));

  // Capsule half extent is 0.9, so resting center is y ~= 0.9
  let player = spawn_capsule(&mut app, Vec3::new(0.0, 3.0, 0.0));

  assert!(
    run_until(&mut app, |world| {
      world
        .get::<LocomotionState>(player)
        .is_some_and(|state| *state == LocomotionState::Grounded)
    }),
    "Capsule never landed"
  );

  let settled_y = app.world().get::<Transform>(player).unwrap().translation.y;
  assert!(
    settled_y < 2.0 && settled_y > 0.4,
    "Capsule should rest on the slab, not float or tunnel. y={settled_y}"
  );

  // Once landed, position must hold steady
  for _ in 0..300 {
    app.update();
  }
  let later_y = app.world().get::<Transform>(player).unwrap().translation.y;
  assert!(
    (settled_y - later_y).abs() < 0.05,
    "Resting capsule drifted from {settled_y} to {later_y}"
  );

  let vel = app.world().get::<CharacterVelocity>(player).unwrap().0;
  assert_eq!(vel.y, 0.0, "Landing must zero vertical velocity");
}
