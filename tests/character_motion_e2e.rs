//! E2E test for the velocity-driven capsule: fall, land, jump, land again,
//! through the real player schedule.
//!
//! Run: cargo test --test character_motion_e2e

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use locomotion_lab::core::GravityConfig;
use locomotion_lab::player::PlayerPlugin;
use locomotion_lab::player::components::*;

const JUMP_IMPULSE: f32 = 13.0;
const MAX_UPDATES: usize = 50_000;

fn test_app() -> App {
  let mut app = App::new();

  app
    .add_plugins(MinimalPlugins)
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins(PlayerPlugin)
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .insert_resource(GravityConfig { value: 18.0 });

  // Ground slab, top face at y = 0
  app.world_mut().spawn((
    Transform::from_xyz(0.0, -0.5, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(20.0, 0.5, 20.0),
  ));

  app
}

fn spawn_jumper(app: &mut App, spawn_pos: Vec3) -> Entity {
  app
    .world_mut()
    .spawn((
      Player,
      MoveDirection::default(),
      MotionState::default(),
      Transform::from_translation(spawn_pos),
      RigidBody::KinematicPositionBased,
      Collider::capsule_y(0.3, 0.6),
      KinematicCharacterController::default(),
      CharacterVelocity::default(),
      JumpKeyState::default(),
      LocomotionState::Airborne,
      CharacterMovementConfig {
        move_speed: 2.0,
        jump_impulse: JUMP_IMPULSE,
        terminal_velocity: 50.0,
      },
      PreviousPosition(spawn_pos),
      CurrentPosition(spawn_pos),
      VisualPosition(spawn_pos),
    ))
    .id()
}

/// Updates until the predicate holds, returning false if it never did.
fn run_until(app: &mut App, mut predicate: impl FnMut(&World) -> bool) -> bool {
  for _ in 0..MAX_UPDATES {
    app.update();
    if predicate(app.world()) {
      return true;
    }
  }
  false
}

fn grounded(world: &World, player: Entity) -> bool {
  world
    .get::<LocomotionState>(player)
    .is_some_and(|state| *state == LocomotionState::Grounded)
}

#[test]
fn fall_land_jump_land() {
  let mut app = test_app();
  let player = spawn_jumper(&mut app, Vec3::new(0.0, 3.0, 0.0));

  // Phase 1: fall until resting on the slab
  assert!(
    run_until(&mut app, |world| grounded(world, player)),
    "capsule never landed"
  );

  let rest_y = app.world().get::<Transform>(player).unwrap().translation.y;
  assert!(
    rest_y < 2.0 && rest_y > 0.4,
    "capsule should rest on the slab, y={rest_y}"
  );
  assert_eq!(
    app.world().get::<CharacterVelocity>(player).unwrap().0.y,
    0.0,
    "landing zeroes vertical velocity"
  );

  // Phase 2: a jump impulse lifts the capsule off the ground
  app
    .world_mut()
    .get_mut::<CharacterVelocity>(player)
    .unwrap()
    .0
    .y = JUMP_IMPULSE;

  assert!(
    run_until(&mut app, |world| {
      world.get::<Transform>(player).unwrap().translation.y > rest_y + 0.5
    }),
    "capsule never left the ground"
  );

  // Phase 3: gravity brings it back down to rest
  assert!(
    run_until(&mut app, |world| grounded(world, player)
      && world.get::<Transform>(player).unwrap().translation.y < rest_y + 0.1),
    "capsule never landed again"
  );
  assert_eq!(
    app.world().get::<CharacterVelocity>(player).unwrap().0.y,
    0.0
  );
}
