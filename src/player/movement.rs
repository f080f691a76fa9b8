use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{
  CharacterMovementConfig, CharacterVelocity, JumpKeyState, LocomotionState, MotionState,
  MoveDirection, Player,
};
use super::direction::{self, MoveInput};
use crate::core::{GameCamera, GravityConfig};
use crate::input::{Jump, MoveBackward, MoveForward, MoveLeft, MoveRight, PlayerInput};

/// True while the action's key is held this tick.
fn action_held<A: InputAction>(
  actions: &Actions<PlayerInput>,
  states: &Query<&ActionState, With<Action<A>>>,
) -> bool {
  actions.iter().any(|action_entity| {
    states
      .get(action_entity)
      .is_ok_and(|state| matches!(state, ActionState::Fired | ActionState::Ongoing))
  })
}

/// Recomputes the world-space movement direction from the pressed keys and
/// the camera heading. Runs every simulation tick; a missing camera leaves
/// the previous direction untouched and the tick is a no-op downstream.
pub fn refresh_move_direction(
  mut players: Query<(&mut MoveDirection, &Actions<PlayerInput>), With<Player>>,
  cameras: Query<&Transform, With<GameCamera>>,
  forward_keys: Query<&ActionState, With<Action<MoveForward>>>,
  backward_keys: Query<&ActionState, With<Action<MoveBackward>>>,
  left_keys: Query<&ActionState, With<Action<MoveLeft>>>,
  right_keys: Query<&ActionState, With<Action<MoveRight>>>,
) {
  let Ok(camera) = cameras.single() else {
    return;
  };
  let camera_forward = *camera.forward();

  for (mut move_direction, actions) in &mut players {
    let input = MoveInput {
      forward: action_held(actions, &forward_keys),
      backward: action_held(actions, &backward_keys),
      left: action_held(actions, &left_keys),
      right: action_held(actions, &right_keys),
    };
    move_direction.0 = direction::world_direction(camera_forward, input);
  }
}

/// Idle exactly when the movement direction is zero.
pub fn update_motion_state(
  mut players: Query<(&MoveDirection, &mut MotionState), With<Player>>,
) {
  for (move_direction, mut state) in &mut players {
    let next = if move_direction.0 == Vec3::ZERO {
      MotionState::Idle
    } else {
      MotionState::Running
    };
    if *state != next {
      debug!("motion {:?} -> {:?}", *state, next);
      *state = next;
    }
  }
}

/// Applies the jump impulse on the key-down edge, and only while grounded.
/// A press that starts airborne is discarded, not buffered.
pub fn handle_jump_input(
  mut players: Query<
    (
      &mut CharacterVelocity,
      &mut JumpKeyState,
      &LocomotionState,
      &CharacterMovementConfig,
      &Actions<PlayerInput>,
    ),
    With<Player>,
  >,
  jump_keys: Query<&ActionState, With<Action<Jump>>>,
) {
  for (mut velocity, mut key_state, state, config, actions) in &mut players {
    let pressed = action_held(actions, &jump_keys);
    if jump_edge(pressed, &mut key_state.was_pressed, *state) {
      velocity.0.y = config.jump_impulse;
      debug!("jump, vertical velocity {}", config.jump_impulse);
    }
  }
}

/// True only on the key-down edge while grounded. A held key never
/// re-fires, and a press that starts airborne is not consumed on landing.
fn jump_edge(pressed: bool, was_pressed: &mut bool, state: LocomotionState) -> bool {
  let edge = pressed && !*was_pressed;
  *was_pressed = pressed;
  edge && state == LocomotionState::Grounded
}

/// Velocity-driven strategy: horizontal velocity is set directly from the
/// movement direction, leaving the vertical component to gravity and jumps.
pub fn handle_movement_input(
  mut players: Query<
    (&MoveDirection, &mut CharacterVelocity, &CharacterMovementConfig),
    With<Player>,
  >,
) {
  for (move_direction, mut velocity, config) in &mut players {
    velocity.0.x = move_direction.0.x * config.move_speed;
    velocity.0.z = move_direction.0.z * config.move_speed;
  }
}

/// Integrates gravity on the vertical velocity while airborne, clamped to a
/// terminal velocity. Grounded characters are left alone so a fresh jump
/// impulse survives until physics lifts them off.
pub fn apply_gravity(
  mut players: Query<
    (&mut CharacterVelocity, &LocomotionState, &CharacterMovementConfig),
    With<Player>,
  >,
  gravity: Res<GravityConfig>,
  time: Res<Time>,
) {
  for (mut velocity, state, config) in &mut players {
    if *state == LocomotionState::Airborne {
      velocity.0.y -= gravity.value * time.delta_secs();
      velocity.0.y = velocity.0.y.max(-config.terminal_velocity);
    }
  }
}

/// Position-driven strategy: the collision sweep moves the character by
/// `direction * speed * dt`. Only runs for characters without a velocity.
pub fn apply_walk_translation(
  mut players: Query<
    (
      &MoveDirection,
      &CharacterMovementConfig,
      &mut KinematicCharacterController,
    ),
    (With<Player>, Without<CharacterVelocity>),
  >,
  time: Res<Time>,
) {
  for (move_direction, config, mut controller) in &mut players {
    controller.translation = Some(move_direction.0 * config.move_speed * time.delta_secs());
  }
}

pub fn apply_velocity_to_controller(
  mut players: Query<
    (&CharacterVelocity, &mut KinematicCharacterController),
    With<Player>,
  >,
  time: Res<Time>,
) {
  for (velocity, mut controller) in &mut players {
    controller.translation = Some(velocity.0 * time.delta_secs());
  }
}

/// Runs after physics to read fresh ground state from the controller output.
pub fn sync_ground_from_physics(
  mut players: Query<
    (
      &mut LocomotionState,
      &mut CharacterVelocity,
      Option<&KinematicCharacterControllerOutput>,
    ),
    With<Player>,
  >,
) {
  for (mut state, mut velocity, output) in &mut players {
    let physics_grounded = output.is_some_and(|o| o.grounded);

    match *state {
      LocomotionState::Grounded => {
        if !physics_grounded {
          *state = LocomotionState::Airborne;
        }
      }
      LocomotionState::Airborne => {
        if physics_grounded {
          // Landing: zero vertical velocity and transition to grounded
          velocity.0.y = 0.0;
          *state = LocomotionState::Grounded;
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn jump_fires_only_on_grounded_key_edge() {
    let mut was_pressed = false;

    assert!(jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
    // Holding the key does not re-fire
    assert!(!jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
    assert!(!jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
    // Releasing re-arms the edge
    assert!(!jump_edge(false, &mut was_pressed, LocomotionState::Grounded));
    assert!(jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
  }

  #[test]
  fn airborne_press_is_discarded_not_buffered() {
    let mut was_pressed = false;

    assert!(!jump_edge(true, &mut was_pressed, LocomotionState::Airborne));
    // Still held on landing: the airborne press was dropped, not queued
    assert!(!jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
    // A fresh press after landing jumps
    assert!(!jump_edge(false, &mut was_pressed, LocomotionState::Grounded));
    assert!(jump_edge(true, &mut was_pressed, LocomotionState::Grounded));
  }

  #[test]
  fn edge_state_is_tracked_per_character() {
    let mut first = false;
    let mut second = false;

    assert!(jump_edge(true, &mut first, LocomotionState::Grounded));
    // The second character's key state is independent of the first's
    assert!(jump_edge(true, &mut second, LocomotionState::Grounded));
    assert!(!jump_edge(true, &mut first, LocomotionState::Grounded));
  }
}
