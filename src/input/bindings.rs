use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Jump, MoveBackward, MoveForward, MoveLeft, MoveRight, PlayerInput};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<MoveForward>::new(),
          bindings![KeyCode::KeyW, KeyCode::ArrowUp],
      ),
      (
          Action::<MoveBackward>::new(),
          bindings![KeyCode::KeyS, KeyCode::ArrowDown],
      ),
      (
          Action::<MoveLeft>::new(),
          bindings![KeyCode::KeyA, KeyCode::ArrowLeft],
      ),
      (
          Action::<MoveRight>::new(),
          bindings![KeyCode::KeyD, KeyCode::ArrowRight],
      ),
      (
          Action::<Jump>::new(),
          bindings![KeyCode::Space],
      ),
  ])
}
