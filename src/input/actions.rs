use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

// One digital action per movement key, so opposing keys can be resolved
// explicitly by the direction calculator.

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct MoveForward;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct MoveBackward;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct MoveLeft;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct MoveRight;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Jump;
