pub(crate) mod camera;
mod physics;

use bevy::prelude::*;
use bevy::transform::TransformSystems;
pub use camera::{GameCamera, OrbitCamera};
pub use physics::GravityConfig;

pub struct CorePlugin;

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(physics::PhysicsPlugin)
      .add_systems(Startup, camera::setup_camera)
      .add_systems(Update, camera::orbit_camera_input)
      .add_systems(
        PostUpdate,
        (camera::follow_player_target, camera::sync_camera_transform)
          .chain()
          .before(TransformSystems::Propagate),
      );
  }
}
