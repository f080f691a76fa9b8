//! Demo scenes. Each scene is a plugin that dresses the world and picks a
//! locomotion strategy; the demo to run is chosen on the command line.

mod drop;
mod jump;
mod walk;

use bevy::prelude::*;
pub use drop::DropScenePlugin;
pub use jump::JumpScenePlugin;
pub use walk::WalkScenePlugin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_family = "wasm"), derive(clap::ValueEnum))]
pub enum Demo {
  /// Kinematic walker: camera-relative movement with a collision sweep.
  #[default]
  Walk,
  /// Velocity-driven capsule: gravity, jumping, pushable crates.
  Jump,
  /// No character: a dynamic cube drops onto the ground.
  Drop,
}

/// Key light + ambient fill shared by all scenes.
pub(crate) fn spawn_demo_light(commands: &mut Commands) {
  commands.insert_resource(AmbientLight {
    color: Color::WHITE,
    brightness: 200.0,
    ..default()
  });
  commands.spawn((
    DirectionalLight {
      illuminance: 8_000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_xyz(6.0, 12.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
  ));
}
