mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub radius: f32,
  pub min_radius: f32,
  pub max_radius: f32,
  pub target_height: f32,
  pub orbit_sensitivity: f32,
  pub zoom_step: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
  /// Downward acceleration applied to airborne characters (m/s^2).
  pub gravity: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn: [f32; 3],
  pub capsule_height: f32,
  pub capsule_radius: f32,
  pub snap_to_ground: f32,
  pub max_slope_angle: f32,
  pub walk: WalkConfig,
  pub jump: JumpConfig,
}

/// Parameters for the position-driven walker demo.
#[derive(Deserialize, Debug, Clone)]
pub struct WalkConfig {
  pub speed: f32,
}

/// Parameters for the velocity-driven capsule demo.
#[derive(Deserialize, Debug, Clone)]
pub struct JumpConfig {
  pub speed: f32,
  pub impulse: f32,
  pub terminal_velocity: f32,
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      physics: config.physics,
      player: config.player,
    }
  }
}
