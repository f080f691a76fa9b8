#[cfg(not(target_family = "wasm"))]
use bevy::{asset::AssetEvent, ecs::message::MessageReader};
use bevy::{
  prelude::*,
  window::{PrimaryWindow, WindowResolution},
};
#[cfg(not(target_family = "wasm"))]
use bevy_common_assets::toml::TomlAssetPlugin;

#[cfg(not(target_family = "wasm"))]
use super::ConfigHandle;
use super::{ConfigLoaded, GameConfig};
use crate::core::{GravityConfig, OrbitCamera};
use crate::player::components::{CharacterMovementConfig, CharacterVelocity, Player};

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    // Native: asset-based config with hot-reload
    #[cfg(not(target_family = "wasm"))]
    app
      .add_plugins(TomlAssetPlugin::<GameConfig>::new(&["config.toml"]))
      .add_systems(Update, watch_config_changes);

    app.add_systems(PreStartup, load_config_sync).add_systems(
      Update,
      (
        update_window_on_config_change,
        update_gravity_on_config_change,
        update_camera_on_config_change,
        update_movement_on_config_change,
      ),
    );
  }
}

fn load_config_sync(
  mut commands: Commands,
  #[cfg(not(target_family = "wasm"))] asset_server: Res<AssetServer>,
) {
  // Native: set up asset handle for hot-reload
  #[cfg(not(target_family = "wasm"))]
  {
    let handle: Handle<GameConfig> = asset_server.load("config/game.config.toml");
    commands.insert_resource(ConfigHandle(handle));
  }

  // WASM: embed config at compile time
  #[cfg(target_family = "wasm")]
  let config_str = include_str!("../../assets/config/game.config.toml");
  #[cfg(not(target_family = "wasm"))]
  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");

  let config: GameConfig = toml::from_str(&config_str).expect("Failed to parse config file");

  commands.insert_resource(ConfigLoaded::from(config));
}

#[cfg(not(target_family = "wasm"))]
fn watch_config_changes(
  mut commands: Commands,
  config_handle: Res<ConfigHandle>,
  mut messages: MessageReader<AssetEvent<GameConfig>>,
  configs: Res<Assets<GameConfig>>,
) {
  for event in messages.read() {
    if let AssetEvent::Modified { id } = event {
      if config_handle.0.id() == *id {
        if let Some(config) = configs.get(&config_handle.0) {
          info!("Config reloaded!");
          commands.insert_resource(ConfigLoaded::from(config.clone()));
        }
      }
    }
  }
}

fn update_window_on_config_change(
  config: Res<ConfigLoaded>,
  mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
  if config.is_changed() {
    if let Ok(mut window) = windows.single_mut() {
      window.resolution = WindowResolution::new(config.window.width, config.window.height);
      window.title.clone_from(&config.window.title);
    }
  }
}

fn update_gravity_on_config_change(config: Res<ConfigLoaded>, mut gravity: ResMut<GravityConfig>) {
  if config.is_changed() {
    gravity.value = config.physics.gravity;
  }
}

/// Movement parameters are copied onto the character at spawn; refresh the
/// copy on reload. The velocity-driven capsule is the one carrying a
/// `CharacterVelocity` and takes the jump parameters, the walker takes the
/// walk speed.
fn update_movement_on_config_change(
  config: Res<ConfigLoaded>,
  mut players: Query<(&mut CharacterMovementConfig, Has<CharacterVelocity>), With<Player>>,
) {
  if config.is_changed() {
    for (mut movement, velocity_driven) in &mut players {
      if velocity_driven {
        movement.move_speed = config.player.jump.speed;
        movement.jump_impulse = config.player.jump.impulse;
        movement.terminal_velocity = config.player.jump.terminal_velocity;
      } else {
        movement.move_speed = config.player.walk.speed;
      }
    }
  }
}

/// Re-clamps the orbit camera when its limits change under it.
fn update_camera_on_config_change(
  config: Res<ConfigLoaded>,
  mut cameras: Query<&mut OrbitCamera>,
) {
  if config.is_changed() {
    for mut orbit in cameras.iter_mut() {
      orbit.radius = orbit
        .radius
        .clamp(config.camera.min_radius, config.camera.max_radius);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn shipped_config() -> GameConfig {
    toml::from_str(include_str!("../../assets/config/game.config.toml"))
      .expect("shipped config must parse")
  }

  #[test]
  fn movement_params_follow_config_reload() {
    let mut app = App::new();
    app.add_systems(Update, update_movement_on_config_change);

    let mut config = shipped_config();
    config.player.walk.speed = 6.0;
    config.player.jump.speed = 3.5;
    config.player.jump.impulse = 20.0;
    config.player.jump.terminal_velocity = 30.0;
    app.insert_resource(ConfigLoaded::from(config));

    let jumper = app
      .world_mut()
      .spawn((
        Player,
        CharacterVelocity::default(),
        CharacterMovementConfig {
          move_speed: 2.0,
          jump_impulse: 13.0,
          terminal_velocity: 50.0,
        },
      ))
      .id();
    let walker = app
      .world_mut()
      .spawn((
        Player,
        CharacterMovementConfig {
          move_speed: 4.0,
          jump_impulse: 0.0,
          terminal_velocity: 0.0,
        },
      ))
      .id();

    app.update();

    let movement = app.world().get::<CharacterMovementConfig>(jumper).unwrap();
    assert_eq!(movement.move_speed, 3.5);
    assert_eq!(movement.jump_impulse, 20.0);
    assert_eq!(movement.terminal_velocity, 30.0);

    let movement = app.world().get::<CharacterMovementConfig>(walker).unwrap();
    assert_eq!(movement.move_speed, 6.0);
  }
}
