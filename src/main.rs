use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
#[cfg(not(target_family = "wasm"))]
use clap::Parser;
use locomotion_lab::scenes::Demo;
use locomotion_lab::{config, core, hud, input, player, scenes, visual_debug};

#[cfg(not(target_family = "wasm"))]
#[derive(Parser, Debug)]
#[command(about = "3D character movement demos")]
struct Args {
  /// Which demo scene to run.
  #[arg(long, value_enum, default_value_t = Demo::Walk)]
  demo: Demo,
}

fn main() {
  // WASM: set up panic hook for better error messages
  #[cfg(target_family = "wasm")]
  console_error_panic_hook::set_once();

  // WASM: no CLI, run the default demo
  #[cfg(not(target_family = "wasm"))]
  let demo = Args::parse().demo;
  #[cfg(target_family = "wasm")]
  let demo = Demo::default();

  // WASM: embed config at compile time (no filesystem access)
  #[cfg(target_family = "wasm")]
  let config_str = include_str!("../assets/config/game.config.toml");
  #[cfg(not(target_family = "wasm"))]
  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");

  let config: config::GameConfig = toml::from_str(&config_str).expect("Failed to parse config");

  let mut app = App::new();

  app.insert_resource(Time::<Fixed>::from_hz(60.0));

  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        resolution: WindowResolution::new(config.window.width, config.window.height),
        title: config.window.title.clone(),
        // WASM: only Fifo (vsync) is supported on WebGL2
        #[cfg(target_family = "wasm")]
        present_mode: PresentMode::Fifo,
        #[cfg(not(target_family = "wasm"))]
        present_mode: PresentMode::AutoVsync,
        // WASM: target the canvas element and track its size
        #[cfg(target_family = "wasm")]
        canvas: Some("#bevy".to_string()),
        #[cfg(target_family = "wasm")]
        fit_canvas_to_parent: true,
        ..default()
      }),
      ..default()
    }))
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(input::InputPlugin)
    .add_plugins(player::PlayerPlugin)
    .add_plugins(hud::HudPlugin)
    .add_plugins(visual_debug::VisualDebugPlugin);

  info!("Running demo {demo:?}");
  match demo {
    Demo::Walk => {
      app.add_plugins(scenes::WalkScenePlugin);
    }
    Demo::Jump => {
      app.add_plugins(scenes::JumpScenePlugin);
    }
    Demo::Drop => {
      app.add_plugins(scenes::DropScenePlugin);
    }
  }

  app.run();
}
