//! Character state panel: motion and locomotion state, movement direction
//! and velocity, plus the control hints.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use crate::player::components::{
  CharacterVelocity, LocomotionState, MotionState, MoveDirection, Player,
};

pub struct HudPlugin;

impl Plugin for HudPlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
      app.add_plugins(EguiPlugin::default());
    }
    app.add_systems(EguiPrimaryContextPass, render_state_panel);
  }
}

fn render_state_panel(
  mut contexts: EguiContexts,
  players: Query<
    (
      &MoveDirection,
      &MotionState,
      Option<&LocomotionState>,
      Option<&CharacterVelocity>,
    ),
    With<Player>,
  >,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };
  // No character in this scene, no panel
  let Ok((move_direction, motion, locomotion, velocity)) = players.single() else {
    return;
  };

  egui::Window::new("Character")
    .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
    .default_width(200.0)
    .resizable(false)
    .movable(false)
    .show(ctx, |ui| {
      ui.label(format!("motion: {motion:?}"));
      if let Some(locomotion) = locomotion {
        ui.label(format!("locomotion: {locomotion:?}"));
      }
      let d = move_direction.0;
      ui.label(format!("direction: [{:+.2} {:+.2} {:+.2}]", d.x, d.y, d.z));
      if let Some(velocity) = velocity {
        let v = velocity.0;
        ui.label(format!("velocity: [{:+.2} {:+.2} {:+.2}]", v.x, v.y, v.z));
      }
      ui.separator();
      ui.label("WASD move, Space jump");
      ui.label("drag orbits, scroll zooms");
    });
}
