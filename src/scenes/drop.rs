//! Plain dynamic-body demo: a cube with restitution drops onto a fixed
//! ground under the physics engine's own gravity. No character; collider
//! shapes are always rendered here.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::spawn_demo_light;

const CUBE_SIZE: f32 = 1.0;
const GROUND_SIZE: f32 = 6.0;
const GROUND_THICKNESS: f32 = 0.2;
const DROP_HEIGHT: f32 = 5.0;

pub struct DropScenePlugin;

impl Plugin for DropScenePlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<RapierDebugRenderPlugin>() {
      app.add_plugins(RapierDebugRenderPlugin::default());
    }
    app.add_systems(Startup, setup_scene);
  }
}

fn setup_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
) {
  spawn_demo_light(&mut commands);

  commands.spawn((
    Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE))),
    MeshMaterial3d(materials.add(Color::srgb_u8(0x97, 0xae, 0x3b))),
    Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(GROUND_SIZE / 2.0, GROUND_THICKNESS / 2.0, GROUND_SIZE / 2.0),
  ));

  commands.spawn((
    Mesh3d(meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE))),
    MeshMaterial3d(materials.add(Color::srgb(0.8, 0.3, 0.3))),
    Transform::from_xyz(0.0, DROP_HEIGHT, 0.0),
    RigidBody::Dynamic,
    Collider::cuboid(CUBE_SIZE / 2.0, CUBE_SIZE / 2.0, CUBE_SIZE / 2.0),
    Restitution::coefficient(0.4),
  ));
}
