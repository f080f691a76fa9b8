//! Velocity-driven capsule demo: horizontal velocity from camera-relative
//! input, vertical velocity under gravity with a grounded jump, and a few
//! dynamic crates to push around.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use super::spawn_demo_light;
use crate::player::spawn::spawn_jumper;

const GROUND_SIZE: f32 = 12.0;
const GROUND_THICKNESS: f32 = 0.2;
const CRATE_SIZE: f32 = 1.0;
const CRATE_COUNT: usize = 4;

pub struct JumpScenePlugin;

impl Plugin for JumpScenePlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, (setup_scene, spawn_jumper));
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
    MeshMaterial3d(materials.add(Color::srgb(0.35, 0.4, 0.45))),
    Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(GROUND_SIZE / 2.0, GROUND_THICKNESS / 2.0, GROUND_SIZE / 2.0),
  ));

  // A ledge worth jumping onto
  commands.spawn((
    Mesh3d(meshes.add(Cuboid::new(3.0, 1.0, 3.0))),
    MeshMaterial3d(materials.add(Color::srgb(0.55, 0.5, 0.45))),
    Transform::from_xyz(3.5, 0.5, 3.5),
    RigidBody::Fixed,
    Collider::cuboid(1.5, 0.5, 1.5),
  ));

  let crate_mesh = meshes.add(Cuboid::new(CRATE_SIZE, CRATE_SIZE, CRATE_SIZE));
  let crate_material = materials.add(Color::srgb(0.7, 0.5, 0.3));
  let mut rng = rand::rng();
  for _ in 0..CRATE_COUNT {
    let x = rng.random_range(-4.0..4.0);
    let z = rng.random_range(-4.0..4.0);

    commands.spawn((
      Mesh3d(crate_mesh.clone()),
      MeshMaterial3d(crate_material.clone()),
      Transform::from_xyz(x, CRATE_SIZE / 2.0 + 0.5, z),
      RigidBody::Dynamic,
      Collider::cuboid(CRATE_SIZE / 2.0, CRATE_SIZE / 2.0, CRATE_SIZE / 2.0),
      Restitution::coefficient(0.1),
    ));
  }
}
