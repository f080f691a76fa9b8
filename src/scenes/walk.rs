//! Kinematic walker demo: WASD moves the capsule relative to the camera,
//! colliding with fixed obstacles. No gravity, no jump.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use super::spawn_demo_light;
use crate::player::spawn::spawn_walker;

const GROUND_SIZE: f32 = 24.0;
const GROUND_THICKNESS: f32 = 0.2;
const OBSTACLE_COUNT: usize = 6;

pub struct WalkScenePlugin;

impl Plugin for WalkScenePlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, (setup_scene, spawn_walker));
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

  // Something solid to walk into
  commands.spawn((
    Mesh3d(meshes.add(Sphere::new(1.0))),
    MeshMaterial3d(materials.add(Color::srgb(0.7, 0.7, 0.8))),
    Transform::from_xyz(0.0, 1.0, 2.0),
    RigidBody::Fixed,
    Collider::ball(1.0),
  ));

  let obstacle_material = materials.add(Color::srgb(0.5, 0.45, 0.4));
  let mut rng = rand::rng();
  for _ in 0..OBSTACLE_COUNT {
    let size = rng.random_range(0.6..1.6);
    let x = rng.random_range(-GROUND_SIZE / 2.0 + 2.0..GROUND_SIZE / 2.0 - 2.0);
    let z = rng.random_range(-GROUND_SIZE / 2.0 + 2.0..GROUND_SIZE / 2.0 - 2.0);

    commands.spawn((
      Mesh3d(meshes.add(Cuboid::new(size, size, size))),
      MeshMaterial3d(obstacle_material.clone()),
      Transform::from_xyz(x, size / 2.0, z),
      RigidBody::Fixed,
      Collider::cuboid(size / 2.0, size / 2.0, size / 2.0),
    ));
  }
}
