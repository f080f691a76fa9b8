//! Camera-relative movement direction math.
//!
//! Pure, testable mapping from the pressed movement keys and the camera
//! forward vector to a world-space planar direction.

use bevy::prelude::*;

/// Snapshot of the pressed movement keys for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
  pub forward: bool,
  pub backward: bool,
  pub left: bool,
  pub right: bool,
}

impl MoveInput {
  /// Local `(right, forward)` axis pair. Opposing keys held together cancel
  /// to zero on their axis.
  #[must_use]
  pub fn axis(self) -> Vec2 {
    let right = (self.right as i8 - self.left as i8) as f32;
    let forward = (self.forward as i8 - self.backward as i8) as f32;
    Vec2::new(right, forward)
  }
}

/// Resolve the world-space movement direction from the camera forward vector
/// and the pressed keys.
///
/// The camera forward is projected onto the horizontal plane first, so only
/// its heading matters. The result is unit length, or exactly zero when the
/// keys cancel out -- a zero vector is never normalized.
#[must_use]
pub fn world_direction(camera_forward: Vec3, input: MoveInput) -> Vec3 {
  let forward = Vec3::new(camera_forward.x, 0.0, camera_forward.z).normalize_or_zero();
  let right = forward.cross(Vec3::Y);
  let axis = input.axis();
  (right * axis.x + forward * axis.y).normalize_or_zero()
}

#[cfg(test)]
mod tests {
  use super::*;

  const CAMERA_FWD: Vec3 = Vec3::NEG_Z;

  fn keys(forward: bool, backward: bool, left: bool, right: bool) -> MoveInput {
    MoveInput {
      forward,
      backward,
      left,
      right,
    }
  }

  #[test]
  fn opposing_keys_cancel_per_axis() {
    assert_eq!(keys(true, true, false, false).axis(), Vec2::ZERO);
    assert_eq!(keys(false, false, true, true).axis(), Vec2::ZERO);
    // One axis cancelled, the other still contributes
    assert_eq!(keys(true, true, true, false).axis(), Vec2::new(-1.0, 0.0));
    assert_eq!(
      world_direction(CAMERA_FWD, keys(true, true, true, true)),
      Vec3::ZERO
    );
  }

  #[test]
  fn magnitude_is_zero_or_one() {
    let camera_fwd = Vec3::new(0.3, -0.5, -0.8);
    let cases = [
      keys(false, false, false, false),
      keys(true, false, false, false),
      keys(true, false, false, true),
      keys(false, true, true, false),
      keys(true, true, false, true),
    ];
    for input in cases {
      let direction = world_direction(camera_fwd, input);
      let len = direction.length();
      assert!(
        len == 0.0 || (len - 1.0).abs() < 1e-5,
        "length must be 0 or 1, got {len} for {input:?}"
      );
    }
  }

  #[test]
  fn forward_follows_camera_heading() {
    // Camera pitched down; only the heading should matter
    let camera_fwd = Vec3::new(1.0, -2.0, 0.0);
    let direction = world_direction(camera_fwd, keys(true, false, false, false));
    assert!((direction - Vec3::X).length() < 1e-5);
    assert_eq!(direction.y, 0.0);
  }

  #[test]
  fn strafe_is_perpendicular_to_heading() {
    let direction = world_direction(CAMERA_FWD, keys(false, false, false, true));
    // Camera looks down -Z, so right is +X
    assert!((direction - Vec3::X).length() < 1e-5);
    let direction = world_direction(CAMERA_FWD, keys(false, false, true, false));
    assert!((direction - Vec3::NEG_X).length() < 1e-5);
  }

  #[test]
  fn diagonal_is_normalized() {
    let direction = world_direction(CAMERA_FWD, keys(true, false, false, true));
    let expected = Vec3::new(1.0, 0.0, -1.0).normalize();
    assert!((direction - expected).length() < 1e-5);
  }

  #[test]
  fn straight_down_camera_yields_zero() {
    // Projection degenerates; must not divide by zero
    let direction = world_direction(Vec3::NEG_Y, keys(true, false, false, false));
    assert_eq!(direction, Vec3::ZERO);
  }
}
