//! 3D character-movement demos: camera-relative input resolution, kinematic
//! and velocity-driven locomotion, and grounded/jump state handling on top of
//! Bevy and Rapier.

pub mod config;
pub mod core;
pub mod hud;
pub mod input;
pub mod player;
pub mod scenes;
pub mod visual_debug;
