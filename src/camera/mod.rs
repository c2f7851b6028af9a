//! Camera system for viewing the globe.
//!
//! Provides a perspective camera, the viewport it projects into, and an
//! orbit controller with smoothed rotation, clamped zoom, and idle spin.

/// Orbit controller managing yaw, pitch, zoom, and idle auto-rotation.
pub mod controller;
/// Core camera struct and viewport.
pub mod core;

pub use self::controller::{orbit_eye, OrbitCameraState, OrbitController};
pub use self::core::{Camera, Viewport};
