//! Pointer picking against the globe.
//!
//! [`ray`] turns a pointer position into a world-space hit on the globe
//! sphere; [`nearest`] finds the registered point whose direction from the
//! center best matches that hit.

pub mod nearest;
pub mod ray;

pub use nearest::{find_closest, PointMatch, DEFAULT_SIMILARITY_THRESHOLD};
pub use ray::{pick, ray_sphere_intersect, screen_to_ray, Ray, Sphere};
