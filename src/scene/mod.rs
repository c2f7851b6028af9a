//! Globe scene data: labeled points, their registry, and how they are
//! loaded, placed, and resolved to resources.
//!
//! Points are built by pure per-point construction
//! ([`LabeledPoint::from_record`] and [`build_point_visual`]); nothing is
//! shared between successive registrations.

pub mod dataset;
mod geo;
mod point;
mod registry;
mod resource;

pub use geo::{facing, GeoCoord};
pub use point::{
    build_point_visual, LabeledPoint, Placement, PointId, PointRecord,
    PointVisual, GLOBE_RADIUS,
};
pub use registry::PointRegistry;
pub use resource::{ResourceResolver, DEFAULT_FALLBACK_BASE};

/// Decorative layers the host can show or hide independently of camera and
/// focus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneLayer {
    /// Background star box.
    Starfield,
    /// Additive glow shell around the globe.
    Atmosphere,
}
