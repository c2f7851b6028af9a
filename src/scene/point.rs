//! Labeled points and their visual descriptors.

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::geo::{facing, GeoCoord};
use crate::error::GlobeError;

/// Radius of the globe sphere in world units.
pub const GLOBE_RADIUS: f32 = 200.0;

/// Azimuth shift applied to labels so they sit beside their marker.
const LABEL_THETA_OFFSET: f32 = -PI / 120.0;
/// Labels float just above the surface to avoid z-fighting.
const LABEL_LIFT: f32 = 1.001;

/// Index of a point in the registry. Stable for the widget's lifetime.
pub type PointId = usize;

/// One input record as supplied by the embedding page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Display label (city / waypoint name).
    pub label: String,
    /// Latitude in degrees.
    pub lat: f32,
    /// Longitude in degrees.
    pub lng: f32,
    /// Application-defined weight, fed to the color function.
    #[serde(default)]
    pub weight: f32,
    /// Resource opened when the point is clicked.
    #[serde(default, alias = "uri", alias = "url")]
    pub action_ref: Option<String>,
}

impl PointRecord {
    /// Convenience constructor.
    pub fn new(
        label: impl Into<String>,
        lat: f32,
        lng: f32,
        weight: f32,
        action_ref: Option<String>,
    ) -> Self {
        Self {
            label: label.into(),
            lat,
            lng,
            weight,
            action_ref,
        }
    }
}

/// A registered point. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    /// Surface position in world space.
    pub position: Vec3,
    /// Geographic coordinate the position was derived from.
    pub coord: GeoCoord,
    /// Display label.
    pub label: String,
    /// Resource locator opened on click, if the record carried one.
    pub action_ref: Option<String>,
    /// Weight the color was derived from.
    pub weight: f32,
    /// RGB color.
    pub color: [f32; 3],
}

impl LabeledPoint {
    /// Convert a record into a point on a globe of `radius`.
    pub fn from_record(
        record: &PointRecord,
        radius: f32,
        color: [f32; 3],
    ) -> Result<Self, GlobeError> {
        let coord = GeoCoord::new(record.lat, record.lng)?;
        Ok(Self {
            position: coord.to_surface(radius),
            coord,
            label: record.label.clone(),
            action_ref: record.action_ref.clone(),
            weight: record.weight,
            color,
        })
    }
}

/// Placement of one renderable object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World-space position.
    pub position: Vec3,
    /// Orientation (local +Z is the facing direction).
    pub rotation: Quat,
}

/// Static visual description of a point: its marker and its label.
///
/// Built once per point by [`build_point_visual`]; the renderer owns the
/// actual meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct PointVisual {
    /// Registry index.
    pub id: PointId,
    /// Marker placement; faces the globe center.
    pub marker: Placement,
    /// Label placement; faces away from the globe.
    pub label: Placement,
    /// Label text.
    pub text: String,
    /// Marker and label color.
    pub color: [f32; 3],
}

/// Build the visual descriptor for `point` on a globe centered at `center`.
#[must_use]
pub fn build_point_visual(
    id: PointId,
    point: &LabeledPoint,
    center: Vec3,
    radius: f32,
) -> PointVisual {
    let marker_pos = center + point.position;
    let label_pos = center
        + point.coord.to_surface_offset(radius, LABEL_THETA_OFFSET)
            * LABEL_LIFT;
    PointVisual {
        id,
        marker: Placement {
            position: marker_pos,
            rotation: facing(center - marker_pos),
        },
        label: Placement {
            position: label_pos,
            rotation: facing(label_pos - center),
        },
        text: point.label.clone(),
        color: point.color,
    }
}
