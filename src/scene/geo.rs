//! Geographic ↔ globe-surface conversion.

use std::f32::consts::PI;

use glam::{Mat3, Quat, Vec3};

use crate::error::GlobeError;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoord {
    /// Latitude in degrees, +90 at the north pole.
    pub lat_deg: f32,
    /// Longitude in degrees.
    pub lng_deg: f32,
}

impl GeoCoord {
    /// Build a coordinate, rejecting non-finite values.
    pub fn new(lat_deg: f32, lng_deg: f32) -> Result<Self, GlobeError> {
        if !lat_deg.is_finite() || !lng_deg.is_finite() {
            return Err(GlobeError::InvalidCoordinate {
                lat: lat_deg,
                lng: lng_deg,
            });
        }
        Ok(Self { lat_deg, lng_deg })
    }

    /// Polar angle from +Y and azimuth, both in radians.
    #[must_use]
    pub fn spherical(&self) -> (f32, f32) {
        let phi = (90.0 - self.lat_deg) * PI / 180.0;
        let theta = (180.0 - self.lng_deg) * PI / 180.0;
        (phi, theta)
    }

    /// Position on a sphere of `radius` centered at the origin.
    #[must_use]
    pub fn to_surface(&self, radius: f32) -> Vec3 {
        self.to_surface_offset(radius, 0.0)
    }

    /// Like [`to_surface`](Self::to_surface) with the azimuth shifted by
    /// `theta_offset` radians.
    #[must_use]
    pub fn to_surface_offset(&self, radius: f32, theta_offset: f32) -> Vec3 {
        let (phi, theta) = self.spherical();
        let theta = theta + theta_offset;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    }
}

/// Orientation whose local +Z axis points along `forward`, keeping local +Y
/// as close to world +Y as possible.
#[must_use]
pub fn facing(forward: Vec3) -> Quat {
    let Some(z) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let up = if z.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
