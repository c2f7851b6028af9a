//! Screen-to-world rays and ray/sphere intersection.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Viewport};
use crate::error::GlobeError;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Sphere with a finite, non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a sphere, rejecting negative or non-finite radii.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, GlobeError> {
        if !radius.is_finite() || radius < 0.0 || !center.is_finite() {
            return Err(GlobeError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Sphere center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Ray-sphere intersection test.
///
/// Returns the smallest non-negative distance along the ray to the sphere
/// surface, or `None` on a miss. When the origin is inside the sphere this
/// is the exit point.
#[must_use]
pub fn ray_sphere_intersect(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let a = ray.direction.dot(ray.direction);
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-b - sqrt_d) / (2.0 * a);
    if t >= 0.0 {
        return Some(t);
    }
    let t2 = (-b + sqrt_d) / (2.0 * a);
    (t2 >= 0.0).then_some(t2)
}

/// Convert a pointer position (pixels, top-left origin) into a world-space
/// ray from the camera eye through the pointer.
#[must_use]
pub fn screen_to_ray(
    pointer: Vec2,
    viewport: &Viewport,
    camera: &Camera,
) -> Option<Ray> {
    if !pointer.is_finite() {
        return None;
    }
    let ndc = viewport.to_ndc(pointer.x, pointer.y);
    let through = camera.unproject(ndc.extend(0.5));
    let direction = (through - camera.eye).try_normalize()?;
    Some(Ray {
        origin: camera.eye,
        direction,
    })
}

/// Project `pointer` through `camera` onto `sphere`.
///
/// Returns the world-space point of the nearest intersection, or `None`
/// when the ray misses (the pointer is over empty space).
#[must_use]
pub fn pick(
    pointer: Vec2,
    viewport: &Viewport,
    camera: &Camera,
    sphere: &Sphere,
) -> Option<Vec3> {
    let ray = screen_to_ray(pointer, viewport, camera)?;
    let t = ray_sphere_intersect(&ray, sphere)?;
    Some(ray.at(t))
}
