//! Nearest registered point to a globe hit, by direction.

use glam::Vec3;

use crate::scene::PointId;

/// Minimum cosine between the hit direction and a point direction for the
/// point to count as under the pointer (about 1.15 degrees of arc).
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.9998;

/// Result of a nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    /// Registry index of the matched point.
    pub id: PointId,
    /// Cosine of the angle between hit and point directions.
    pub similarity: f32,
}

/// Find the point whose direction from `center` is most similar to `hit`'s.
///
/// Points with similarity below `threshold` are not candidates.
/// Ties keep the first point encountered. Points at the center (zero
/// direction) are skipped, and an empty iterator or a degenerate hit yields
/// `None`.
#[must_use]
pub fn find_closest<I>(
    hit: Vec3,
    center: Vec3,
    positions: I,
    threshold: f32,
) -> Option<PointMatch>
where
    I: IntoIterator<Item = Vec3>,
{
    let hit_dir = (hit - center).try_normalize()?;
    let mut best: Option<PointMatch> = None;
    for (id, position) in positions.into_iter().enumerate() {
        let Some(dir) = (position - center).try_normalize() else {
            continue;
        };
        let similarity = hit_dir.dot(dir);
        if similarity < threshold {
            continue;
        }
        if best.map_or(true, |b| similarity > b.similarity) {
            best = Some(PointMatch { id, similarity });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GeoCoord, GLOBE_RADIUS};

    fn surface(lat: f32, lng: f32) -> Vec3 {
        GeoCoord::new(lat, lng).unwrap().to_surface(GLOBE_RADIUS)
    }

    #[test]
    fn exact_hit_matches_point() {
        let points = [surface(10.0, 10.0), surface(40.0, -70.0)];
        let m = find_closest(points[1], Vec3::ZERO, points, DEFAULT_SIMILARITY_THRESHOLD)
            .unwrap();
        assert_eq!(m.id, 1);
        assert!((m.similarity - 1.0).abs() < 1e-5, "{}", m.similarity);
    }

    /// Hit on the unit circle in the XY plane, `angle` radians from +X.
    fn hit_at(angle: f32) -> Vec3 {
        Vec3::new(angle.cos(), angle.sin(), 0.0) * GLOBE_RADIUS
    }

    #[test]
    fn similarity_equal_to_cutoff_is_accepted() {
        let point = Vec3::X * GLOBE_RADIUS;
        let hit = Vec3::new(1.0, 0.02, 0.0);
        let s = find_closest(hit, Vec3::ZERO, [point], -1.0).unwrap().similarity;

        let m = find_closest(hit, Vec3::ZERO, [point], s).unwrap();
        assert_eq!(m.id, 0);
        assert_eq!(m.similarity, s);
    }

    #[test]
    fn cutoff_separates_near_misses() {
        let points = [Vec3::X * GLOBE_RADIUS];

        // cos(0.0245) is about 0.9997
        let outside = hit_at(0.0245);
        assert!(
            find_closest(outside, Vec3::ZERO, points, DEFAULT_SIMILARITY_THRESHOLD)
                .is_none()
        );

        // cos(0.019) is about 0.99982
        let inside = hit_at(0.019);
        let m = find_closest(inside, Vec3::ZERO, points, DEFAULT_SIMILARITY_THRESHOLD)
            .unwrap();
        assert_eq!(m.id, 0);
        assert!(m.similarity > DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn far_hit_finds_nothing() {
        let points = [surface(10.0, 10.0)];
        let hit = surface(-30.0, 120.0);
        assert!(
            find_closest(hit, Vec3::ZERO, points, DEFAULT_SIMILARITY_THRESHOLD)
                .is_none()
        );
    }

    #[test]
    fn nearby_hit_within_one_degree_matches() {
        let points = [surface(0.0, 0.0), surface(0.0, 20.0)];
        let hit = surface(0.5, 0.5);
        let m = find_closest(hit, Vec3::ZERO, points, DEFAULT_SIMILARITY_THRESHOLD)
            .unwrap();
        assert_eq!(m.id, 0);
    }

    #[test]
    fn closer_point_wins() {
        let points = [surface(0.0, 0.0), surface(0.0, 0.6)];
        let hit = surface(0.0, 0.5);
        let m = find_closest(hit, Vec3::ZERO, points, 0.99).unwrap();
        assert_eq!(m.id, 1);
    }

    #[test]
    fn ties_keep_first_encountered() {
        let p = surface(5.0, 5.0);
        let m = find_closest(p, Vec3::ZERO, [p, p], DEFAULT_SIMILARITY_THRESHOLD)
            .unwrap();
        assert_eq!(m.id, 0);
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        assert!(find_closest(Vec3::X, Vec3::ZERO, [], 0.5).is_none());
        assert!(find_closest(Vec3::ZERO, Vec3::ZERO, [Vec3::X], 0.5).is_none());
        let m = find_closest(Vec3::X, Vec3::ZERO, [Vec3::ZERO, Vec3::X], 0.5).unwrap();
        assert_eq!(m.id, 1);
    }

    #[test]
    fn offset_center_is_respected() {
        let center = Vec3::new(100.0, 0.0, 0.0);
        let points = [center + Vec3::Y * 200.0, center + Vec3::X * 200.0];
        let m = find_closest(center + Vec3::X * 150.0, center, points, 0.9).unwrap();
        assert_eq!(m.id, 1);
    }
}
