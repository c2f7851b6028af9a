use glam::Vec3;

use super::point::{LabeledPoint, PointId};

/// Append-only, ordered store of registered points.
///
/// The index of a point is its identity for picking and highlighting; there
/// is no removal path, so ids never shift.
#[derive(Debug, Default)]
pub struct PointRegistry {
    points: Vec<LabeledPoint>,
}

impl PointRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its id.
    pub fn push(&mut self, point: LabeledPoint) -> PointId {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Look up a point by id.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&LabeledPoint> {
        self.points.get(id)
    }

    /// Number of registered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, in registration order.
    #[must_use]
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Iterate over surface positions in registration order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::point::{PointRecord, GLOBE_RADIUS};

    #[test]
    fn ids_follow_insertion_order() {
        let mut registry = PointRegistry::new();
        assert!(registry.is_empty());
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            let record = PointRecord::new(*name, 0.0, i as f32 * 10.0, 0.0, None);
            let point =
                LabeledPoint::from_record(&record, GLOBE_RADIUS, [0.0; 3])
                    .unwrap();
            assert_eq!(registry.push(point), i);
        }
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(1).map(|p| p.label.as_str()), Some("b"));
        assert!(registry.get(3).is_none());
        assert_eq!(registry.positions().count(), 3);
    }
}
