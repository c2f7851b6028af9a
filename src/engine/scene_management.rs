//! Point registration for [`GlobeWidget`].

use std::path::Path;

use super::{GlobeWidget, RenderSurface};
use crate::error::GlobeError;
use crate::scene::{
    build_point_visual, dataset, LabeledPoint, PointRecord, PointVisual,
    GLOBE_RADIUS,
};

impl<H: RenderSurface> GlobeWidget<H> {
    /// Register points and return their visual descriptors.
    ///
    /// Each record is converted independently. Records with non-finite
    /// coordinates are skipped with a warning; the rest are appended in
    /// order, so ids of earlier points never change.
    pub fn add_data(&mut self, records: &[PointRecord]) -> Vec<PointVisual> {
        let center = self.globe.center();
        let mut added = Vec::with_capacity(records.len());
        for record in records {
            let color = self.colors.color(record.weight);
            let point =
                match LabeledPoint::from_record(record, GLOBE_RADIUS, color) {
                    Ok(point) => point,
                    Err(e) => {
                        log::warn!("skipping point {:?}: {e}", record.label);
                        continue;
                    }
                };
            let id = self.registry.len();
            let visual = build_point_visual(id, &point, center, GLOBE_RADIUS);
            let _ = self.registry.push(point);
            self.visuals.push(visual.clone());
            added.push(visual);
        }
        self.focus.register_points(self.registry.len());
        log::debug!(
            "registered {} of {} points ({} total)",
            added.len(),
            records.len(),
            self.registry.len()
        );
        added
    }

    /// Parse a JSON dataset and register its points.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::DatasetParse`] if the JSON is malformed.
    pub fn add_data_json(
        &mut self,
        json: &str,
    ) -> Result<Vec<PointVisual>, GlobeError> {
        let records = dataset::parse_records(json)?;
        Ok(self.add_data(&records))
    }

    /// Load a JSON dataset file and register its points.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::Io`] or [`GlobeError::DatasetParse`].
    pub fn load_data(
        &mut self,
        path: &Path,
    ) -> Result<Vec<PointVisual>, GlobeError> {
        let records = dataset::load_records(path)?;
        Ok(self.add_data(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::RecordingSurface;
    use crate::options::Options;

    fn widget() -> GlobeWidget<RecordingSurface> {
        let (surface, _) = RecordingSurface::new(800, 600);
        GlobeWidget::new(surface, Options::default()).unwrap()
    }

    #[test]
    fn ids_follow_registration_order_across_calls() {
        let mut w = widget();
        let first = w.add_data(&[
            PointRecord::new("A", 0.0, 0.0, 0.0, None),
            PointRecord::new("B", 10.0, 0.0, 0.0, None),
        ]);
        let second = w.add_data(&[PointRecord::new("C", 20.0, 0.0, 0.0, None)]);
        assert_eq!(first.iter().map(|v| v.id).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(second[0].id, 2);
        assert_eq!(w.points().len(), 3);
        assert_eq!(w.visuals().len(), 3);
    }

    #[test]
    fn invalid_records_are_skipped() {
        let mut w = widget();
        let added = w.add_data(&[
            PointRecord::new("Bad", f32::NAN, 0.0, 0.0, None),
            PointRecord::new("Good", 1.0, 2.0, 0.0, None),
        ]);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].id, 0);
        assert_eq!(added[0].text, "Good");
    }

    #[test]
    fn points_sit_on_the_globe() {
        let mut w = widget();
        let _ = w.add_data(&[PointRecord::new("Cairo", 30.0, 31.2, 0.3, None)]);
        let len = w.points()[0].position.length();
        assert!((len - GLOBE_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn json_dataset_is_registered() {
        let mut w = widget();
        let added = w
            .add_data_json(r#"["Paris", 48.8, 2.3, 0.2, "Rome", 41.9, 12.5, 0.4]"#)
            .unwrap();
        assert_eq!(added.len(), 2);
        assert!(w.add_data_json("{").is_err());
    }
}
