//! Resolving which resource a clicked point opens.

use std::path::{Path, PathBuf};

use super::point::LabeledPoint;

/// Default base for points without a locator or a local journey page.
pub const DEFAULT_FALLBACK_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Turns a point into the locator handed to the host's open action.
///
/// Resolution order: the record's own locator, then a local page at
/// `<asset_dir>/<journey_dir>/<label lowercased>.html` if it exists, then
/// `<fallback_base><label>`. The journey directory defaults to `journey`.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    asset_dir: PathBuf,
    journey_dir: String,
    fallback_base: String,
}

impl ResourceResolver {
    /// Create a resolver rooted at `asset_dir`.
    pub fn new(
        asset_dir: impl Into<PathBuf>,
        fallback_base: impl Into<String>,
    ) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            journey_dir: "journey".into(),
            fallback_base: fallback_base.into(),
        }
    }

    /// Use a different subdirectory for journey pages.
    #[must_use]
    pub fn with_journey_dir(mut self, journey_dir: impl Into<String>) -> Self {
        self.journey_dir = journey_dir.into();
        self
    }

    /// Base directory assets are resolved against.
    #[must_use]
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Local journey page path for a label (may not exist).
    #[must_use]
    pub fn journey_page(&self, label: &str) -> PathBuf {
        self.asset_dir
            .join(&self.journey_dir)
            .join(format!("{}.html", label.to_lowercase()))
    }

    /// Resolve the locator for `point`.
    #[must_use]
    pub fn resolve(&self, point: &LabeledPoint) -> String {
        if let Some(action_ref) = &point.action_ref {
            return action_ref.clone();
        }
        let page = self.journey_page(&point.label);
        if page.is_file() {
            return page.to_string_lossy().into_owned();
        }
        format!("{}{}", self.fallback_base, point.label.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::point::{PointRecord, GLOBE_RADIUS};

    fn point(label: &str, action_ref: Option<&str>) -> LabeledPoint {
        let record =
            PointRecord::new(label, 0.0, 0.0, 0.0, action_ref.map(str::to_owned));
        LabeledPoint::from_record(&record, GLOBE_RADIUS, [0.0; 3]).unwrap()
    }

    #[test]
    fn explicit_locator_wins() {
        let resolver = ResourceResolver::new("img/", DEFAULT_FALLBACK_BASE);
        assert_eq!(
            resolver.resolve(&point("Rome", Some("https://example.org/rome"))),
            "https://example.org/rome"
        );
    }

    #[test]
    fn missing_page_falls_back_to_base() {
        let resolver =
            ResourceResolver::new("/nonexistent-terrella-assets", DEFAULT_FALLBACK_BASE);
        assert_eq!(
            resolver.resolve(&point("New York", None)),
            "https://en.wikipedia.org/wiki/New_York"
        );
    }

    #[test]
    fn existing_journey_page_is_used() {
        let dir = std::env::temp_dir()
            .join(format!("terrella-resource-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("journey")).unwrap();
        std::fs::write(dir.join("journey").join("kyoto.html"), "<html/>").unwrap();

        let resolver = ResourceResolver::new(&dir, DEFAULT_FALLBACK_BASE);
        let resolved = resolver.resolve(&point("Kyoto", None));
        assert!(resolved.ends_with("kyoto.html"), "{resolved}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn custom_journey_dir() {
        let resolver = ResourceResolver::new("img", DEFAULT_FALLBACK_BASE)
            .with_journey_dir("steps");
        assert_eq!(
            resolver.journey_page("Lima"),
            Path::new("img").join("steps").join("lima.html")
        );
    }
}
