use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::DEFAULT_FALLBACK_BASE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
/// Where the widget's textures and journey pages live.
pub struct AssetOptions {
    /// Base directory for every asset.
    pub directory: PathBuf,
    /// Globe surface texture, relative to `directory`.
    pub globe_texture: String,
    /// Star box texture, relative to `directory`.
    pub starfield_texture: String,
    /// Subdirectory holding per-label journey pages.
    pub journey_dir: String,
    /// Base URL for points with neither a locator nor a journey page.
    pub fallback_url: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("img/"),
            globe_texture: "globe.jpg".into(),
            starfield_texture: "starfield.png".into(),
            journey_dir: "journey".into(),
            fallback_url: DEFAULT_FALLBACK_BASE.into(),
        }
    }
}
