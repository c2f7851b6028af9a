use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Decorative layer toggles.
pub struct DisplayOptions {
    /// Whether the background star box is shown.
    #[schemars(title = "Show Starfield")]
    pub show_starfield: bool,
    /// Whether the atmosphere glow is shown.
    #[schemars(title = "Show Atmosphere")]
    pub show_atmosphere: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_starfield: true,
            show_atmosphere: true,
        }
    }
}
