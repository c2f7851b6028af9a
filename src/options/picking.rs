use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::picking::DEFAULT_SIMILARITY_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Hover picking parameters.
pub struct PickingOptions {
    /// Minimum cosine between hit and point directions for a match.
    #[schemars(title = "Similarity Threshold", range(min = 0.99, max = 1.0), extend("step" = 0.0001))]
    pub similarity_threshold: f32,
    /// Pointer must rest this long before a pick runs.
    #[schemars(title = "Hover Delay (ms)", range(min = 0, max = 1000))]
    pub hover_debounce_ms: u64,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            hover_debounce_ms: 200,
        }
    }
}
