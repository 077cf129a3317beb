use serde::{Deserialize, Serialize};

use crate::error::MeasureError;
use crate::viewer::CameraView;

const DEFAULT_CONTAINER_ID: &str = "cesiumContainer";
const DEFAULT_TERRAIN_ASSET_ID: u64 = 1;

/// Viewer placement and initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Id of the display container the viewer is created in.
    pub container_id: String,
    /// Id of the terrain asset requested on mount.
    pub terrain_asset_id: u64,
    /// Camera pose set once the terrain is attached.
    pub initial_view: CameraView,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            terrain_asset_id: DEFAULT_TERRAIN_ASSET_ID,
            initial_view: CameraView::default(),
        }
    }
}

impl MapConfig {
    /// Parses the configuration from a JSON string. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, MeasureError> {
        Ok(serde_json::from_str(json)?)
    }
}
