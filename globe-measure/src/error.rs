//! Error types used by the crate.

use thiserror::Error;

/// Globe measure error type.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// The viewer could not be created in the given display container.
    #[error("failed to create viewer in container '{0}'")]
    ViewerCreation(String),
    /// Terrain resource could not be loaded.
    #[error("failed to load terrain: {0}")]
    TerrainLoad(String),
    /// No async runtime is available to load the terrain in the background.
    #[error("async runtime is not available: {0}")]
    Runtime(String),
    /// Tool key does not match any of the known measurement tools.
    #[error("unknown measurement tool '{0}'")]
    UnknownTool(String),
    /// Configuration could not be parsed.
    #[error("invalid configuration")]
    Config(#[from] serde_json::Error),
}
