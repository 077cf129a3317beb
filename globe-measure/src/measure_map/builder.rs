use std::sync::Arc;

use maybe_sync::{MaybeSend, MaybeSync};

use super::{MapConfig, MeasureMap};
use crate::error::MeasureError;
use crate::messenger::Messenger;
use crate::options::MeasureOptions;
use crate::terrain::{TerrainLoading, TerrainProvider};
use crate::tool::ToolFactory;
use crate::units::Units;
use crate::viewer::{CameraView, Viewer, ViewerFactory};

/// Convenience type to configure and mount a [MeasureMap].
///
/// ```ignore
/// use globe_measure::MeasureMapBuilder;
///
/// let (map, terrain) = MeasureMapBuilder::default()
///     .with_container_id("globe")
///     .with_terrain_asset_id(1)
///     .mount(&viewer_factory, terrain_provider, tool_factory)?;
/// ```
#[derive(Default)]
pub struct MeasureMapBuilder {
    config: MapConfig,
    options: MeasureOptions,
    messenger: Option<Arc<dyn Messenger>>,
}

impl MeasureMapBuilder {
    /// Replaces the whole viewer configuration.
    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the id of the display container.
    ///
    /// Defaults to `cesiumContainer`.
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.config.container_id = container_id.into();
        self
    }

    /// Sets the terrain asset requested on mount.
    ///
    /// Defaults to `1`.
    pub fn with_terrain_asset_id(mut self, asset_id: u64) -> Self {
        self.config.terrain_asset_id = asset_id;
        self
    }

    /// Sets the camera pose applied once the terrain is attached.
    ///
    /// Defaults to 120°E 28°N at 50 km, looking 45° down.
    pub fn with_initial_view(mut self, view: CameraView) -> Self {
        self.config.initial_view = view;
        self
    }

    /// Replaces the configuration given to the measurement tools.
    pub fn with_options(mut self, options: MeasureOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the display units of the measurement tools. Defaults to [`Units::Kilometers`].
    pub fn with_units(mut self, units: Units) -> Self {
        self.options.units = units;
        self
    }

    /// Sets the messenger notified when the viewer changes in the background.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Arc::new(messenger));
        self
    }

    /// Creates the viewer and starts loading the terrain.
    ///
    /// On native targets this must be called within a tokio runtime, otherwise
    /// [`MeasureError::Runtime`] is returned and no viewer is created.
    pub fn mount<V, P>(
        self,
        viewer_factory: &impl ViewerFactory<V>,
        terrain_provider: P,
        tool_factory: impl ToolFactory<V> + 'static,
    ) -> Result<(MeasureMap<V>, TerrainLoading), MeasureError>
    where
        V: Viewer + MaybeSend + 'static,
        V::Terrain: MaybeSend,
        P: TerrainProvider<Terrain = V::Terrain> + MaybeSend + MaybeSync + 'static,
    {
        MeasureMap::mount(
            self.config,
            self.options,
            self.messenger,
            viewer_factory,
            terrain_provider,
            tool_factory,
        )
    }
}
