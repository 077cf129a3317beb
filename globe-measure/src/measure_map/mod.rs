use std::sync::Arc;

use futures::channel::oneshot;
use maybe_sync::{MaybeSend, MaybeSync};
use parking_lot::Mutex;

use crate::async_runtime::Spawner;
use crate::controller::{SelectionState, ToolController};
use crate::error::MeasureError;
use crate::messenger::Messenger;
use crate::options::MeasureOptions;
use crate::terrain::{attach_terrain, TerrainLoading, TerrainProvider, TerrainState};
use crate::tool::{ToolFactory, ToolKind};
use crate::viewer::{Viewer, ViewerFactory, ViewerSlot};

mod builder;
mod config;

pub use builder::MeasureMapBuilder;
pub use config::MapConfig;

/// A mounted globe viewer with a set of measurement tools.
///
/// The map owns the viewer and the active tool. Both are destroyed when the map is unmounted or
/// dropped: first the tool, then the viewer.
pub struct MeasureMap<V: Viewer> {
    config: MapConfig,
    viewer: ViewerSlot<V>,
    controller: ToolController<V>,
    terrain_state: Arc<Mutex<TerrainState>>,
}

impl<V: Viewer> MeasureMap<V> {
    pub(crate) fn mount<P>(
        config: MapConfig,
        options: MeasureOptions,
        messenger: Option<Arc<dyn Messenger>>,
        viewer_factory: &impl ViewerFactory<V>,
        terrain_provider: P,
        tool_factory: impl ToolFactory<V> + 'static,
    ) -> Result<(Self, TerrainLoading), MeasureError>
    where
        V: MaybeSend + 'static,
        V::Terrain: MaybeSend,
        P: TerrainProvider<Terrain = V::Terrain> + MaybeSend + MaybeSync + 'static,
    {
        let spawner = Spawner::current()?;
        let viewer = viewer_factory.create(&config.container_id)?;
        log::info!("Viewer created in container '{}'", config.container_id);

        let viewer = ViewerSlot::new(viewer);
        let terrain_state = Arc::new(Mutex::new(TerrainState::Pending));
        let (sender, receiver) = oneshot::channel();

        let slot = viewer.clone();
        let state = terrain_state.clone();
        let asset_id = config.terrain_asset_id;
        let view = config.initial_view;
        spawner.spawn(async move {
            let result = attach_terrain(slot, terrain_provider, asset_id, view, messenger).await;
            *state.lock() = result.clone();
            // Nobody may be waiting for the result.
            let _ = sender.send(result);
        });

        let controller = ToolController::new(viewer.clone(), tool_factory, options);

        Ok((
            Self {
                config,
                viewer,
                controller,
                terrain_state,
            },
            TerrainLoading::new(receiver),
        ))
    }

    /// Viewer configuration the map was mounted with.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Configuration given to the measurement tools.
    pub fn options(&self) -> &MeasureOptions {
        self.controller.options()
    }

    /// Returns true until the map is unmounted.
    pub fn is_mounted(&self) -> bool {
        self.viewer.is_alive()
    }

    /// Runs `f` with the viewer if it is still alive.
    pub fn with_viewer<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.viewer.with(f)
    }

    /// Current state of the terrain loading.
    pub fn terrain_state(&self) -> TerrainState {
        self.terrain_state.lock().clone()
    }

    /// Kind of the selected tool.
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.controller.active_tool()
    }

    /// Tool selection state.
    pub fn selection_state(&self) -> SelectionState {
        self.controller.state()
    }

    /// Handles activation of a tool button. See [`ToolController::select_tool`].
    pub fn toggle_tool(&mut self, kind: ToolKind) {
        self.controller.toggle(kind);
    }

    /// Changes the selected tool. See [`ToolController::select_tool`].
    pub fn select_tool(&mut self, kind: Option<ToolKind>) {
        self.controller.select_tool(kind);
    }

    /// Finishes the current measurement, keeping the tool selected.
    pub fn clear(&mut self) {
        self.controller.clear();
    }

    /// Destroys the active tool and then the viewer.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.controller.destroy_active();
        if let Some(mut viewer) = self.viewer.take() {
            viewer.destroy();
            log::info!("Viewer in container '{}' destroyed", self.config.container_id);
        }
    }
}

impl<V: Viewer> Drop for MeasureMap<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
