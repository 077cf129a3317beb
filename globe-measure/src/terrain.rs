//! Background loading of the viewer terrain.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::error::MeasureError;
use crate::messenger::Messenger;
use crate::viewer::{CameraView, Viewer, ViewerSlot};

/// Source of terrain resources.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait TerrainProvider {
    /// Terrain resource type.
    type Terrain;

    /// Loads the terrain asset with the given id.
    async fn fetch(&self, asset_id: u64) -> Result<Self::Terrain, MeasureError>;
}

/// State of the terrain loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainState {
    /// Terrain request is in flight.
    Pending,
    /// Terrain is attached to the viewer and the camera is moved to the initial view.
    Attached,
    /// Terrain could not be loaded. The viewer keeps its default terrain and camera.
    Failed(String),
    /// Terrain was loaded after the viewer had been destroyed and was discarded.
    Skipped,
}

/// Future that resolves when the terrain loading finishes.
///
/// The loading runs in the background whether this future is polled or not, so it can be
/// dropped if the caller is not interested in the result.
pub struct TerrainLoading {
    receiver: oneshot::Receiver<TerrainState>,
}

impl TerrainLoading {
    pub(crate) fn new(receiver: oneshot::Receiver<TerrainState>) -> Self {
        Self { receiver }
    }
}

impl Future for TerrainLoading {
    type Output = TerrainState;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|result| {
            result.unwrap_or_else(|_| TerrainState::Failed("terrain task was dropped".into()))
        })
    }
}

/// Loads the terrain and, if the viewer is still alive, attaches it and sets the camera.
pub(crate) async fn attach_terrain<V, P>(
    slot: ViewerSlot<V>,
    provider: P,
    asset_id: u64,
    view: CameraView,
    messenger: Option<Arc<dyn Messenger>>,
) -> TerrainState
where
    V: Viewer,
    P: TerrainProvider<Terrain = V::Terrain>,
{
    let terrain = match provider.fetch(asset_id).await {
        Ok(terrain) => terrain,
        Err(err) => {
            log::warn!("Failed to load terrain asset {asset_id}: {err}");
            return TerrainState::Failed(err.to_string());
        }
    };

    let attached = slot.with(|viewer| {
        viewer.set_terrain(terrain);
        viewer.set_view(&view);
    });

    match attached {
        Some(()) => {
            log::info!("Terrain asset {asset_id} attached");
            if let Some(messenger) = &messenger {
                messenger.request_redraw();
            }

            TerrainState::Attached
        }
        None => {
            log::debug!("Viewer was destroyed before terrain asset {asset_id} was loaded");
            TerrainState::Skipped
        }
    }
}
