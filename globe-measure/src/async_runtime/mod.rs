use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
use maybe_sync::MaybeSend;

use crate::error::MeasureError;

/// Handle to the runtime that runs background tasks of a map.
///
/// Must be obtained before the viewer is created: a map is never left half-mounted.
#[derive(Debug)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
}

impl Spawner {
    /// Returns the spawner of the current tokio runtime, or an error if the caller is not
    /// within one.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn current() -> Result<Self, MeasureError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|err| MeasureError::Runtime(err.to_string()))?;
        Ok(Self { handle })
    }

    /// Browser event loop is always available.
    #[cfg(target_arch = "wasm32")]
    pub fn current() -> Result<Self, MeasureError> {
        Ok(Self {})
    }

    /// Runs the future in the background.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<T>(&self, future: T)
    where
        T: Future + MaybeSend + 'static,
        T::Output: MaybeSend + 'static,
    {
        self.handle.spawn(future);
    }

    /// Runs the future on the browser event loop.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn<T>(&self, future: T)
    where
        T: Future + 'static,
        T::Output: 'static,
    {
        wasm_bindgen_futures::spawn_local(async {
            future.await;
        });
    }
}
