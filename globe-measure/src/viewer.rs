//! Viewer collaborator traits and camera pose types.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::MeasureError;

/// Geographic position of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Height above the ellipsoid in meters.
    pub height: f64,
}

impl GeoPosition {
    /// Creates a new position from degrees and meters.
    pub fn from_degrees(lon: f64, lat: f64, height: f64) -> Self {
        Self { lon, lat, height }
    }
}

/// Camera orientation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingPitchRoll {
    /// Rotation around the local up axis.
    pub heading: f64,
    /// Rotation around the local east axis. Negative values look down.
    pub pitch: f64,
    /// Rotation around the view direction.
    pub roll: f64,
}

impl HeadingPitchRoll {
    /// Creates orientation from angles given in degrees.
    pub fn from_degrees(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading: heading.to_radians(),
            pitch: pitch.to_radians(),
            roll: roll.to_radians(),
        }
    }
}

/// Camera pose set on the viewer once terrain is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    /// Camera position.
    pub destination: GeoPosition,
    /// Camera orientation.
    pub orientation: HeadingPitchRoll,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            destination: GeoPosition::from_degrees(120.0, 28.0, 50000.0),
            orientation: HeadingPitchRoll::from_degrees(0.0, -45.0, 0.0),
        }
    }
}

/// 3D globe viewer the measurement tools are drawn on.
///
/// Rendering, picking and camera math are done by the implementation. The crate only creates,
/// configures and destroys the viewer.
pub trait Viewer {
    /// Elevation data source accepted by the viewer.
    type Terrain;

    /// Replaces the terrain of the viewer.
    fn set_terrain(&mut self, terrain: Self::Terrain);

    /// Moves the camera to the given pose immediately.
    fn set_view(&mut self, view: &CameraView);

    /// Releases all resources of the viewer and detaches it from its display container.
    fn destroy(&mut self);
}

/// Creates viewers in display containers.
pub trait ViewerFactory<V: Viewer> {
    /// Creates a viewer bound to the container with the given id.
    fn create(&self, container_id: &str) -> Result<V, MeasureError>;
}

impl<V, T> ViewerFactory<V> for T
where
    V: Viewer,
    T: Fn(&str) -> Result<V, MeasureError>,
{
    fn create(&self, container_id: &str) -> Result<V, MeasureError> {
        self(container_id)
    }
}

/// Shared ownership cell of the viewer.
///
/// The slot is emptied when the viewer is destroyed, so background tasks can check whether the
/// viewer still exists before touching it.
pub struct ViewerSlot<V> {
    inner: Arc<Mutex<Option<V>>>,
}

impl<V> ViewerSlot<V> {
    /// Creates a slot holding the viewer.
    pub fn new(viewer: V) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(viewer))),
        }
    }

    /// Creates an empty slot.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns true if the viewer was not destroyed yet.
    pub fn is_alive(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Runs `f` with the viewer if it still exists.
    pub fn with<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.inner.lock().as_mut().map(f)
    }

    /// Removes the viewer from the slot.
    pub fn take(&self) -> Option<V> {
        self.inner.lock().take()
    }
}

impl<V> Clone for ViewerSlot<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_view() {
        let view = CameraView::default();
        assert_relative_eq!(view.destination.lon, 120.0);
        assert_relative_eq!(view.destination.lat, 28.0);
        assert_relative_eq!(view.destination.height, 50000.0);
        assert_relative_eq!(view.orientation.heading, 0.0);
        assert_relative_eq!(view.orientation.pitch, -std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(view.orientation.roll, 0.0);
    }

    #[test]
    fn camera_view_from_json() {
        let view: CameraView = serde_json::from_str(
            r#"{
                "destination": { "lon": 10.0, "lat": 20.0, "height": 300.0 },
                "orientation": { "heading": 0.5, "pitch": -0.5, "roll": 0.0 }
            }"#,
        )
        .expect("valid view");

        assert_relative_eq!(view.destination.lon, 10.0);
        assert_relative_eq!(view.orientation.pitch, -0.5);
    }

    #[test]
    fn slot_is_shared() {
        let slot = ViewerSlot::new(5);
        let other = slot.clone();

        assert_eq!(other.with(|v| *v + 1), Some(6));
        assert_eq!(slot.take(), Some(5));
        assert!(!other.is_alive());
        assert_eq!(other.with(|v| *v), None);
        assert_eq!(other.take(), None);
    }
}
