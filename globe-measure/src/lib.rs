//! Globe measure wires a set of measurement tools to a 3D globe viewer. It owns the viewer
//! lifecycle (creation, background terrain loading, initial camera pose, teardown) and the tool
//! selection state, while drawing, picking and geodesic computations are left to the viewer
//! integration.
//!
//! # Quick start
//!
//! ```ignore
//! use globe_measure::{MeasureMapBuilder, ToolKind};
//!
//! let (mut map, terrain) = MeasureMapBuilder::default()
//!     .mount(&viewer_factory, terrain_provider, tool_factory)?;
//!
//! // Button handlers
//! map.toggle_tool(ToolKind::Distance);
//! map.clear();
//!
//! // Optionally wait for the terrain, the map works without it
//! let state = terrain.await;
//! ```
//!
//! # Main components
//!
//! * [`MeasureMap`] is the mounted component. It creates the viewer through a [`ViewerFactory`],
//!   loads terrain from a [`TerrainProvider`] in the background and tears everything down when
//!   unmounted or dropped.
//! * [`ToolController`] keeps at most one [`MeasureTool`] alive. Tools are created by a
//!   [`ToolFactory`] with the shared [`MeasureOptions`](options::MeasureOptions).
//! * [`Messenger`] lets the host UI know that the viewer needs a redraw after a background
//!   change.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub(crate) mod async_runtime;
mod controller;
pub mod error;
mod measure_map;
mod messenger;
pub mod options;
pub mod terrain;
pub mod tool;
mod units;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use controller::{SelectionState, ToolController};
pub use error::MeasureError;
pub use measure_map::{MapConfig, MeasureMap, MeasureMapBuilder};
pub use messenger::{DummyMessenger, Messenger};
pub use terrain::{TerrainLoading, TerrainProvider, TerrainState};
pub use tool::{MeasureTool, ToolDescriptor, ToolFactory, ToolKind, TOOL_DESCRIPTORS};
pub use units::Units;
pub use viewer::{CameraView, GeoPosition, HeadingPitchRoll, Viewer, ViewerFactory, ViewerSlot};
