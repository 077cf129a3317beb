//! Measurement tool kinds and the interface of the tool implementations.
//!
//! Tools themselves (drawing interaction, geodesic computations, overlays) are provided by the
//! viewer integration through a [`ToolFactory`]. This module only describes the contract the
//! [`ToolController`](crate::ToolController) relies on.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::MeasureError;
use crate::options::MeasureOptions;

/// Kind of a measurement tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Straight line distance between the points.
    Distance,
    /// Distance following the terrain surface.
    SurfaceDistance,
    /// Area of a polygon.
    Area,
    /// Area of a polygon draped over the terrain surface.
    SurfaceArea,
}

impl ToolKind {
    /// All tool kinds in the order they are presented to the user.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Distance,
        ToolKind::SurfaceDistance,
        ToolKind::Area,
        ToolKind::SurfaceArea,
    ];

    /// Unique identifier of the tool.
    pub fn key(&self) -> &'static str {
        match self {
            ToolKind::Distance => "Distance",
            ToolKind::SurfaceDistance => "SurfaceDistance",
            ToolKind::Area => "Area",
            ToolKind::SurfaceArea => "SurfaceArea",
        }
    }

    /// Text of the tool button.
    pub fn label(&self) -> &'static str {
        self.key()
    }

    /// Whether the tool measures an area rather than a length.
    pub fn is_area(&self) -> bool {
        matches!(self, ToolKind::Area | ToolKind::SurfaceArea)
    }

    /// Whether the tool follows the terrain surface.
    pub fn is_surface(&self) -> bool {
        matches!(self, ToolKind::SurfaceDistance | ToolKind::SurfaceArea)
    }
}

impl Display for ToolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ToolKind {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| MeasureError::UnknownTool(s.to_string()))
    }
}

/// Static description of a tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Button text.
    pub label: &'static str,
    /// Unique identifier.
    pub key: &'static str,
    /// Tool kind that is constructed when the button is activated.
    pub kind: ToolKind,
}

impl ToolDescriptor {
    const fn new(label: &'static str, key: &'static str, kind: ToolKind) -> Self {
        Self { label, key, kind }
    }
}

/// Tool buttons in display order.
pub const TOOL_DESCRIPTORS: [ToolDescriptor; 4] = [
    ToolDescriptor::new("Distance", "Distance", ToolKind::Distance),
    ToolDescriptor::new("SurfaceDistance", "SurfaceDistance", ToolKind::SurfaceDistance),
    ToolDescriptor::new("Area", "Area", ToolKind::Area),
    ToolDescriptor::new("SurfaceArea", "SurfaceArea", ToolKind::SurfaceArea),
];

/// A live measurement tool attached to a viewer.
pub trait MeasureTool {
    /// Arms the tool: user input on the viewer now draws a new measurement.
    fn start(&mut self);

    /// Finishes the current measurement. The tool stays armed and can be used again.
    fn end(&mut self);

    /// Releases all resources and overlays of the tool. The tool is not used after this call.
    fn destroy(&mut self);
}

/// Constructs measurement tools bound to a viewer.
pub trait ToolFactory<V> {
    /// Creates a tool of the given kind. The tool is not started yet.
    fn create(&self, kind: ToolKind, viewer: &V, options: &MeasureOptions) -> Box<dyn MeasureTool>;
}

impl<V, T> ToolFactory<V> for T
where
    T: Fn(ToolKind, &V, &MeasureOptions) -> Box<dyn MeasureTool>,
{
    fn create(&self, kind: ToolKind, viewer: &V, options: &MeasureOptions) -> Box<dyn MeasureTool> {
        self(kind, viewer, options)
    }
}
