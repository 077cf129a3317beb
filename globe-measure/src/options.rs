//! Configuration given to every measurement tool on construction.

use std::fmt::{Debug, Formatter as FmtFormatter};
use std::sync::Arc;

use crate::units::Units;

/// Formatting callback. Receives the raw value in base units (meters or square meters) and the
/// same value converted into the configured [`Units`].
pub type Formatter = Arc<dyn Fn(f64, f64) -> String + Send + Sync>;

const LENGTH_METERS_LIMIT: f64 = 1000.0;
const AREA_METERS_LIMIT: f64 = 1_000_000.0;

/// Formats a length: values under 1 km are shown in meters, the rest in converted units.
///
/// ```
/// use globe_measure::options::format_length_default;
///
/// assert_eq!(format_length_default(500.0, 0.5), "500m");
/// assert_eq!(format_length_default(1500.0, 1.5), "1.5km");
/// ```
pub fn format_length_default(length: f64, united_length: f64) -> String {
    if length < LENGTH_METERS_LIMIT {
        format!("{length}m")
    } else {
        format!("{united_length}km")
    }
}

/// Formats an area: values under 1 km² are shown in square meters, the rest in converted units.
pub fn format_area_default(area: f64, united_area: f64) -> String {
    if area < AREA_METERS_LIMIT {
        format!("{area}平方米")
    } else {
        format!("{united_area}平方千米")
    }
}

/// Label strings and formatters used by the tools when rendering their results.
#[derive(Clone)]
pub struct MeasureLocale {
    /// Label of the first point of a measurement.
    pub start: String,
    /// Label of an area result.
    pub area: String,
    /// Label of a total length result.
    pub total: String,
    /// Length formatter.
    pub format_length: Formatter,
    /// Area formatter.
    pub format_area: Formatter,
}

impl Default for MeasureLocale {
    fn default() -> Self {
        Self {
            start: "start".into(),
            area: "area".into(),
            total: "total".into(),
            format_length: Arc::new(format_length_default),
            format_area: Arc::new(format_area_default),
        }
    }
}

impl Debug for MeasureLocale {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasureLocale")
            .field("start", &self.start)
            .field("area", &self.area)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

/// Hints shown next to the pointer while drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerTips {
    /// Shown before the first point is placed.
    pub init: String,
    /// Shown while the shape is being drawn.
    pub start: String,
}

impl Default for DrawerTips {
    fn default() -> Self {
        Self {
            init: "点击绘制".into(),
            start: "左键添加点，右键移除点，双击结束绘制".into(),
        }
    }
}

/// Drawing interaction options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerOptions {
    /// Pointer hints.
    pub tips: DrawerTips,
}

/// Full configuration of a measurement tool. The same configuration is used for all tool kinds.
#[derive(Debug, Clone, Default)]
pub struct MeasureOptions {
    /// Display units.
    pub units: Units,
    /// Labels and formatters.
    pub locale: MeasureLocale,
    /// Drawing interaction options.
    pub drawer: DrawerOptions,
}

impl MeasureOptions {
    /// Formats a length given in meters using the configured units and formatter.
    pub fn format_length(&self, meters: f64) -> String {
        (self.locale.format_length)(meters, self.units.convert_length(meters))
    }

    /// Formats an area given in square meters using the configured units and formatter.
    pub fn format_area(&self, square_meters: f64) -> String {
        (self.locale.format_area)(square_meters, self.units.convert_area(square_meters))
    }
}
