use serde::{Deserialize, Serialize};

/// Display unit system of measurement results.
///
/// The viewer always reports lengths in meters and areas in square meters. Tools convert these
/// base values into the configured unit before handing them to the formatting callbacks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Meters and square meters.
    Meters,
    /// Kilometers and square kilometers.
    #[default]
    Kilometers,
    /// International miles.
    Miles,
    /// Nautical miles.
    #[serde(rename = "nauticalmiles")]
    NauticalMiles,
    /// International feet.
    Feet,
}

impl Units {
    /// Number of meters in one unit.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Units::Meters => 1.0,
            Units::Kilometers => 1000.0,
            Units::Miles => 1609.344,
            Units::NauticalMiles => 1852.0,
            Units::Feet => 0.3048,
        }
    }

    /// Converts a length in meters into these units.
    pub fn convert_length(&self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Converts an area in square meters into square units.
    pub fn convert_area(&self, square_meters: f64) -> f64 {
        let factor = self.meters_per_unit();
        square_meters / (factor * factor)
    }
}
