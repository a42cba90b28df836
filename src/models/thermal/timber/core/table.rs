//! Per-phase material parameters.

use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::celsius;

use super::{ConfigError, Phase};

/// Material parameters for one settled phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Temperature at which this phase gives way to the next one.
    pub threshold: ThermodynamicTemperature,
    pub density: MassDensity,
    pub conductivity: ThermalConductivity,
    pub specific_heat: SpecificHeatCapacity,
}

impl TableRow {
    /// Creates a row from `[threshold °C, density kg/m³, conductivity W/m·K, specific heat J/kg·K]`.
    ///
    /// Values are taken as given; sign problems surface as invariant
    /// violations when properties are evaluated.
    #[must_use]
    pub fn from_raw([threshold, density, conductivity, specific_heat]: [f64; 4]) -> Self {
        Self {
            threshold: celsius(threshold),
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
        }
    }
}

/// A four-row table of wet, dry, char and ash parameters.
///
/// The wet, dry and char rows also carry the phase-boundary temperatures
/// `T1`, `T2` and `T3`. The ash row's threshold is not used.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    rows: [TableRow; 4],
}

impl ParameterTable {
    /// Creates a table from its four rows.
    #[must_use]
    pub fn new(wet: TableRow, dry: TableRow, charred: TableRow, ash: TableRow) -> Self {
        Self {
            rows: [wet, dry, charred, ash],
        }
    }

    /// Creates a table from raw rows in wet, dry, char, ash order.
    ///
    /// See [`TableRow::from_raw`] for the column layout.
    #[must_use]
    pub fn from_raw(rows: [[f64; 4]; 4]) -> Self {
        Self {
            rows: rows.map(TableRow::from_raw),
        }
    }

    #[must_use]
    pub fn wet(&self) -> &TableRow {
        &self.rows[0]
    }

    #[must_use]
    pub fn dry(&self) -> &TableRow {
        &self.rows[1]
    }

    #[must_use]
    pub fn char(&self) -> &TableRow {
        &self.rows[2]
    }

    #[must_use]
    pub fn ash(&self) -> &TableRow {
        &self.rows[3]
    }

    /// Returns the row describing `phase`.
    ///
    /// `Evaporation` reads the wet row.
    #[must_use]
    pub fn row(&self, phase: Phase) -> &TableRow {
        match phase.settled() {
            Phase::Wet | Phase::Evaporation => self.wet(),
            Phase::Dry => self.dry(),
            Phase::Char => self.char(),
            Phase::Ash => self.ash(),
        }
    }

    /// Returns the phase-boundary temperatures `[T1, T2, T3]`.
    #[must_use]
    pub fn thresholds(&self) -> [ThermodynamicTemperature; 3] {
        [
            self.wet().threshold,
            self.dry().threshold,
            self.char().threshold,
        ]
    }
}

/// Builds a table from rows loaded at run time.
impl TryFrom<&[[f64; 4]]> for ParameterTable {
    type Error = ConfigError;

    fn try_from(rows: &[[f64; 4]]) -> Result<Self, Self::Error> {
        let rows: [[f64; 4]; 4] = rows
            .try_into()
            .map_err(|_| ConfigError::TableShape { rows: rows.len() })?;
        Ok(Self::from_raw(rows))
    }
}
