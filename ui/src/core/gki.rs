//! Glucose-Ketone Index derivation.
//!
//! `derive_readings` maps every stored [`Reading`] to a [`DerivedReading`] carrying the
//! display values for the chosen units plus the GKI. It is a pure function of its inputs:
//! the dashboard simply calls it again whenever a selector changes.
//!
//! Two numerator paths exist:
//!
//! - **Standard** expresses glucose in mg/dL first (multiplying by the molar mass when the
//!   selected unit is mmol/L) and then divides by the molar mass. The selected unit
//!   therefore changes the result even though the stored data is always mg/dL. This is
//!   kept as-is so figures match earlier dashboards; see DESIGN.md.
//! - **Full mmol** converts mg/dL to mmol/L when mg/dL is selected and passes the raw
//!   value through otherwise.
//!
//! Zero or negative ketone values are not guarded; the resulting inf/NaN flows through.

use std::fmt;
use std::str::FromStr;

use time::PrimitiveDateTime;

use super::error::MetaboError;
use super::reading::Reading;
use super::units::{to_mgdl, to_mmol, GlucoseUnit, KetoneUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GkiMode {
    Standard,
    FullMmol,
}

impl GkiMode {
    pub const ALL: [GkiMode; 2] = [GkiMode::Standard, GkiMode::FullMmol];

    /// Selector label, also accepted by `FromStr`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard (mg/dL/mmol)",
            Self::FullMmol => "Full mmol",
        }
    }

    /// Short identifier used in exports.
    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::FullMmol => "FullMmol",
        }
    }
}

impl fmt::Display for GkiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GkiMode {
    type Err = MetaboError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "Standard" | "Standard (mg/dL/mmol)" => Ok(Self::Standard),
            "FullMmol" | "Full mmol" => Ok(Self::FullMmol),
            other => Err(MetaboError::unsupported("GKI mode", other)),
        }
    }
}

/// User-selected presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayConfig {
    pub glucose_unit: GlucoseUnit,
    pub ketone_unit: KetoneUnit,
    pub gki_mode: GkiMode,
}

impl DisplayConfig {
    pub fn new(glucose_unit: GlucoseUnit, ketone_unit: KetoneUnit, gki_mode: GkiMode) -> Self {
        Self {
            glucose_unit,
            ketone_unit,
            gki_mode,
        }
    }

    /// Parse the three selector values, failing on the first unknown one.
    pub fn parse(glucose_unit: &str, ketone_unit: &str, gki_mode: &str) -> Result<Self, MetaboError> {
        Ok(Self::new(
            glucose_unit.parse()?,
            ketone_unit.parse()?,
            gki_mode.parse()?,
        ))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(GlucoseUnit::MmolL, KetoneUnit::MmolL, GkiMode::FullMmol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedReading {
    pub timestamp: PrimitiveDateTime,
    pub glucose_display: f64,
    pub ketone_display: f64,
    pub gki: f64,
}

/// Glucose converted to the selected display unit.
pub fn glucose_display(glucose_raw: f64, unit: GlucoseUnit) -> f64 {
    match unit {
        GlucoseUnit::MgDl => glucose_raw,
        GlucoseUnit::MmolL => to_mmol(glucose_raw),
    }
}

/// Ketones are stored in the only supported unit, so this is a pass-through.
pub fn ketone_display(ketone_raw: f64, _unit: KetoneUnit) -> f64 {
    ketone_raw
}

/// The mmol/L glucose value that forms the GKI numerator.
pub fn gki_glucose_component(glucose_raw: f64, unit: GlucoseUnit, mode: GkiMode) -> f64 {
    match mode {
        GkiMode::Standard => {
            let mgdl = match unit {
                GlucoseUnit::MgDl => glucose_raw,
                GlucoseUnit::MmolL => to_mgdl(glucose_raw),
            };
            to_mmol(mgdl)
        }
        GkiMode::FullMmol => match unit {
            GlucoseUnit::MgDl => to_mmol(glucose_raw),
            GlucoseUnit::MmolL => glucose_raw,
        },
    }
}

pub fn derive_reading(reading: &Reading, config: &DisplayConfig) -> DerivedReading {
    let component = gki_glucose_component(reading.glucose_raw, config.glucose_unit, config.gki_mode);
    DerivedReading {
        timestamp: reading.timestamp,
        glucose_display: glucose_display(reading.glucose_raw, config.glucose_unit),
        ketone_display: ketone_display(reading.ketone_raw, config.ketone_unit),
        gki: component / reading.ketone_raw,
    }
}

/// Derive every reading, preserving order and length.
pub fn derive_readings(readings: &[Reading], config: &DisplayConfig) -> Vec<DerivedReading> {
    log::debug!(
        "deriving {} readings ({}, {}, {})",
        readings.len(),
        config.glucose_unit,
        config.ketone_unit,
        config.gki_mode
    );
    readings
        .iter()
        .map(|reading| derive_reading(reading, config))
        .collect()
}
