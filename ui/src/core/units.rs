//! Glucose unit conversion between mass (mg/dL) and molar (mmol/L) concentration.

use std::fmt;
use std::str::FromStr;

use super::error::MetaboError;

/// Molar mass of glucose in g/mol.
pub const GLUCOSE_MOLAR_MASS: f64 = 18.01559;

/// mg/dL → mmol/L.
pub fn to_mmol(mgdl: f64) -> f64 {
    mgdl / GLUCOSE_MOLAR_MASS
}

/// mmol/L → mg/dL.
pub fn to_mgdl(mmol: f64) -> f64 {
    mmol * GLUCOSE_MOLAR_MASS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlucoseUnit {
    MgDl,
    MmolL,
}

impl GlucoseUnit {
    pub const ALL: [GlucoseUnit; 2] = [GlucoseUnit::MgDl, GlucoseUnit::MmolL];

    pub fn label(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }
}

impl fmt::Display for GlucoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GlucoseUnit {
    type Err = MetaboError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "mg/dL" => Ok(Self::MgDl),
            "mmol/L" => Ok(Self::MmolL),
            other => Err(MetaboError::unsupported("glucose unit", other)),
        }
    }
}

/// Ketone display unit. Only mmol/L exists today; stored values are already in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KetoneUnit {
    #[default]
    MmolL,
}

impl KetoneUnit {
    pub const ALL: [KetoneUnit; 1] = [KetoneUnit::MmolL];

    pub fn label(self) -> &'static str {
        match self {
            Self::MmolL => "mmol/L",
        }
    }
}

impl fmt::Display for KetoneUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KetoneUnit {
    type Err = MetaboError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "mmol/L" => Ok(Self::MmolL),
            other => Err(MetaboError::unsupported("ketone unit", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_over_physiological_range() {
        let mut mgdl = 20.0;
        while mgdl <= 600.0 {
            let back = to_mgdl(to_mmol(mgdl));
            assert!(
                ((back - mgdl) / mgdl).abs() < 1e-6,
                "round trip drifted for {mgdl}: {back}"
            );
            mgdl += 0.5;
        }
    }

    #[test]
    fn ninety_mgdl_is_about_five_mmol() {
        assert!((to_mmol(90.0) - 4.995_67).abs() < 1e-4);
        assert_eq!(to_mgdl(1.0), GLUCOSE_MOLAR_MASS);
    }

    #[test]
    fn unit_labels_parse_back() {
        for unit in GlucoseUnit::ALL {
            assert_eq!(unit.label().parse::<GlucoseUnit>().unwrap(), unit);
        }
        assert_eq!("mmol/L".parse::<KetoneUnit>().unwrap(), KetoneUnit::MmolL);
    }

    #[test]
    fn unknown_units_are_rejected() {
        let err = "g/L".parse::<GlucoseUnit>().unwrap_err();
        assert!(matches!(
            err,
            MetaboError::UnsupportedOption { field: "glucose unit", .. }
        ));
        assert!("mg/dL".parse::<KetoneUnit>().is_err());
    }
}
