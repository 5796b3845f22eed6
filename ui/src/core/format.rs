//! Formatting helpers for presenting metrics.

/// Fixed-precision number, or an em dash when the value is not finite.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

pub fn format_with_unit(value: f64, decimals: usize, unit: &str) -> String {
    if value.is_finite() {
        format!("{} {unit}", format_number(value, decimals))
    } else {
        "—".to_string()
    }
}

/// Ketone values are shown with two decimals everywhere (0.45 stays 0.45).
pub const KETONE_DECIMALS: usize = 2;

/// Decimals suited to a glucose value in the given unit.
pub fn glucose_decimals(unit: crate::core::units::GlucoseUnit) -> usize {
    match unit {
        crate::core::units::GlucoseUnit::MgDl => 0,
        crate::core::units::GlucoseUnit::MmolL => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::GlucoseUnit;

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_number(f64::NAN, 2), "—");
        assert_eq!(format_with_unit(f64::INFINITY, 1, "mg/dL"), "—");
    }

    #[test]
    fn precision_and_units() {
        assert_eq!(format_number(3.33045, 2), "3.33");
        assert_eq!(format_with_unit(99.04, 1, "mg/dL"), "99.0 mg/dL");
        assert_eq!(glucose_decimals(GlucoseUnit::MgDl), 0);
    }
}
