//! Aggregates shown in the "key statistics" strip.

use super::gki::DerivedReading;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStats {
    pub count: usize,
    pub mean_glucose: f64,
    pub mean_ketone: f64,
    pub mean_gki: f64,
}

impl SummaryStats {
    pub fn from_readings(readings: &[DerivedReading]) -> Self {
        Self {
            count: readings.len(),
            mean_glucose: mean(readings.iter().map(|r| r.glucose_display)),
            mean_ketone: mean(readings.iter().map(|r| r.ketone_display)),
            mean_gki: mean(readings.iter().map(|r| r.gki)),
        }
    }
}

/// Arithmetic mean that skips NaN cells. Infinities still propagate; an empty (or
/// all-NaN) column yields NaN.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0usize), |(sum, n), value| (sum + value, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}
