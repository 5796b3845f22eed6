//! Chart-ready reshaping of derived readings.

use time::{Duration, PrimitiveDateTime};

use super::gki::DerivedReading;

/// Plotted parameter. Labels are the names used throughout the tracking sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Glycemia,
    Ketonemia,
    Gki,
}

impl Parameter {
    /// Melt order: every glucose row, then every ketone row, then GKI.
    pub const ALL: [Parameter; 3] = [Parameter::Glycemia, Parameter::Ketonemia, Parameter::Gki];

    pub fn label(self) -> &'static str {
        match self {
            Self::Glycemia => "Glycémie",
            Self::Ketonemia => "Cétonémie",
            Self::Gki => "GKI",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Glycemia => "#e74c3c",
            Self::Ketonemia => "#2980b9",
            Self::Gki => "#27ae60",
        }
    }

    pub fn value_of(self, reading: &DerivedReading) -> f64 {
        match self {
            Self::Glycemia => reading.glucose_display,
            Self::Ketonemia => reading.ketone_display,
            Self::Gki => reading.gki,
        }
    }
}

/// One row of the long table: a single parameter value at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: PrimitiveDateTime,
    pub parameter: Parameter,
    pub value: f64,
}

/// Reshape wide derived readings into one row per parameter per timestamp.
pub fn to_long(readings: &[DerivedReading]) -> Vec<SeriesPoint> {
    Parameter::ALL
        .iter()
        .flat_map(|&parameter| {
            readings.iter().map(move |reading| SeriesPoint {
                timestamp: reading.timestamp,
                parameter,
                value: parameter.value_of(reading),
            })
        })
        .collect()
}

/// Range presets for the chart, counted backward from the most recent reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    #[default]
    All,
    Days30,
    Days7,
    Hours48,
    Hours24,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::All,
        TimeWindow::Days30,
        TimeWindow::Days7,
        TimeWindow::Hours48,
        TimeWindow::Hours24,
    ];

    pub fn span(self) -> Option<Duration> {
        match self {
            Self::All => None,
            Self::Days30 => Some(Duration::days(30)),
            Self::Days7 => Some(Duration::days(7)),
            Self::Hours48 => Some(Duration::days(2)),
            Self::Hours24 => Some(Duration::days(1)),
        }
    }

    /// Keep the readings inside the window, in their original order.
    pub fn apply(self, readings: &[DerivedReading]) -> Vec<DerivedReading> {
        let (Some(span), Some(latest)) = (self.span(), latest_timestamp(readings)) else {
            return readings.to_vec();
        };
        let start = latest - span;
        readings
            .iter()
            .filter(|reading| reading.timestamp >= start)
            .copied()
            .collect()
    }
}

pub fn latest_timestamp(readings: &[DerivedReading]) -> Option<PrimitiveDateTime> {
    readings.iter().map(|reading| reading.timestamp).max()
}

pub fn earliest_timestamp(readings: &[DerivedReading]) -> Option<PrimitiveDateTime> {
    readings.iter().map(|reading| reading.timestamp).min()
}

/// Range-slider selection: keep the readings between `from_percent` and `to_percent`
/// of the span from the earliest to the latest reading. Percentages above 100 are
/// clamped and the bounds may come in either order.
pub fn clip_to_range(
    readings: &[DerivedReading],
    from_percent: u8,
    to_percent: u8,
) -> Vec<DerivedReading> {
    let (Some(first), Some(last)) = (earliest_timestamp(readings), latest_timestamp(readings))
    else {
        return Vec::new();
    };
    let lo = from_percent.min(to_percent).min(100);
    let hi = from_percent.max(to_percent).min(100);
    let span = (last - first).as_seconds_f64();
    let at = |percent: u8| first + Duration::seconds_f64(span * f64::from(percent) / 100.0);
    let (start, end) = (at(lo), at(hi));

    readings
        .iter()
        .filter(|reading| reading.timestamp >= start && reading.timestamp <= end)
        .copied()
        .collect()
}
