//! End-to-end GKI scenarios through the public API: CSV in, derived values out.

use ui::core::{
    gki::{derive_readings, DisplayConfig, GkiMode},
    reading::read_csv,
    series::{to_long, Parameter},
    stats::SummaryStats,
    units::{to_mgdl, to_mmol, GlucoseUnit, KetoneUnit, GLUCOSE_MOLAR_MASS},
    MetaboError,
};

const TWO_DAYS: &str = "Date,Heure,Glycémie,Cétonémie\n\
                        01/01/2024,08:00,90,1.5\n\
                        02/01/2024,08:00,108,2.0\n";

fn config(unit: GlucoseUnit, mode: GkiMode) -> DisplayConfig {
    DisplayConfig::new(unit, KetoneUnit::MmolL, mode)
}

#[test]
fn standard_mode_in_mgdl_matches_reference_values() {
    let readings = read_csv(TWO_DAYS.as_bytes()).unwrap();
    let derived = derive_readings(&readings, &config(GlucoseUnit::MgDl, GkiMode::Standard));

    let gki: Vec<f64> = derived.iter().map(|d| d.gki).collect();
    assert!((gki[0] - 3.330).abs() < 1e-3, "got {}", gki[0]);
    assert!((gki[1] - 2.997).abs() < 1e-3, "got {}", gki[1]);

    let expected = [(90.0 / GLUCOSE_MOLAR_MASS) / 1.5, (108.0 / GLUCOSE_MOLAR_MASS) / 2.0];
    for (got, want) in gki.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6);
    }
}

#[test]
fn both_modes_agree_when_displaying_mgdl() {
    let readings = read_csv(TWO_DAYS.as_bytes()).unwrap();
    let standard = derive_readings(&readings, &config(GlucoseUnit::MgDl, GkiMode::Standard));
    let full = derive_readings(&readings, &config(GlucoseUnit::MgDl, GkiMode::FullMmol));
    for (a, b) in standard.iter().zip(&full) {
        assert!((a.gki - b.gki).abs() < 1e-6);
    }
}

#[test]
fn standard_mode_in_mmol_keeps_the_unit_dependent_result() {
    let readings = read_csv(TWO_DAYS.as_bytes()).unwrap();
    let derived = derive_readings(&readings, &config(GlucoseUnit::MmolL, GkiMode::Standard));
    assert!((derived[0].gki - 90.0 / 1.5).abs() < 1e-9);
    assert!((derived[0].glucose_display - to_mmol(90.0)).abs() < 1e-12);
}

#[test]
fn order_and_length_are_preserved() {
    let data = "Date,Heure,Glycémie,Cétonémie\n\
                03/01/2024,20:00,95,0.8\n\
                01/01/2024,08:00,90,1.5\n\
                02/01/2024,12:30,101,1.1\n";
    let readings = read_csv(data.as_bytes()).unwrap();
    let derived = derive_readings(&readings, &DisplayConfig::default());
    assert_eq!(derived.len(), readings.len());
    for (input, output) in readings.iter().zip(&derived) {
        assert_eq!(input.timestamp, output.timestamp);
    }
}

#[test]
fn round_trip_holds_across_range() {
    for mgdl in (20..=600).map(f64::from) {
        assert!((to_mgdl(to_mmol(mgdl)) - mgdl).abs() <= mgdl * 1e-6);
    }
}

#[test]
fn long_table_and_stats_feed_the_dashboard() {
    let readings = read_csv(TWO_DAYS.as_bytes()).unwrap();
    let derived = derive_readings(&readings, &config(GlucoseUnit::MgDl, GkiMode::Standard));

    let long = to_long(&derived);
    assert_eq!(long.len(), 6);
    assert_eq!(long.iter().filter(|p| p.parameter == Parameter::Gki).count(), 2);

    let stats = SummaryStats::from_readings(&derived);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.mean_glucose, 99.0);
    assert_eq!(stats.mean_ketone, 1.75);
}

#[test]
fn unknown_selector_values_fail_fast() {
    let err = DisplayConfig::parse("mmol/dL", "mmol/L", "Full mmol").unwrap_err();
    assert!(matches!(err, MetaboError::UnsupportedOption { .. }));
}
