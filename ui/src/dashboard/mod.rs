mod chart;
pub use chart::{chart_svg, MetricsChart};

mod settings;
pub use settings::ParameterPanel;

mod stats;
pub use stats::KeyStats;

mod table;
pub use table::ReadingsTable;

mod export;
pub use export::ExportPanel;

use crate::core::{config::AppConfig, reading::Reading, source};

/// Readings loaded for the session, or the reason they could not be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub readings: Vec<Reading>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load(config: &AppConfig) -> Self {
        match source::load_readings(config) {
            Ok(readings) => Self {
                readings,
                error: None,
            },
            Err(err) => Self {
                readings: Vec::new(),
                error: Some(format!("Couldn't load readings: {err}")),
            },
        }
    }
}
