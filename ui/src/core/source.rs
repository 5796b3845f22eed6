//! Where readings come from: the configured CSV on desktop, a bundled sample on the web.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::config::AppConfig;
use super::error::Result;
use super::platform::Platform;
use super::reading::{read_csv, Reading};

/// Sample data set shipped with the crate.
pub const BUNDLED_SAMPLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/metabo_data.csv"
));

pub fn load_readings(config: &AppConfig) -> Result<Vec<Reading>> {
    let platform = Platform::current();
    let readings = if platform.has_filesystem() {
        load_from_path(&config.data_path)
    } else {
        bundled_readings()
    };

    match &readings {
        Ok(rows) => log::info!("loaded {} readings ({platform:?})", rows.len()),
        Err(err) => log::error!("failed to load readings: {err}"),
    }
    readings
}

pub fn load_from_path(path: &Path) -> Result<Vec<Reading>> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

pub fn bundled_readings() -> Result<Vec<Reading>> {
    read_csv(BUNDLED_SAMPLE.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MetaboError;

    #[test]
    fn bundled_sample_parses() {
        let readings = bundled_readings().unwrap();
        assert!(!readings.is_empty());
        assert!(readings.iter().all(|r| r.ketone_raw > 0.0));
        assert!(readings.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_path(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, MetaboError::Io(_)));
    }

    #[test]
    fn configured_path_is_read_on_desktop() {
        let config = AppConfig {
            data_path: Path::new(env!("CARGO_MANIFEST_DIR")).join("data/metabo_data.csv"),
            password: None,
        };
        let from_path = load_readings(&config).unwrap();
        assert_eq!(from_path, bundled_readings().unwrap());
    }
}
