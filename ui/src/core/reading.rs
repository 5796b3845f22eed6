//! Raw measurements as they come out of the tracking spreadsheet.

use std::io;

use serde::Deserialize;
use time::{macros::format_description, PrimitiveDateTime};

use super::error::{MetaboError, Result};

/// One measurement event. Glucose is stored in mg/dL, ketones in mmol/L.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: PrimitiveDateTime,
    pub glucose_raw: f64,
    pub ketone_raw: f64,
}

impl Reading {
    pub fn new(timestamp: PrimitiveDateTime, glucose_raw: f64, ketone_raw: f64) -> Self {
        Self {
            timestamp,
            glucose_raw,
            ketone_raw,
        }
    }

    /// Build a reading from the spreadsheet's separate date and time cells.
    pub fn from_cells(date: &str, time: &str, glucose_raw: f64, ketone_raw: f64) -> Result<Self> {
        Ok(Self::new(parse_timestamp(date, time)?, glucose_raw, ketone_raw))
    }
}

/// Join `DD/MM/YYYY` and `HH:MM` and parse them as one instant. Day, month and hour
/// may drop their leading zero (`1/3/2024 7:05`); minutes keep two digits.
pub fn parse_timestamp(date: &str, time: &str) -> Result<PrimitiveDateTime> {
    let raw = format!("{} {}", date.trim(), time.trim());
    PrimitiveDateTime::parse(
        &raw,
        format_description!(
            "[day padding:none]/[month padding:none]/[year] [hour padding:none]:[minute]"
        ),
    )
    .map_err(|_| MetaboError::MalformedTimestamp { raw })
}

/// Inverse of [`parse_timestamp`], used by tables and exports.
pub fn format_timestamp(timestamp: PrimitiveDateTime) -> String {
    timestamp
        .format(format_description!(
            "[day]/[month]/[year] [hour]:[minute]"
        ))
        .unwrap_or_else(|_| "—".to_string())
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Heure")]
    time: String,
    #[serde(rename = "Glycémie")]
    glucose: f64,
    #[serde(rename = "Cétonémie")]
    ketone: f64,
}

/// Parse the tracking CSV. Rows keep file order; the first bad row aborts the load.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Reading>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvRow>()
        .map(|row| {
            let row = row?;
            Reading::from_cells(&row.date, &row.time, row.glucose, row.ketone)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn date_and_time_cells_combine() {
        let ts = parse_timestamp("01/02/2024", "08:30").unwrap();
        assert_eq!(ts, datetime!(2024-02-01 08:30));
        assert_eq!(format_timestamp(ts), "01/02/2024 08:30");
    }

    #[test]
    fn unpadded_day_month_and_hour_are_accepted() {
        assert_eq!(
            parse_timestamp("1/3/2024", "7:05").unwrap(),
            datetime!(2024-03-01 07:05)
        );

        let data = "Date,Heure,Glycémie,Cétonémie\n\
                    1/3/2024,7:05,90,1.5\n\
                    01/03/2024,08:00,95,1.2\n";
        let readings = read_csv(data.as_bytes()).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].timestamp, datetime!(2024-03-01 07:05));
        assert_eq!(readings[1].timestamp, datetime!(2024-03-01 08:00));
        assert_eq!(format_timestamp(readings[0].timestamp), "01/03/2024 07:05");
    }

    #[test]
    fn malformed_timestamp_is_reported_with_input() {
        let err = parse_timestamp("2024-01-01", "08:00").unwrap_err();
        match err {
            MetaboError::MalformedTimestamp { raw } => assert_eq!(raw, "2024-01-01 08:00"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_timestamp("32/01/2024", "08:00").is_err());
        assert!(parse_timestamp("01/01/2024", "25:00").is_err());
    }

    #[test]
    fn csv_rows_keep_file_order_and_ignore_extra_columns() {
        let data = "Date,Heure,Glycémie,Cétonémie,Note\n\
                    02/01/2024,08:00,108,2.0,fasted\n\
                    01/01/2024, 08:00 ,90,1.5,\n";
        let readings = read_csv(data.as_bytes()).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].timestamp, datetime!(2024-01-02 08:00));
        assert_eq!(readings[0].glucose_raw, 108.0);
        assert_eq!(readings[1].timestamp, datetime!(2024-01-01 08:00));
        assert_eq!(readings[1].ketone_raw, 1.5);
    }

    #[test]
    fn bad_rows_abort_the_load() {
        let bad_time = "Date,Heure,Glycémie,Cétonémie\n01/01/2024,8h00,90,1.5\n";
        assert!(matches!(
            read_csv(bad_time.as_bytes()),
            Err(MetaboError::MalformedTimestamp { .. })
        ));

        let bad_number = "Date,Heure,Glycémie,Cétonémie\n01/01/2024,08:00,high,1.5\n";
        assert!(matches!(
            read_csv(bad_number.as_bytes()),
            Err(MetaboError::Csv(_))
        ));

        let missing_column = "Date,Heure,Glycémie\n01/01/2024,08:00,90\n";
        assert!(read_csv(missing_column.as_bytes()).is_err());
    }
}
