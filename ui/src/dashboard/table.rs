use dioxus::prelude::*;

use crate::core::{
    format,
    gki::{DerivedReading, DisplayConfig},
    reading::format_timestamp,
};
use crate::t;

#[component]
pub fn ReadingsTable(readings: Vec<DerivedReading>, config: DisplayConfig) -> Element {
    let rows: Vec<[String; 4]> = readings
        .iter()
        .map(|reading| table_row(reading, &config))
        .collect();

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h2 { {t!("readings-title")} }
                if !readings.is_empty() {
                    span { class: "dashboard-card__meta", "{readings.len()}" }
                }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("readings-empty")} }
            } else {
                table { class: "dashboard-table__grid",
                    thead {
                        tr {
                            th { {t!("readings-col-time")} }
                            th { {t!("readings-col-glucose")} " ({config.glucose_unit})" }
                            th { {t!("readings-col-ketone")} " ({config.ketone_unit})" }
                            th { "GKI" }
                        }
                    }
                    tbody {
                        for [timestamp, glucose, ketone, gki] in rows.into_iter() {
                            tr {
                                td { "{timestamp}" }
                                td { class: "dashboard-table__number", "{glucose}" }
                                td { class: "dashboard-table__number", "{ketone}" }
                                td { class: "dashboard-table__number", "{gki}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn table_row(reading: &DerivedReading, config: &DisplayConfig) -> [String; 4] {
    [
        format_timestamp(reading.timestamp),
        format::format_number(
            reading.glucose_display,
            format::glucose_decimals(config.glucose_unit),
        ),
        format::format_number(reading.ketone_display, format::KETONE_DECIMALS),
        format::format_number(reading.gki, 2),
    ]
}
