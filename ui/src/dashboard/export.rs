use dioxus::prelude::*;
use serde::Serialize;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::{
    gki::{DerivedReading, DisplayConfig},
    reading::format_timestamp,
};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct ExportRow {
    timestamp: String,
    glucose: f64,
    glucose_unit: &'static str,
    ketone: f64,
    ketone_unit: &'static str,
    gki: f64,
    gki_mode: &'static str,
}

impl ExportRow {
    fn new(reading: &DerivedReading, config: &DisplayConfig) -> Self {
        Self {
            timestamp: format_timestamp(reading.timestamp),
            glucose: reading.glucose_display,
            glucose_unit: config.glucose_unit.label(),
            ketone: reading.ketone_display,
            ketone_unit: config.ketone_unit.label(),
            gki: reading.gki,
            gki_mode: config.gki_mode.key(),
        }
    }
}

#[component]
pub fn ExportPanel(readings: Vec<DerivedReading>, config: DisplayConfig) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dashboard-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let make_handler = |format: ExportFormat| {
        let export_readings = readings.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_: MouseEvent| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(match format {
                ExportFormat::Json => "Preparing JSON",
                ExportFormat::Csv => "Preparing CSV",
            }));
            let export_readings = export_readings.clone();

            #[cfg(target_arch = "wasm32")]
            {
                platform::spawn_future(async move {
                    match perform_export(format, export_readings, config).await {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome =
                    futures::executor::block_on(perform_export(format, export_readings, config));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };
    let json_handler = make_handler(ExportFormat::Json);
    let csv_handler = make_handler(ExportFormat::Csv);

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { {t!("export-title")} }
            }

            if readings.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("export-empty")} }
            } else {
                p { {t!("export-intro")} }

                div { class: "dashboard-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: json_handler,
                        {t!("export-json")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: csv_handler,
                        {t!("export-csv")}
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_export(
    format: ExportFormat,
    readings: Vec<DerivedReading>,
    config: DisplayConfig,
) -> Result<String, String> {
    let (body, extension, mime) = match format {
        ExportFormat::Json => (build_json(&readings, &config)?, "json", "application/json"),
        ExportFormat::Csv => (build_csv(&readings, &config)?, "csv", "text/csv"),
    };
    let filename = format!("metabo-readings-{}.{extension}", timestamp_slug());
    let delivery = download_bytes(&filename, mime, body.into_bytes()).await?;
    log::info!("exported {} readings as {extension}", readings.len());
    Ok(match delivery {
        Some(path) => format!("Saved to {path}"),
        None => "Download started".to_string(),
    })
}

fn build_json(readings: &[DerivedReading], config: &DisplayConfig) -> Result<String, String> {
    let rows: Vec<ExportRow> = readings
        .iter()
        .map(|reading| ExportRow::new(reading, config))
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|err| err.to_string())
}

fn build_csv(readings: &[DerivedReading], config: &DisplayConfig) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for reading in readings {
        writer
            .serialize(ExportRow::new(reading, config))
            .map_err(|err| err.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "Metabo", "Metabo")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        gki::{derive_readings, GkiMode},
        reading::Reading,
        units::{GlucoseUnit, KetoneUnit},
    };

    fn sample() -> (Vec<DerivedReading>, DisplayConfig) {
        let readings = vec![
            Reading::from_cells("01/01/2024", "08:00", 90.0, 1.5).unwrap(),
            Reading::from_cells("02/01/2024", "08:00", 108.0, 2.0).unwrap(),
        ];
        let config = DisplayConfig::new(GlucoseUnit::MgDl, KetoneUnit::MmolL, GkiMode::Standard);
        (derive_readings(&readings, &config), config)
    }

    #[test]
    fn csv_has_header_and_one_line_per_reading() {
        let (readings, config) = sample();
        let csv = build_csv(&readings, &config).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "timestamp,glucose,glucose_unit,ketone,ketone_unit,gki,gki_mode"
        );
        assert!(lines[1].starts_with("01/01/2024 08:00,90.0,mg/dL,1.5,mmol/L,3.33"));
        assert!(lines[2].ends_with(",Standard"));
    }

    #[test]
    fn json_lists_rows_with_units() {
        let (readings, config) = sample();
        let json = build_json(&readings, &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["timestamp"], "02/01/2024 08:00");
        assert_eq!(rows[1]["glucose_unit"], "mg/dL");
        assert!((rows[1]["gki"].as_f64().unwrap() - 2.9974).abs() < 1e-3);
    }
}
