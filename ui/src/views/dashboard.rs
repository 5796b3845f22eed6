use dioxus::prelude::*;

use crate::components::Session;
use crate::core::{gki::derive_readings, stats::SummaryStats};
use crate::dashboard::{KeyStats, MetricsChart, ParameterPanel};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();
    // Subscribe to the global language code so the page re-renders on locale change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let derived = use_memo(move || {
        let config = (session.config)();
        (session.data).with(|state| derive_readings(&state.readings, &config))
    });

    if (session.grant)().is_none() {
        return rsx! {};
    }

    let config = (session.config)();
    let load_error = (session.data).with(|state| state.error.clone());
    let readings = derived();
    let stats = SummaryStats::from_readings(&readings);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }

            if let Some(err) = load_error {
                p { class: "dashboard-card__meta dashboard-card__meta--error", "⚠️ {err}" }
            }

            ParameterPanel { config: session.config }
            MetricsChart { readings: readings.clone(), config: config }
            KeyStats { stats: stats, config: config }
        }
    }
}
