use dioxus::prelude::*;

use crate::components::Session;
use crate::core::gki::derive_readings;
use crate::dashboard::{ExportPanel, ReadingsTable};
use crate::t;

#[component]
pub fn Readings() -> Element {
    let session = use_context::<Session>();
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    if (session.grant)().is_none() {
        return rsx! {};
    }

    let config = (session.config)();
    let readings = (session.data).with(|state| derive_readings(&state.readings, &config));

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-readings",
            h1 { {t!("readings-page-title")} }
            p { {t!("readings-page-intro")} }

            ReadingsTable { readings: readings.clone(), config: config }
            ExportPanel { readings: readings, config: config }
        }
    }
}
