use dioxus::prelude::*;

use crate::core::{format, gki::DisplayConfig, stats::SummaryStats};
use crate::t;

#[component]
pub fn KeyStats(stats: SummaryStats, config: DisplayConfig) -> Element {
    let glucose = format::format_with_unit(stats.mean_glucose, 1, config.glucose_unit.label());
    let ketone = format::format_with_unit(
        stats.mean_ketone,
        format::KETONE_DECIMALS,
        config.ketone_unit.label(),
    );
    let gki = format::format_number(stats.mean_gki, 2);

    rsx! {
        section { class: "dashboard-card dashboard-stats",
            div { class: "dashboard-card__header",
                h2 { {t!("stats-title")} }
            }

            div { class: "dashboard-highlights",
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", {t!("stats-count")} }
                    strong { class: "dashboard-highlight__value", "{stats.count}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", {t!("stats-glucose-mean")} }
                    strong { class: "dashboard-highlight__value", "{glucose}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", {t!("stats-ketone-mean")} }
                    strong { class: "dashboard-highlight__value", "{ketone}" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", {t!("stats-gki-mean")} }
                    strong { class: "dashboard-highlight__value", "{gki}" }
                    span { class: "dashboard-highlight__meta", "{config.gki_mode}" }
                }
            }
        }
    }
}
