use dioxus::prelude::*;

use crate::core::{
    gki::{DisplayConfig, GkiMode},
    units::{GlucoseUnit, KetoneUnit},
    MetaboError,
};
use crate::t;

#[component]
pub fn ParameterPanel(mut config: Signal<DisplayConfig>) -> Element {
    let current = config();
    let mut selector_error = use_signal(|| Option::<String>::None);

    let mut apply = move |update: Result<DisplayConfig, MetaboError>| match update {
        Ok(next) => {
            selector_error.set(None);
            config.set(next);
        }
        Err(err) => {
            log::error!("selector rejected: {err}");
            selector_error.set(Some(err.to_string()));
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-settings",
            div { class: "dashboard-card__header",
                h2 { {t!("settings-title")} }
            }

            div { class: "dashboard-settings__grid",
                label { class: "dashboard-settings__field",
                    span { class: "dashboard-settings__label", {t!("settings-glucose-unit")} }
                    select {
                        value: "{current.glucose_unit.label()}",
                        onchange: move |evt: FormEvent| {
                            apply(evt.value().parse::<GlucoseUnit>().map(|glucose_unit| DisplayConfig {
                                glucose_unit,
                                ..config()
                            }))
                        },
                        for unit in GlucoseUnit::ALL {
                            option {
                                value: unit.label(),
                                selected: unit == current.glucose_unit,
                                "{unit}"
                            }
                        }
                    }
                }

                label { class: "dashboard-settings__field",
                    span { class: "dashboard-settings__label", {t!("settings-ketone-unit")} }
                    select {
                        value: "{current.ketone_unit.label()}",
                        onchange: move |evt: FormEvent| {
                            apply(evt.value().parse::<KetoneUnit>().map(|ketone_unit| DisplayConfig {
                                ketone_unit,
                                ..config()
                            }))
                        },
                        for unit in KetoneUnit::ALL {
                            option {
                                value: unit.label(),
                                selected: unit == current.ketone_unit,
                                "{unit}"
                            }
                        }
                    }
                }

                label { class: "dashboard-settings__field",
                    span { class: "dashboard-settings__label", {t!("settings-gki-mode")} }
                    select {
                        value: "{current.gki_mode.label()}",
                        onchange: move |evt: FormEvent| {
                            apply(evt.value().parse::<GkiMode>().map(|gki_mode| DisplayConfig {
                                gki_mode,
                                ..config()
                            }))
                        },
                        for mode in GkiMode::ALL {
                            option {
                                value: mode.label(),
                                selected: mode == current.gki_mode,
                                "{mode}"
                            }
                        }
                    }
                }
            }

            if let Some(err) = selector_error() {
                p { class: "dashboard-card__meta dashboard-card__meta--error", "⚠️ {err}" }
            }
        }
    }
}
