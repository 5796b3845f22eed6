//! Session wiring: the password gate and the per-session context every view reads.
//!
//! Nothing below the gate is rendered, and no data is loaded, until
//! [`AccessGate::check`] hands out an [`AccessGrant`]. After that the grant, the
//! selected [`DisplayConfig`] and the loaded readings live in a [`Session`] context
//! (plain `Copy` signals, no process-wide flags).

use dioxus::prelude::*;

use crate::core::{
    config::AppConfig,
    gate::{AccessGate, AccessGrant, GateOutcome},
    gki::DisplayConfig,
};
use crate::components::AppNavbar;
use crate::dashboard::DashboardState;
use crate::t;

#[derive(Clone, Copy)]
pub struct Session {
    pub grant: Signal<Option<AccessGrant>>,
    pub config: Signal<DisplayConfig>,
    pub data: Signal<DashboardState>,
}

impl Session {
    /// Drop the grant and the loaded readings.
    pub fn lock(mut self) {
        self.grant.set(None);
        self.data.set(DashboardState::default());
    }
}

#[component]
pub fn MetaboSession(children: Element) -> Element {
    let app_config = use_hook(AppConfig::from_env);
    let grant = use_signal(|| Option::<AccessGrant>::None);
    let config = use_signal(DisplayConfig::default);
    let data = use_signal(DashboardState::default);
    let session = use_context_provider(|| Session {
        grant,
        config,
        data,
    });

    if grant().is_some() {
        return rsx! { {children} };
    }

    let gate = AccessGate::from_config(&app_config);
    rsx! {
        AppNavbar {}
        AccessGateForm {
            gate: gate,
            on_unlock: move |granted: AccessGrant| {
                let mut session = session;
                session.data.set(DashboardState::load(&app_config));
                session.grant.set(Some(granted));
            },
        }
    }
}

#[component]
fn AccessGateForm(gate: AccessGate, on_unlock: EventHandler<AccessGrant>) -> Element {
    let mut attempt = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<String>::None);
    let configured = gate.is_configured();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match gate.check(&attempt()) {
            Ok(GateOutcome::Granted(granted)) => {
                attempt.set(String::new());
                feedback.set(None);
                on_unlock.call(granted);
            }
            Ok(GateOutcome::Denied) => feedback.set(Some(t!("gate-error-incorrect"))),
            Ok(GateOutcome::Empty) => feedback.set(None),
            Err(err) => feedback.set(Some(err.to_string())),
        }
    };

    rsx! {
        section { class: "page page-gate",
            form { class: "gate-card", onsubmit: onsubmit,
                h1 { {t!("gate-title")} }
                if !configured {
                    p { class: "gate-card__error", {t!("gate-error-unconfigured")} }
                }
                label { class: "gate-card__label", r#for: "gate-password",
                    {t!("gate-password-label")}
                }
                input {
                    id: "gate-password",
                    class: "gate-card__input",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{attempt}",
                    oninput: move |evt: FormEvent| attempt.set(evt.value()),
                }
                button { r#type: "submit", class: "button button--primary", {t!("gate-submit")} }
                if let Some(message) = feedback() {
                    p { class: "gate-card__error", "{message}" }
                }
            }
        }
    }
}
