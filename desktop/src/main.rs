#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, MetaboSession};

use ui::views::{Dashboard, Readings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/readings")]
    Readings {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), always inlined on desktop.

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    log::info!("starting Metabo desktop v{}", env!("CARGO_PKG_VERSION"));
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Metabo – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_readings(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Readings {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        readings: nav_readings,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Session sits outside the keyed wrapper so a language switch does not lock.
        MetaboSession {
            // Keyed wrapper forces a full remount of the routed pages on language change.
            div {
                key: "{lang_code()}",
                div { style: "display:none", "{lang_code()}" }
                Router::<Route> { }
            }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
