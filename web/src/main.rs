use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, MetaboSession};
use ui::views::{Dashboard, Readings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/readings")]
    Readings {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_readings(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Readings {},
        "{label}"
    })
}

/// Route `log` records to the browser console. A logger installed earlier wins.
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Server builds log to stderr like the desktop launcher.
#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    init_logging();
    log::info!("starting Metabo web v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        readings: nav_readings,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        MetaboSession {
            div {
                key: "{lang_code()}",
                Router::<Route> {}
            }
        }
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
