use crate::components::session::Session;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates own their `Route` enum, so they register a `NavBuilder` whose
/// closures build a `Link` around the localized label passed in.
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///         readings: |label| rsx!( Link { class: "navbar__link", to: Route::Readings {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder the navbar falls back to whatever children it was given.
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub readings: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    let session: Option<Session> = try_use_context::<Session>();
    let unlocked = session.map(|s| (s.grant)().is_some()).unwrap_or(false);

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppNavbar render lang={}", code());
        } else {
            println!("[i18n] AppNavbar render lang=<none>");
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val) {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let readings = (b.readings)(&t!("nav-readings"));

        rsx! {
            nav { class: "navbar__links",
                {dashboard}
                {readings}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Metabo" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if unlocked {
                    if let Some(nav) = internal_nav {
                        {nav}
                    } else {
                        nav { class: "navbar__links", {children} }
                    }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }

                    if let Some(session) = session.filter(|_| unlocked) {
                        button {
                            r#type: "button",
                            class: "button button--ghost navbar__lock",
                            onclick: move |_| session.lock(),
                            {t!("nav-lock")}
                        }
                    }
                }
            }
        }
    }
}
