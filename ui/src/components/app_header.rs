use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n;
use crate::t;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Brand bar with the locale switcher.
///
/// When the shell provides a `Signal<String>` language context, switching
/// writes the new tag there so every component reading it re-renders.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let lang_ctx = try_use_context::<Signal<String>>();
    let mut local_lang = use_signal(i18n::current_language);
    let current = lang_ctx.map(|code| code()).unwrap_or_else(|| local_lang());
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                local_lang.set(tag.clone());
                if let Some(mut code) = lang_ctx {
                    code.set(tag);
                }
            }
            Err(err) => warn!("switching language to {tag} failed: {err}"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "app-header", class: "app-header",
            div { class: "app-header__brand",
                span { class: "app-header__spark", aria_hidden: "true" }
                span { class: "app-header__mark", {t!("app-name")} }
                span { class: "app-header__tagline", {t!("header-tagline")} }
            }

            if show_switcher {
                div { class: "app-header__locale",
                    label { class: "visually-hidden", r#for: "locale-select", {t!("header-language-label")} }
                    select {
                        id: "locale-select",
                        value: "{current}",
                        oninput: on_change,
                        for code in langs() {
                            option { key: "{code}", value: "{code}", selected: code == current, "{code}" }
                        }
                    }
                }
            }
        }
    }
}
