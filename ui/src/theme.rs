//! Shared stylesheet. Shells link [`MAIN_CSS`]; release native builds, which
//! cannot rely on the asset server, inline [`MAIN_CSS_INLINE`] instead.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

pub const MAIN_CSS_INLINE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

/// Link or inline the theme, whichever the platform needs.
#[component]
pub fn Theme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{MAIN_CSS_INLINE}" }
        }
    }
}
