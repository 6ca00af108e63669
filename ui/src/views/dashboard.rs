use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use api::{AnalysisClient, ClientConfig};

use crate::components::AppHeader;
use crate::dashboard::{AppController, ChatPanel, DashboardState, VizPanel};
use crate::t;

/// The whole app: header, chat on the left, charts on the right.
#[component]
pub fn Dashboard() -> Element {
    crate::i18n::init();

    let state = use_signal(|| DashboardState::with_greeting(t!("chat-greeting")));
    use_context_provider(|| state);
    use_context_provider(|| {
        let config = ClientConfig::load();
        info!("analysis service at {}", config.base_url);
        let client = Rc::new(AnalysisClient::new(config));
        AppController::new(client, state)
    });

    rsx! {
        div { class: "app-shell",
            AppHeader {}
            div { class: "dashboard",
                ChatPanel {}
                VizPanel {}
            }
        }
    }
}
