use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use api::{Role, UploadFile};

use super::{AppController, DashboardState};
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn ChatPanel() -> Element {
    let _locale = use_locale();
    let state = use_context::<Signal<DashboardState>>();
    let controller = use_context::<AppController>();
    let mut draft = use_signal(String::new);

    let loading = state.read().loading;
    let can_export = state.read().can_export();

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let query = draft();
            if query.trim().is_empty() || loading {
                return;
            }
            draft.set(String::new());
            let controller = controller.clone();
            spawn(async move {
                controller.send_query(&query).await;
            });
        }
    };

    let on_file = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            let Some(engine) = evt.files() else {
                return;
            };
            let controller = controller.clone();
            spawn(async move {
                let Some(name) = engine.files().into_iter().next() else {
                    return;
                };
                match engine.read_file(&name).await {
                    Some(bytes) => {
                        controller.upload_file(UploadFile { name, bytes }).await;
                    }
                    None => warn!("could not read {name}"),
                }
            });
        }
    };

    let on_export = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn(async move {
                controller.export_report().await;
            });
        }
    };

    let messages = state.read().messages.clone();

    rsx! {
        aside { class: "chat-panel",
            header { class: "chat-panel__header",
                span { class: "chat-panel__spark", aria_hidden: "true" }
                h1 { class: "chat-panel__title", {t!("chat-title")} }
            }

            div { class: "chat-panel__log", role: "log", aria_live: "polite",
                for (index, message) in messages.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if message.role == Role::User { "chat-bubble chat-bubble--user" } else { "chat-bubble chat-bubble--assistant" },
                        "{message.text}"
                    }
                }
                if loading {
                    div { class: "chat-panel__thinking", {t!("chat-thinking")} }
                }
            }

            div { class: "chat-panel__footer",
                div { class: "chat-panel__actions",
                    label {
                        class: if loading { "button button--ghost button--disabled" } else { "button button--ghost" },
                        r#for: "csv-upload",
                        {t!("action-upload")}
                    }
                    input {
                        id: "csv-upload",
                        class: "visually-hidden",
                        r#type: "file",
                        accept: ".csv,text/csv",
                        disabled: loading,
                        onchange: on_file,
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: !can_export,
                        title: if can_export { t!("action-export") } else { t!("action-export-disabled") },
                        onclick: on_export,
                        {t!("action-export")}
                    }
                }

                form { class: "chat-panel__composer", onsubmit: on_submit,
                    input {
                        class: "chat-panel__input",
                        r#type: "text",
                        value: "{draft}",
                        placeholder: t!("chat-placeholder"),
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: loading,
                        {t!("chat-send")}
                    }
                }
            }
        }
    }
}
