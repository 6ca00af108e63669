use dioxus::prelude::*;

use api::{ChartDescriptor, InsightSet, WeatherAverage};

use super::{AppController, DashboardState};
use crate::chart::DynamicChart;
use crate::core::format::format_yen;
use crate::i18n::use_locale;
use crate::t;

#[component]
pub fn VizPanel() -> Element {
    let _locale = use_locale();
    let state = use_context::<Signal<DashboardState>>();

    let (descriptor, insights, weather, alert) = {
        let s = state.read();
        (s.descriptor.clone(), s.insights.clone(), s.weather.clone(), s.alert.clone())
    };

    rsx! {
        main { class: "viz-panel",
            section { class: "viz-card",
                h2 { class: "viz-card__title", {t!("viz-title")} }
                match descriptor {
                    Some(descriptor) => rsx! { ChartCard { descriptor } },
                    None => rsx! {
                        div { class: "viz-card__placeholder", {t!("viz-placeholder")} }
                    },
                }
            }

            if let Some(insights) = insights {
                InsightsCard { insights }
            }

            if !weather.is_empty() {
                WeatherCard { weather }
            }

            if let Some(message) = alert {
                AlertModal { message }
            }
        }
    }
}

#[component]
fn ChartCard(descriptor: ChartDescriptor) -> Element {
    let summary = descriptor.summary.trim().to_string();
    rsx! {
        DynamicChart {
            kind: descriptor.kind,
            rows: descriptor.rows,
            x_key: descriptor.x_key,
            y_key: descriptor.y_key,
        }
        if !summary.is_empty() {
            div { class: "viz-card__summary",
                strong { {t!("viz-summary-label")} }
                " {summary}"
            }
        }
    }
}

#[component]
fn InsightsCard(insights: InsightSet) -> Element {
    rsx! {
        section { class: "viz-card viz-card--insights",
            div { class: "viz-card__column",
                h3 { {t!("insights-title")} }
                if insights.insights.is_empty() {
                    p { class: "viz-card__meta", {t!("insights-empty")} }
                }
                ul {
                    for (index, item) in insights.insights.iter().enumerate() {
                        li { key: "{index}", "{item}" }
                    }
                }
            }
            div { class: "viz-card__column",
                h3 { {t!("actions-title")} }
                if insights.actions.is_empty() {
                    p { class: "viz-card__meta", {t!("insights-empty")} }
                }
                ol {
                    for (index, item) in insights.actions.iter().enumerate() {
                        li { key: "{index}", "{item}" }
                    }
                }
            }
        }
    }
}

#[component]
fn WeatherCard(weather: Vec<WeatherAverage>) -> Element {
    let peak = weather
        .iter()
        .map(|w| w.avg_sales)
        .fold(0.0_f64, f64::max);
    rsx! {
        section { class: "viz-card viz-card--weather",
            h3 { {t!("weather-title")} }
            ul { class: "weather-list",
                for (index, entry) in weather.iter().enumerate() {
                    li { key: "{index}", class: "weather-list__row",
                        span { class: "weather-list__condition", "{entry.condition}" }
                        span { class: "weather-list__bar",
                            span {
                                class: "weather-list__fill",
                                style: "width:{bar_percent(entry.avg_sales, peak):.1}%",
                            }
                        }
                        span { class: "weather-list__value", "{format_yen(entry.avg_sales)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertModal(message: String) -> Element {
    let controller = use_context::<AppController>();
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "alertdialog", aria_modal: "true",
                p { class: "modal__message", "{message}" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    autofocus: true,
                    onclick: move |_| controller.dismiss_alert(),
                    {t!("alert-dismiss")}
                }
            }
        }
    }
}

fn bar_percent(value: f64, peak: f64) -> f64 {
    if peak > 0.0 {
        (value / peak * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
