use dioxus::prelude::*;

use api::{ChartKind, Row};

use super::geometry::{bar_layout, line_path, pie_arcs, scatter_layout, value_ticks, PlotArea};
use super::palette::{SERIES_ACCENT, SERIES_PRIMARY};
use super::{render, Cell, Rendering, Series, SizingMode, Slice, Table, Variant};
use crate::core::format;
use crate::t;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 320.0;
const PLOT: PlotArea = PlotArea::new(64.0, 16.0, 556.0, 256.0);
const TICKS: usize = 4;

#[component]
pub fn DynamicChart(kind: ChartKind, rows: Vec<Row>, x_key: String, y_key: String) -> Element {
    let rendering = render(Some(kind), &rows, &x_key, &y_key);

    let variant = match rendering {
        Rendering::NoData => {
            return rsx! {
                div { class: "chart chart--empty", {t!("chart-no-data")} }
            };
        }
        Rendering::Chart(variant) => variant,
    };

    let body = match &variant {
        Variant::Bar(series) => bar_chart(series),
        Variant::Line(series) => line_chart(series),
        Variant::Scatter(series) => scatter_chart(series),
        Variant::Pie(slices) => pie_chart(slices),
        Variant::Table(table) => table_view(table),
    };

    let kind_class = format!("chart--{}", variant.kind().as_str());
    match variant.sizing() {
        SizingMode::Responsive => rsx! {
            div { class: "chart chart--responsive {kind_class}", {body} }
        },
        SizingMode::Scroll => rsx! {
            div { class: "chart chart--scroll {kind_class}", {body} }
        },
    }
}

fn axes(series: &Series) -> Element {
    let ticks = value_ticks(series.max_value().unwrap_or(0.0), TICKS);
    let top = ticks.last().copied().unwrap_or(1.0);
    let grid: Vec<(f64, String)> = ticks
        .iter()
        .map(|tick| {
            let ratio = if top > 0.0 { tick / top } else { 0.0 };
            (PLOT.bottom() - ratio * PLOT.height, format::format_compact(*tick))
        })
        .collect();

    let count = series.points.len().max(1);
    let band = PLOT.width / count as f64;
    // Thin out labels so they don't collide on long series.
    let stride = (count / 12).max(1);
    let labels: Vec<(usize, f64, &str)> = series
        .points
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride == 0)
        .map(|(index, point)| (index, PLOT.left + band * (index as f64 + 0.5), point.label.as_str()))
        .collect();

    let (left, right, label_y) = (PLOT.left, PLOT.left + PLOT.width, PLOT.bottom() + 18.0);

    rsx! {
        g { class: "chart__grid",
            for (y, tick_label) in grid {
                line {
                    x1: "{left}", x2: "{right}", y1: "{y}", y2: "{y}",
                    stroke: "#e5e7eb", stroke_dasharray: "3 3",
                }
                text {
                    class: "chart__tick",
                    x: "{left - 8.0}", y: "{y + 4.0}",
                    text_anchor: "end",
                    "{tick_label}"
                }
            }
        }
        g { class: "chart__labels",
            for (index, x, label) in labels {
                text {
                    key: "{index}",
                    class: "chart__tick",
                    x: "{x}", y: "{label_y}",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}

fn legend(label: &str, color: &str) -> Element {
    rsx! {
        div { class: "chart__legend",
            span { class: "chart__legend-swatch", style: "background:{color}" }
            span { "{label}" }
        }
    }
}

fn bar_chart(series: &Series) -> Element {
    let bars = bar_layout(series, PLOT, TICKS);
    rsx! {
        svg {
            class: "chart__canvas",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",
            {axes(series)}
            for (bar, point) in bars.iter().zip(series.points.iter()) {
                rect {
                    x: "{bar.x}", y: "{bar.y}",
                    width: "{bar.width}", height: "{bar.height}",
                    rx: "4", fill: SERIES_PRIMARY,
                    title { "{point.label}: {tooltip_value(point.value)}" }
                }
            }
        }
        {legend(&series.y_key, SERIES_PRIMARY)}
    }
}

fn line_chart(series: &Series) -> Element {
    let path = line_path(series, PLOT, TICKS);
    let dots = scatter_layout(series, PLOT, TICKS);
    rsx! {
        svg {
            class: "chart__canvas",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",
            {axes(series)}
            path { d: "{path}", fill: "none", stroke: SERIES_PRIMARY, stroke_width: "3" }
            for (index, cx, cy) in dots {
                circle {
                    key: "{index}",
                    cx: "{cx}", cy: "{cy}", r: "4",
                    fill: SERIES_PRIMARY, stroke: "#fff", stroke_width: "2",
                    title { "{series.points[index].label}: {tooltip_value(series.points[index].value)}" }
                }
            }
        }
        {legend(&series.y_key, SERIES_PRIMARY)}
    }
}

fn scatter_chart(series: &Series) -> Element {
    let dots = scatter_layout(series, PLOT, TICKS);
    rsx! {
        svg {
            class: "chart__canvas",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",
            {axes(series)}
            for (index, cx, cy) in dots {
                circle {
                    key: "{index}",
                    cx: "{cx}", cy: "{cy}", r: "6",
                    fill: SERIES_ACCENT,
                    title { "{series.points[index].label}: {tooltip_value(series.points[index].value)}" }
                }
            }
        }
        {legend(&series.y_key, SERIES_ACCENT)}
    }
}

fn pie_chart(slices: &[Slice]) -> Element {
    let (cx, cy) = (VIEW_WIDTH / 2.0 - 80.0, VIEW_HEIGHT / 2.0);
    let arcs = pie_arcs(slices, cx, cy, 100.0, 60.0);
    rsx! {
        div { class: "chart__pie",
            svg {
                class: "chart__canvas",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                for (arc, slice) in arcs.iter().zip(slices.iter()) {
                    path {
                        d: "{arc.path}", fill: arc.color,
                        title { "{slice.label}: {format::format_grouped(slice.value)}" }
                    }
                }
            }
            div { class: "chart__pie-legend",
                for (index, slice) in slices.iter().enumerate() {
                    div { key: "{index}", {legend(&slice.label, slice.color)} }
                }
            }
        }
    }
}

fn table_view(table: &Table) -> Element {
    rsx! {
        table { class: "chart-table",
            thead {
                tr {
                    for column in table.columns.iter() {
                        th { key: "{column}", "{column}" }
                    }
                }
            }
            tbody {
                for (row_index, row) in table.rows.iter().enumerate() {
                    tr { key: "{row_index}",
                        for cell in row.iter() {
                            match cell {
                                Cell::Value(text) => rsx! { td { "{text}" } },
                                Cell::Missing => rsx! {
                                    td { class: "chart-table__cell--missing", title: t!("chart-missing-cell"), "—" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

fn tooltip_value(value: Option<f64>) -> String {
    value.map(format::format_grouped).unwrap_or_else(|| "—".to_string())
}
