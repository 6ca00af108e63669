//! Chart rendering: maps a descriptor (kind + rows + axis keys) onto one of a
//! closed set of visual encodings.
//!
//! [`render`] is pure and platform‑agnostic; [`DynamicChart`] turns its output
//! into SVG / table markup.

mod geometry;
mod palette;
mod view;

pub use geometry::{bar_layout, line_path, pie_arcs, scatter_layout, value_ticks, BarRect, PieArc, PlotArea};
pub use palette::{pie_color, PIE_PALETTE};
pub use view::DynamicChart;

use api::{ChartKind, Row};

/// How a rendered variant sizes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingMode {
    /// Stretches to fill the chart container.
    Responsive,
    /// Natural size inside its own scroll region.
    Scroll,
}

/// One x/y pair of a cartesian series.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x_key: String,
    pub y_key: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .filter_map(|p| p.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Value(String),
    /// The row has no field for this column.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Bar(Series),
    Line(Series),
    Pie(Vec<Slice>),
    Scatter(Series),
    Table(Table),
}

impl Variant {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Table(_) => ChartKind::Table,
        }
    }

    pub fn sizing(&self) -> SizingMode {
        match self {
            Self::Table(_) => SizingMode::Scroll,
            _ => SizingMode::Responsive,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    /// Nothing to draw.
    NoData,
    Chart(Variant),
}

impl Rendering {
    pub fn sizing(&self) -> Option<SizingMode> {
        match self {
            Self::NoData => None,
            Self::Chart(variant) => Some(variant.sizing()),
        }
    }
}

/// Map a descriptor onto a concrete encoding.
///
/// Empty rows always yield [`Rendering::NoData`]. Kinds other than
/// bar/line/pie/scatter, including a missing kind, fall back to a table.
pub fn render(kind: Option<ChartKind>, rows: &[Row], x_key: &str, y_key: &str) -> Rendering {
    if rows.is_empty() {
        return Rendering::NoData;
    }

    let variant = match kind {
        Some(ChartKind::Bar) => Variant::Bar(series(rows, x_key, y_key)),
        Some(ChartKind::Line) => Variant::Line(series(rows, x_key, y_key)),
        Some(ChartKind::Scatter) => Variant::Scatter(series(rows, x_key, y_key)),
        Some(ChartKind::Pie) => Variant::Pie(slices(rows, x_key, y_key)),
        _ => Variant::Table(table(rows)),
    };
    Rendering::Chart(variant)
}

fn series(rows: &[Row], x_key: &str, y_key: &str) -> Series {
    Series {
        x_key: x_key.to_string(),
        y_key: y_key.to_string(),
        points: rows
            .iter()
            .map(|row| Point {
                label: row.text(x_key).unwrap_or_default(),
                value: row.number(y_key),
            })
            .collect(),
    }
}

fn slices(rows: &[Row], x_key: &str, y_key: &str) -> Vec<Slice> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Slice {
            label: row.text(x_key).unwrap_or_default(),
            value: row.number(y_key).unwrap_or(0.0),
            color: pie_color(index),
        })
        .collect()
}

/// Columns come from the first row; later rows are read against that set.
fn table(rows: &[Row]) -> Table {
    let columns: Vec<String> = rows
        .first()
        .map(|row| row.keys().map(str::to_string).collect())
        .unwrap_or_default();

    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match row.text(column) {
                    Some(text) => Cell::Value(text),
                    None => Cell::Missing,
                })
                .collect()
        })
        .collect();

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn daily_rows() -> Vec<Row> {
        vec![
            Row::new().with("date", "9/01").with("sales", 450000).with("trend", 42),
            Row::new().with("date", "9/02").with("sales", 420000).with("trend", 43),
            Row::new().with("date", "9/14").with("sales", 850000).with("trend", 60),
        ]
    }

    #[test]
    fn recognised_kinds_render_as_themselves() {
        let rows = daily_rows();
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Scatter] {
            match render(Some(kind), &rows, "date", "sales") {
                Rendering::Chart(variant) => {
                    assert_eq!(variant.kind(), kind);
                    assert_eq!(variant.sizing(), SizingMode::Responsive);
                }
                Rendering::NoData => panic!("{kind:?} rendered no data"),
            }
        }
    }

    #[test]
    fn other_kinds_fall_back_to_table() {
        let rows = daily_rows();
        for kind in [None, Some(ChartKind::Table), Some(ChartKind::Unknown)] {
            let rendering = render(kind, &rows, "date", "sales");
            let Rendering::Chart(variant) = &rendering else {
                panic!("{kind:?} rendered no data");
            };
            assert_eq!(variant.kind(), ChartKind::Table);
            assert_eq!(rendering.sizing(), Some(SizingMode::Scroll));
        }
    }

    #[test]
    fn empty_rows_render_placeholder_for_every_kind() {
        for kind in [
            None,
            Some(ChartKind::Bar),
            Some(ChartKind::Line),
            Some(ChartKind::Pie),
            Some(ChartKind::Scatter),
            Some(ChartKind::Table),
            Some(ChartKind::Unknown),
        ] {
            let rendering = render(kind, &[], "date", "sales");
            assert_eq!(rendering, Rendering::NoData);
            assert_eq!(rendering.sizing(), None);
        }
    }

    #[test]
    fn pie_colors_cycle_through_palette_by_position() {
        let rows: Vec<Row> = (0..14)
            .map(|i| Row::new().with("name", format!("slice {i}")).with("value", 1))
            .collect();
        let Rendering::Chart(Variant::Pie(slices)) = render(Some(ChartKind::Pie), &rows, "name", "value")
        else {
            panic!("expected pie");
        };
        assert_eq!(slices.len(), 14);
        for (i, slice) in slices.iter().enumerate() {
            assert_eq!(slice.color, PIE_PALETTE[i % PIE_PALETTE.len()]);
        }
        assert_eq!(slices[0].color, "#3b82f6");
        assert_eq!(slices[6].color, "#3b82f6");
        assert_eq!(slices[13].color, "#f97316");
    }

    #[test]
    fn pie_colors_ignore_row_content() {
        let a = vec![Row::new().with("n", "x").with("v", 5), Row::new().with("n", "y").with("v", 1)];
        let b = vec![Row::new().with("n", "q").with("v", 0), Row::new().with("n", "r").with("v", 99)];
        let colors = |rows: &[Row]| match render(Some(ChartKind::Pie), rows, "n", "v") {
            Rendering::Chart(Variant::Pie(slices)) => slices.iter().map(|s| s.color).collect::<Vec<_>>(),
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(colors(&a), colors(&b));
    }

    #[test]
    fn cartesian_points_follow_axis_keys() {
        let Rendering::Chart(Variant::Bar(series)) =
            render(Some(ChartKind::Bar), &daily_rows(), "date", "sales")
        else {
            panic!("expected bar");
        };
        let labels: Vec<_> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["9/01", "9/02", "9/14"]);
        assert_eq!(series.points[2].value, Some(850000.0));
        assert_eq!(series.max_value(), Some(850000.0));
    }

    #[test]
    fn non_numeric_y_values_become_gaps() {
        let rows = vec![
            Row::new().with("d", "a").with("v", "n/a"),
            Row::new().with("d", "b").with("v", Value::Null),
        ];
        let Rendering::Chart(Variant::Line(series)) = render(Some(ChartKind::Line), &rows, "d", "v")
        else {
            panic!("expected line");
        };
        assert!(series.points.iter().all(|p| p.value.is_none()));
        assert_eq!(series.max_value(), None);
    }

    #[test]
    fn table_columns_follow_first_row_and_mark_missing_cells() {
        let rows = vec![
            Row::new().with("store", "A").with("sales", 10).with("note", Value::Null),
            Row::new().with("store", "B").with("extra", true),
        ];
        let Rendering::Chart(Variant::Table(table)) = render(None, &rows, "", "") else {
            panic!("expected table");
        };
        assert_eq!(table.columns, vec!["store", "sales", "note"]);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Value("A".into()),
                Cell::Value("10".into()),
                Cell::Value(String::new()),
            ]
        );
        assert_eq!(
            table.rows[1],
            vec![Cell::Value("B".into()), Cell::Missing, Cell::Missing]
        );
    }
}
