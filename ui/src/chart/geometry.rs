//! SVG layout for the chart variants. Coordinates are in viewBox units.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{Series, Slice};

/// Drawing surface inside the viewBox, after axis margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center of the `index`-th of `count` equal bands.
    fn band_center(&self, index: usize, count: usize) -> f64 {
        let band = self.width / count.max(1) as f64;
        self.left + band * (index as f64 + 0.5)
    }

    fn y_for(&self, value: f64, top_value: f64) -> f64 {
        let ratio = if top_value > 0.0 {
            (value / top_value).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.bottom() - ratio * self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub path: String,
    pub color: &'static str,
    pub fraction: f64,
}

/// Evenly spaced ticks from zero up to a rounded ceiling above `max`.
pub fn value_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    if !max.is_finite() || max <= 0.0 {
        return (0..=count).map(|i| i as f64).collect();
    }
    let raw_step = max / count as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| step * count as f64 >= max)
        .unwrap_or(10.0 * magnitude);
    (0..=count).map(|i| step * i as f64).collect()
}

fn ceiling(series: &Series, ticks: usize) -> f64 {
    value_ticks(series.max_value().unwrap_or(0.0), ticks)
        .last()
        .copied()
        .unwrap_or(1.0)
}

/// One bar per point; gaps get a zero-height bar so positions stay aligned.
pub fn bar_layout(series: &Series, area: PlotArea, ticks: usize) -> Vec<BarRect> {
    let top_value = ceiling(series, ticks);
    let count = series.points.len();
    let band = area.width / count.max(1) as f64;
    let width = band * 0.7;

    series
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let value = point.value.unwrap_or(0.0).max(0.0);
            let y = area.y_for(value, top_value);
            BarRect {
                x: area.band_center(index, count) - width / 2.0,
                y,
                width,
                height: area.bottom() - y,
            }
        })
        .collect()
}

/// Polyline through the numeric points; a gap starts a new sub-path.
pub fn line_path(series: &Series, area: PlotArea, ticks: usize) -> String {
    let top_value = ceiling(series, ticks);
    let count = series.points.len();
    let mut path = String::new();
    let mut pen_down = false;

    for (index, point) in series.points.iter().enumerate() {
        match point.value {
            Some(value) => {
                let command = if pen_down { 'L' } else { 'M' };
                if !path.is_empty() {
                    path.push(' ');
                }
                path.push_str(&format!(
                    "{command}{:.1},{:.1}",
                    area.band_center(index, count),
                    area.y_for(value, top_value)
                ));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Circle centers for points with a numeric value, tagged with their index.
pub fn scatter_layout(series: &Series, area: PlotArea, ticks: usize) -> Vec<(usize, f64, f64)> {
    let top_value = ceiling(series, ticks);
    let count = series.points.len();
    series
        .points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| {
            point
                .value
                .map(|value| (index, area.band_center(index, count), area.y_for(value, top_value)))
        })
        .collect()
}

/// Donut segments proportional to each slice's non-negative value, starting
/// at twelve o'clock and running clockwise.
pub fn pie_arcs(slices: &[Slice], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<PieArc> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let fraction = slice.value.max(0.0) / total;
            // A full circle collapses to a zero-length arc in SVG.
            let sweep = (fraction * TAU).min(TAU - 1e-4);
            let end = start + sweep;
            let path = donut_segment(cx, cy, outer, inner, start, end);
            start = end;
            PieArc {
                path,
                color: slice.color,
                fraction,
            }
        })
        .collect()
}

fn donut_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix2, iy2) = polar(cx, cy, inner, start);
    format!(
        "M{ox1:.2},{oy1:.2} A{outer},{outer} 0 {large} 1 {ox2:.2},{oy2:.2} \
         L{ix1:.2},{iy1:.2} A{inner},{inner} 0 {large} 0 {ix2:.2},{iy2:.2} Z"
    )
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{pie_color, Point};

    const AREA: PlotArea = PlotArea::new(40.0, 10.0, 300.0, 200.0);

    fn series(values: &[Option<f64>]) -> Series {
        Series {
            x_key: "x".into(),
            y_key: "y".into(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| Point {
                    label: format!("p{i}"),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn ticks_round_up_to_a_friendly_ceiling() {
        assert_eq!(value_ticks(850000.0, 4), vec![0.0, 250000.0, 500000.0, 750000.0, 1000000.0]);
        assert_eq!(value_ticks(9.0, 4), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(value_ticks(0.0, 2), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn bars_scale_against_tick_ceiling() {
        let bars = bar_layout(&series(&[Some(500000.0), Some(1000000.0), None]), AREA, 4);
        assert_eq!(bars.len(), 3);
        assert!((bars[0].height - 100.0).abs() < 1e-9);
        assert!((bars[1].height - 200.0).abs() < 1e-9);
        assert_eq!(bars[2].height, 0.0);
        assert!((bars[1].y - AREA.top).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    }

    #[test]
    fn line_breaks_at_gaps() {
        let path = line_path(&series(&[Some(1.0), Some(2.0), None, Some(3.0)]), AREA, 4);
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('L').count(), 1);
    }

    #[test]
    fn scatter_skips_gaps() {
        let points = scatter_layout(&series(&[Some(1.0), None, Some(3.0)]), AREA, 4);
        let indices: Vec<_> = points.iter().map(|(i, _, _)| *i).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn pie_fractions_sum_to_one_and_keep_colors() {
        let slices: Vec<Slice> = [3.0, 1.0, -4.0]
            .iter()
            .enumerate()
            .map(|(i, v)| Slice {
                label: format!("s{i}"),
                value: *v,
                color: pie_color(i),
            })
            .collect();
        let arcs = pie_arcs(&slices, 100.0, 100.0, 100.0, 60.0);
        assert_eq!(arcs.len(), 3);
        let total: f64 = arcs.iter().map(|a| a.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(arcs[2].fraction, 0.0);
        assert_eq!(arcs[1].color, pie_color(1));
    }

    #[test]
    fn pie_with_no_positive_values_draws_nothing() {
        let slices = vec![Slice {
            label: "zero".into(),
            value: 0.0,
            color: pie_color(0),
        }];
        assert!(pie_arcs(&slices, 0.0, 0.0, 10.0, 5.0).is_empty());
    }
}
