/// Slice colors for pie charts, applied by row position.
pub const PIE_PALETTE: [&str; 6] = [
    "#3b82f6", "#f97316", "#10b981", "#8b5cf6", "#ef4444", "#eab308",
];

/// Fill for bars, lines and the line's dots.
pub const SERIES_PRIMARY: &str = "#3b82f6";

/// Fill for scatter points.
pub const SERIES_ACCENT: &str = "#f97316";

pub fn pie_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}
