//! Formatting helpers for presenting sales figures.

/// `850000` → `850,000`; `1234.56` → `1,234.56`. Non-finite values render as `—`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match cents {
        0 => format!("{sign}{grouped}"),
        c if c % 10 == 0 => format!("{sign}{grouped}.{}", c / 10),
        c => format!("{sign}{grouped}.{c:02}"),
    }
}

/// Short axis label: `250000` → `250K`, `1500000` → `1.5M`.
///
/// A value that rounds up to 1000 of one unit is shown in the next unit, so
/// `999_999` reads `1M` rather than `1000K`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [
        (1.0, ""),
        (1_000.0, "K"),
        (1_000_000.0, "M"),
        (1_000_000_000.0, "B"),
    ];
    let abs = value.abs();
    let mut unit = UNITS
        .iter()
        .rposition(|(scale, _)| abs >= *scale)
        .unwrap_or(0);
    let (rounded, suffix) = loop {
        let (scale, suffix) = UNITS[unit];
        let rounded = (value / scale * 10.0).round() / 10.0;
        if rounded.abs() >= 1_000.0 && unit + 1 < UNITS.len() {
            unit += 1;
            continue;
        }
        break (rounded, suffix);
    };
    let text = format!("{rounded:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Sales amount with currency mark, e.g. `¥510,000`.
pub fn format_yen(value: f64) -> String {
    format!("¥{}", format_grouped(value.round()))
}
