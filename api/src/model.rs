//! Shapes the dashboard consumes once a response has been mapped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visual encoding requested for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Table,
    #[default]
    Unknown,
}

impl ChartKind {
    /// Parse the server's `chartType`. Matching is exact; anything else,
    /// including other casings, is `Unknown` and renders as a table.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("bar") => Self::Bar,
            Some("line") => Self::Line,
            Some("pie") => Self::Pie,
            Some("scatter") => Self::Scatter,
            Some("table") => Self::Table,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Table => "table",
            Self::Unknown => "unknown",
        }
    }
}

/// One record of chart data. Field order is the order the server sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric view of a field. Numeric strings count; everything else is `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse().ok(),
            _ => None,
        }
    }

    /// Text view of a field; `None` when the key is absent, empty for null.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(scalar_text)
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a scalar for display. Whole numbers drop their fractional part.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Declarative description of what to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub rows: Vec<Row>,
    pub x_key: String,
    pub y_key: String,
    pub summary: String,
}

impl ChartDescriptor {
    pub fn is_renderable(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSet {
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Average sales per weather condition, in the order the service reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAverage {
    pub condition: String,
    pub avg_sales: f64,
}

/// Mapped result of an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub descriptor: ChartDescriptor,
    pub weather: Vec<WeatherAverage>,
    pub days: usize,
    pub event_days: usize,
}

/// Mapped result of a chat query.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub descriptor: ChartDescriptor,
    pub answer: String,
}

/// File handed to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Generated report ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_kind_parse_is_exact() {
        assert_eq!(ChartKind::parse(Some("bar")), ChartKind::Bar);
        assert_eq!(ChartKind::parse(Some("line")), ChartKind::Line);
        assert_eq!(ChartKind::parse(Some("pie")), ChartKind::Pie);
        assert_eq!(ChartKind::parse(Some("scatter")), ChartKind::Scatter);
        assert_eq!(ChartKind::parse(Some("Bar")), ChartKind::Unknown);
        assert_eq!(ChartKind::parse(Some("PIE")), ChartKind::Unknown);
        assert_eq!(ChartKind::parse(Some(" line ")), ChartKind::Unknown);
        assert_eq!(ChartKind::parse(Some("table")), ChartKind::Table);
        assert_eq!(ChartKind::parse(Some("heatmap")), ChartKind::Unknown);
        assert_eq!(ChartKind::parse(None), ChartKind::Unknown);
    }

    #[test]
    fn row_keeps_server_field_order() {
        let row: Row = serde_json::from_value(json!({"zeta": 1, "alpha": 2, "mid": 3})).unwrap();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn row_numeric_and_text_views() {
        let row = Row::new()
            .with("sales", 850000)
            .with("ratio", 0.25)
            .with("label", "1,200")
            .with("none", Value::Null);
        assert_eq!(row.number("sales"), Some(850000.0));
        assert_eq!(row.number("label"), Some(1200.0));
        assert_eq!(row.number("none"), None);
        assert_eq!(row.number("absent"), None);
        assert_eq!(row.text("sales").as_deref(), Some("850000"));
        assert_eq!(row.text("ratio").as_deref(), Some("0.25"));
        assert_eq!(row.text("none").as_deref(), Some(""));
        assert_eq!(row.text("absent"), None);
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(scalar_text(&json!(60.0)), "60");
        assert_eq!(scalar_text(&json!(59.6)), "59.6");
    }
}
