//! Response bodies exactly as the analysis service sends them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Row;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub data: AnalyzePayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzePayload {
    #[serde(default)]
    pub daily_analysis: Vec<DailyRecord>,
    #[serde(default)]
    pub weather_analysis: Vec<WeatherRecord>,
}

/// Per-day aggregate. Field names are the service's; the date column keeps its
/// localized header.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "日付", alias = "date")]
    pub date: String,
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default)]
    pub avg_trend: Option<f64>,
    /// 0/1 flag; pandas may emit it as an int or a float.
    #[serde(default)]
    pub has_event: Value,
    #[serde(default)]
    pub customer_count: Option<f64>,
    #[serde(default)]
    pub avg_spend: Option<f64>,
}

impl DailyRecord {
    pub fn is_event_day(&self) -> bool {
        match &self.has_event {
            Value::Number(n) => n.as_f64() == Some(1.0),
            Value::Bool(b) => *b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "天気", alias = "weather")]
    pub condition: String,
    #[serde(default)]
    pub avg_sales: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Body of `/api/chat_analyze`. The older `/api/analyze_query` spelled the
/// keys differently; both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatAnalyzeResponse {
    #[serde(default, rename = "chartType", alias = "type")]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Row>>,
    #[serde(default, rename = "xKey", alias = "x_key")]
    pub x_key: Option<String>,
    #[serde(default, rename = "yKey", alias = "y_key")]
    pub y_key: Option<String>,
    #[serde(default, alias = "summary")]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
