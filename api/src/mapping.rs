//! Projection of service responses into dashboard shapes. Pure; no I/O.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::model::{ChartDescriptor, ChartKind, ChatOutcome, Row, UploadOutcome, WeatherAverage};
use crate::wire::{AnalyzePayload, ChatAnalyzeResponse};

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const CHAT_ANALYZE_PATH: &str = "/api/chat_analyze";
pub const INSIGHTS_PATH: &str = "/api/insights";
pub const GENERATE_PDF_PATH: &str = "/api/generate_pdf";

/// Label written into the `event` column of days flagged by the service.
pub const EVENT_LABEL: &str = "Event";

/// Upload responses always open on a bar chart of daily sales.
pub fn project_upload(payload: AnalyzePayload) -> Result<UploadOutcome> {
    if payload.daily_analysis.is_empty() {
        return Err(ApiError::EmptyResult {
            endpoint: ANALYZE_PATH,
        });
    }

    let days = payload.daily_analysis.len();
    let mut event_days = 0;
    let rows = payload
        .daily_analysis
        .iter()
        .map(|day| {
            let event = if day.is_event_day() {
                event_days += 1;
                Value::from(EVENT_LABEL)
            } else {
                Value::Null
            };
            Row::new()
                .with("date", day.date.as_str())
                .with("sales", day.total_sales.map_or(Value::Null, number_value))
                .with(
                    "trend",
                    day.avg_trend
                        .map_or(Value::Null, |trend| number_value(round_half_up(trend))),
                )
                .with("event", event)
        })
        .collect();

    let weather = payload
        .weather_analysis
        .into_iter()
        .filter_map(|record| {
            record.avg_sales.map(|avg_sales| WeatherAverage {
                condition: record.condition,
                avg_sales,
            })
        })
        .collect();

    Ok(UploadOutcome {
        descriptor: ChartDescriptor {
            kind: ChartKind::Bar,
            rows,
            x_key: "date".to_string(),
            y_key: "sales".to_string(),
            summary: String::new(),
        },
        weather,
        days,
        event_days,
    })
}

/// Chat responses let the service choose the encoding. A non-blank `error`
/// wins over any chart fields that came along with it.
pub fn project_chat(response: ChatAnalyzeResponse) -> Result<ChatOutcome> {
    if let Some(error) = response.error.filter(|e| !e.trim().is_empty()) {
        return Err(ApiError::Application(error));
    }

    let rows = response.data.unwrap_or_default();
    if rows.is_empty() {
        return Err(ApiError::EmptyResult {
            endpoint: CHAT_ANALYZE_PATH,
        });
    }

    let answer = response.answer.unwrap_or_default();
    Ok(ChatOutcome {
        descriptor: ChartDescriptor {
            kind: ChartKind::parse(response.chart_type.as_deref()),
            rows,
            x_key: response.x_key.unwrap_or_default(),
            y_key: response.y_key.unwrap_or_default(),
            summary: answer.clone(),
        },
        answer,
    })
}

/// Halves round towards positive infinity, matching how the dashboard has
/// always displayed trend scores.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Whole numbers become JSON integers so rows compare and print cleanly.
fn number_value(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::wire::AnalyzeResponse;

    fn upload(raw: &str) -> Result<UploadOutcome> {
        let response: AnalyzeResponse = serde_json::from_str(raw).unwrap();
        project_upload(response.data)
    }

    #[test]
    fn single_event_day_maps_to_bar_descriptor() {
        let outcome = upload(
            r#"{"data":{"daily_analysis":[
                {"日付":"9/14","total_sales":850000,"avg_trend":59.6,"has_event":1}
            ]}}"#,
        )
        .unwrap();

        let expected = Row::new()
            .with("date", "9/14")
            .with("sales", 850000)
            .with("trend", 60)
            .with("event", "Event");

        assert_eq!(outcome.descriptor.kind, ChartKind::Bar);
        assert_eq!(outcome.descriptor.x_key, "date");
        assert_eq!(outcome.descriptor.y_key, "sales");
        assert_eq!(outcome.descriptor.rows, vec![expected]);
        assert_eq!(outcome.days, 1);
        assert_eq!(outcome.event_days, 1);
    }

    #[test]
    fn non_event_days_carry_null_event() {
        let outcome = upload(
            r#"{"data":{"daily_analysis":[
                {"日付":"9/01","total_sales":450000.0,"avg_trend":42.4,"has_event":0},
                {"日付":"9/02","total_sales":420000.5,"avg_trend":42.5,"has_event":0}
            ]}}"#,
        )
        .unwrap();
        let rows = &outcome.descriptor.rows;
        assert_eq!(rows[0].get("event"), Some(&Value::Null));
        assert_eq!(rows[0].get("sales"), Some(&Value::from(450000)));
        assert_eq!(rows[0].get("trend"), Some(&Value::from(42)));
        assert_eq!(rows[1].get("sales"), Some(&Value::from(420000.5)));
        assert_eq!(rows[1].get("trend"), Some(&Value::from(43)));
        assert_eq!(outcome.event_days, 0);
    }

    #[test]
    fn weather_breakdown_keeps_order_and_skips_missing_averages() {
        let outcome = upload(
            r#"{"data":{
                "daily_analysis":[{"日付":"9/01","total_sales":1,"avg_trend":1,"has_event":0}],
                "weather_analysis":[
                    {"天気":"晴れ","avg_sales":510000.0},
                    {"天気":"雪"},
                    {"天気":"雨","avg_sales":380000.0}
                ]}}"#,
        )
        .unwrap();
        let names: Vec<_> = outcome.weather.iter().map(|w| w.condition.as_str()).collect();
        assert_eq!(names, vec!["晴れ", "雨"]);
    }

    #[test]
    fn empty_daily_analysis_is_empty_result() {
        let err = upload(r#"{"data":{"daily_analysis":[]}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResult);
    }

    #[test]
    fn chat_fields_map_directly() {
        let response: ChatAnalyzeResponse = serde_json::from_str(
            r#"{"chartType":"pie","data":[{"weather":"晴れ","sales":3},{"weather":"雨","sales":1}],
                "xKey":"weather","yKey":"sales","answer":"晴れの日が多い"}"#,
        )
        .unwrap();
        let outcome = project_chat(response).unwrap();
        assert_eq!(outcome.descriptor.kind, ChartKind::Pie);
        assert_eq!(outcome.descriptor.rows.len(), 2);
        assert_eq!(outcome.descriptor.x_key, "weather");
        assert_eq!(outcome.descriptor.summary, "晴れの日が多い");
        assert_eq!(outcome.answer, "晴れの日が多い");
    }

    #[test]
    fn chat_error_field_wins() {
        let response: ChatAnalyzeResponse = serde_json::from_str(
            r#"{"error":"no matching data","chartType":"bar","data":[{"a":1}]}"#,
        )
        .unwrap();
        let err = project_chat(response).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApplicationError);
        assert_eq!(err.detail(), "no matching data");
    }

    #[test]
    fn blank_error_field_is_ignored() {
        let response: ChatAnalyzeResponse =
            serde_json::from_str(r#"{"error":"  ","chartType":"bar","data":[{"a":1}]}"#).unwrap();
        assert!(project_chat(response).is_ok());
    }

    #[test]
    fn chat_without_rows_is_empty_result() {
        let response: ChatAnalyzeResponse =
            serde_json::from_str(r#"{"chartType":"bar","data":[],"answer":"none"}"#).unwrap();
        assert_eq!(project_chat(response).unwrap_err().kind(), ErrorKind::EmptyResult);
    }

    #[test]
    fn rounding_matches_display_convention() {
        assert_eq!(round_half_up(59.6), 60.0);
        assert_eq!(round_half_up(42.5), 43.0);
        assert_eq!(round_half_up(42.49), 42.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }
}
