//! Client for the sales analysis service: typed requests, response mapping
//! and the error taxonomy the dashboard reports against.

mod client;
mod config;
mod error;
pub mod mapping;
mod model;
pub mod wire;

pub use client::{AnalysisClient, AnalysisService};
pub use config::{ClientConfig, BASE_URL_ENV};
pub use error::{rejection_from, ApiError, ErrorKind, Result};
pub use model::{
    scalar_text, ChartDescriptor, ChartKind, ChatMessage, ChatOutcome, InsightSet, ReportFile,
    Role, Row, UploadFile, UploadOutcome, WeatherAverage,
};
