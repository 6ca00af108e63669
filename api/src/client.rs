//! HTTP transport for the analysis service.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{rejection_from, ApiError, Result};
use crate::mapping::{
    project_chat, project_upload, ANALYZE_PATH, CHAT_ANALYZE_PATH, GENERATE_PDF_PATH,
    INSIGHTS_PATH,
};
use crate::model::{ChatOutcome, InsightSet, ReportFile, UploadFile, UploadOutcome};
use crate::wire::{AnalyzeResponse, ChatAnalyzeResponse, ChatRequest};

/// The four remote operations the dashboard drives.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait AnalysisService {
    async fn upload_and_analyze(&self, file: UploadFile) -> Result<UploadOutcome>;

    async fn chat_analyze(&self, query: &str) -> Result<ChatOutcome>;

    async fn fetch_insights(&self) -> Result<InsightSet>;

    async fn export_report(&self) -> Result<ReportFile>;
}

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fail on non-2xx, turning the body into a rejection detail.
    async fn checked(endpoint: &'static str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status = status.as_u16(), "analysis service rejected request");
        Err(rejection_from(
            endpoint,
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }

    async fn json_body<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> Result<T> {
        let response = Self::checked(endpoint, response).await?;
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))?;
        serde_json::from_str(&text).map_err(|err| ApiError::decode(endpoint, err))
    }
}

#[async_trait(?Send)]
impl AnalysisService for AnalysisClient {
    async fn upload_and_analyze(&self, file: UploadFile) -> Result<UploadOutcome> {
        tracing::debug!(file = %file.name, bytes = file.bytes.len(), "uploading sales file");
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str("text/csv")
            .map_err(|err| ApiError::transport(ANALYZE_PATH, err))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.config.endpoint(ANALYZE_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::transport(ANALYZE_PATH, err))?;

        let body: AnalyzeResponse = Self::json_body(ANALYZE_PATH, response).await?;
        project_upload(body.data)
    }

    async fn chat_analyze(&self, query: &str) -> Result<ChatOutcome> {
        tracing::debug!(query, "requesting chat analysis");
        let response = self
            .http
            .post(self.config.endpoint(CHAT_ANALYZE_PATH))
            .json(&ChatRequest { query })
            .send()
            .await
            .map_err(|err| ApiError::transport(CHAT_ANALYZE_PATH, err))?;

        let body: ChatAnalyzeResponse = Self::json_body(CHAT_ANALYZE_PATH, response).await?;
        project_chat(body)
    }

    async fn fetch_insights(&self) -> Result<InsightSet> {
        let response = self
            .http
            .get(self.config.endpoint(INSIGHTS_PATH))
            .send()
            .await
            .map_err(|err| ApiError::transport(INSIGHTS_PATH, err))?;

        Self::json_body(INSIGHTS_PATH, response).await
    }

    async fn export_report(&self) -> Result<ReportFile> {
        tracing::debug!("requesting PDF report");
        let response = self
            .http
            .post(self.config.endpoint(GENERATE_PDF_PATH))
            .send()
            .await
            .map_err(|err| ApiError::transport(GENERATE_PDF_PATH, err))?;

        let response = Self::checked(GENERATE_PDF_PATH, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::transport(GENERATE_PDF_PATH, err))?;

        Ok(ReportFile {
            filename: self.config.report_filename.clone(),
            bytes: bytes.to_vec(),
        })
    }
}
