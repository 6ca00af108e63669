//! Wires dashboard actions to the analysis service.
//!
//! Every remote call runs inside a loading window: the flag is raised before
//! the request leaves and a [`LoadingGuard`] lowers it when the window closes,
//! however the call ended. Only one window is open at a time; anything
//! triggered meanwhile is turned away as [`RequestOutcome::Busy`].

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::logger::tracing::{debug, info, warn};

use api::{AnalysisService, ChatMessage, ErrorKind, ReportFile, UploadFile};

use super::StateStore;
use crate::core::download::download_bytes;
use crate::t;

const PDF_MIME: &str = "application/pdf";

/// What became of a dashboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Completed,
    /// The call was made and failed; the failure has been reported to the user.
    Failed(ErrorKind),
    /// Another request was in flight; nothing happened.
    Busy,
    /// Preconditions unmet (blank query, nothing to export); nothing happened.
    Ignored,
    /// The state behind the store is gone.
    Unavailable,
}

/// Where a generated report goes once the service has produced it.
#[async_trait(?Send)]
pub trait ReportSink {
    /// `Ok(Some(path))` when the file was written somewhere the user can find it.
    async fn deliver(&self, report: ReportFile) -> Result<Option<String>, String>;
}

/// Browser download, or a file in the app's data directory on native.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadSink;

#[async_trait(?Send)]
impl ReportSink for DownloadSink {
    async fn deliver(&self, report: ReportFile) -> Result<Option<String>, String> {
        download_bytes(&report.filename, PDF_MIME, report.bytes).await
    }
}

/// Raised loading flag, lowered on drop.
pub struct LoadingGuard<St: StateStore> {
    store: St,
}

impl<St: StateStore> LoadingGuard<St> {
    pub fn acquire(store: &St) -> Result<Self, RequestOutcome> {
        match store.inspect(|s| s.loading) {
            None => return Err(RequestOutcome::Unavailable),
            Some(true) => return Err(RequestOutcome::Busy),
            Some(false) => {}
        }
        if !store.update(|s| s.loading = true) {
            return Err(RequestOutcome::Unavailable);
        }
        Ok(Self {
            store: store.clone(),
        })
    }
}

impl<St: StateStore> Drop for LoadingGuard<St> {
    fn drop(&mut self) {
        self.store.update(|s| s.loading = false);
    }
}

pub struct DashboardController<S, St, D = DownloadSink> {
    service: Rc<S>,
    store: St,
    sink: Rc<D>,
}

impl<S, St: Clone, D> Clone for DashboardController<S, St, D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            store: self.store.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<S: AnalysisService, St: StateStore> DashboardController<S, St, DownloadSink> {
    pub fn new(service: Rc<S>, store: St) -> Self {
        Self::with_sink(service, store, Rc::new(DownloadSink))
    }
}

impl<S, St, D> DashboardController<S, St, D>
where
    S: AnalysisService,
    St: StateStore,
    D: ReportSink,
{
    pub fn with_sink(service: Rc<S>, store: St, sink: Rc<D>) -> Self {
        Self {
            service,
            store,
            sink,
        }
    }

    /// Ask the service a free-form question. The chart only changes on success.
    pub async fn send_query(&self, query: &str) -> RequestOutcome {
        let query = query.trim();
        if query.is_empty() {
            return RequestOutcome::Ignored;
        }
        let _guard = match LoadingGuard::acquire(&self.store) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        self.store.update(|s| s.push(ChatMessage::user(query)));

        debug!("chat query: {query}");
        match self.service.chat_analyze(query).await {
            Ok(outcome) => {
                let answer = if outcome.answer.trim().is_empty() {
                    t!("chat-answer-fallback")
                } else {
                    outcome.answer
                };
                let descriptor = outcome.descriptor;
                self.store.update(move |s| {
                    s.descriptor = Some(descriptor);
                    s.push(ChatMessage::assistant(answer));
                });
                RequestOutcome::Completed
            }
            Err(err) => {
                warn!("chat query failed: {err}");
                let text = match err.kind() {
                    ErrorKind::EmptyResult => t!("chat-empty-result"),
                    _ => t!("chat-error", detail = err.detail()),
                };
                self.store.update(|s| s.push(ChatMessage::assistant(text)));
                RequestOutcome::Failed(err.kind())
            }
        }
    }

    /// Upload a CSV for analysis, then refresh the insight card in its own window.
    pub async fn upload_file(&self, file: UploadFile) -> RequestOutcome {
        let guard = match LoadingGuard::acquire(&self.store) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        debug!("uploading {} ({} bytes)", file.name, file.bytes.len());
        let result = self.service.upload_and_analyze(file).await;
        drop(guard);

        match result {
            Ok(outcome) => {
                let summary = t!(
                    "upload-summary",
                    days = outcome.days,
                    events = outcome.event_days
                );
                let mut descriptor = outcome.descriptor;
                descriptor.summary = summary.clone();
                let weather = outcome.weather;
                self.store.update(move |s| {
                    s.descriptor = Some(descriptor);
                    s.weather = weather;
                    s.push(ChatMessage::assistant(summary));
                });
                self.refresh_insights().await;
                RequestOutcome::Completed
            }
            Err(err) => {
                warn!("upload failed: {err}");
                let text = match err.kind() {
                    ErrorKind::EmptyResult => t!("upload-empty"),
                    _ => t!("upload-error"),
                };
                self.store.update(|s| s.push(ChatMessage::assistant(text)));
                RequestOutcome::Failed(err.kind())
            }
        }
    }

    /// Best-effort: failures are logged and leave the current insights alone.
    pub async fn refresh_insights(&self) -> RequestOutcome {
        let _guard = match LoadingGuard::acquire(&self.store) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };
        match self.service.fetch_insights().await {
            Ok(insights) => {
                self.store.update(move |s| s.insights = Some(insights));
                RequestOutcome::Completed
            }
            Err(err) => {
                warn!("insight fetch failed: {err}");
                RequestOutcome::Failed(err.kind())
            }
        }
    }

    /// Generate the PDF report and hand it to the sink. Needs a chart on screen.
    pub async fn export_report(&self) -> RequestOutcome {
        match self.store.inspect(|s| s.descriptor.is_some()) {
            None => return RequestOutcome::Unavailable,
            Some(false) => return RequestOutcome::Ignored,
            Some(true) => {}
        }
        let _guard = match LoadingGuard::acquire(&self.store) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        debug!("requesting report");
        let report = match self.service.export_report().await {
            Ok(report) => report,
            Err(err) => {
                warn!("report generation failed: {err}");
                self.raise_alert(t!("export-failed", detail = err.detail()));
                return RequestOutcome::Failed(err.kind());
            }
        };

        let filename = report.filename.clone();
        match self.sink.deliver(report).await {
            Ok(Some(path)) => {
                info!("report saved to {path}");
                RequestOutcome::Completed
            }
            Ok(None) => {
                info!("report {filename} handed to the browser");
                RequestOutcome::Completed
            }
            Err(details) => {
                warn!("saving report failed: {details}");
                self.raise_alert(t!("export-failed", detail = details));
                RequestOutcome::Failed(ErrorKind::TransportFailure)
            }
        }
    }

    pub fn raise_alert(&self, message: String) {
        self.store.update(move |s| s.alert = Some(message));
    }

    pub fn dismiss_alert(&self) {
        self.store.update(|s| s.alert = None);
    }
}
