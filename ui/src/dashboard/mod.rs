//! Dashboard state, the controller that drives it, and the two panels that render it.

mod chat_panel;
pub mod controller;
mod state;
mod store;
mod viz_panel;

pub use chat_panel::ChatPanel;
pub use controller::{DashboardController, DownloadSink, LoadingGuard, ReportSink, RequestOutcome};
pub use state::{DashboardState, Phase};
pub use store::StateStore;
pub use viz_panel::VizPanel;

use dioxus::prelude::*;

/// Controller as wired in the running app.
pub type AppController = DashboardController<api::AnalysisClient, Signal<DashboardState>>;
