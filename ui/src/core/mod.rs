//! Platform glue and presentation helpers shared by the dashboard views.

pub mod download;
pub mod format;
