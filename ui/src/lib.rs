//! Shared UI crate for Salesboard: chart rendering, dashboard state and the
//! views every platform shell mounts.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    // Brand bar + locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
