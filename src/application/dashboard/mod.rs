// Snapshot composition and chart windows for the dashboard and CLI
pub mod chart_window;
pub mod dashboard_service;
pub mod snapshot;

pub use chart_window::{ChartWindow, Period};
pub use dashboard_service::{DashboardOptions, DashboardService};
pub use snapshot::DashboardSnapshot;
