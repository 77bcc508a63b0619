pub mod dashboard_view_model;

pub use dashboard_view_model::DashboardViewModel;
