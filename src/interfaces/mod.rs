pub mod components;
pub mod dashboard;
pub mod design_system;
pub mod tabs;
pub mod view_models;

pub use dashboard::DashboardApp;
