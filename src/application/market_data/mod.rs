// Market data processing modules
pub mod cleaning;
pub mod loader;
