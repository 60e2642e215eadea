pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, AttributionConfig, ReportConfig};
pub use error::{BoardError, BoardResult};
