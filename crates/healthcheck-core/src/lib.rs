pub mod checker;
pub mod config;
pub mod error;
pub mod status;

pub use checker::{check_health, check_health_with, probe};
pub use config::ProbeConfig;
pub use error::Error;
pub use status::HealthStatus;
