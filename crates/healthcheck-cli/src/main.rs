use std::process::ExitCode;

use healthcheck_core::{check_health, HealthStatus};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries exactly one line; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let status = HealthStatus::from(check_health().await);
    tracing::debug!("health status: {status:?}");

    println!("{status}");
    ExitCode::from(status.exit_code())
}
