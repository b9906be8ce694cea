use reqwest::{Client, StatusCode};

use crate::config::ProbeConfig;
use crate::error::Error;

/// Probe the local application's health endpoint once.
///
/// Returns `true` only when the endpoint answers `200 OK` within the timeout.
/// Refused connections, timeouts, malformed responses and any other status all
/// yield `false`, with no way for the caller to tell them apart.
pub async fn check_health() -> bool {
    check_health_with(&ProbeConfig::default()).await
}

/// Same as [`check_health`], against an explicit target.
pub async fn check_health_with(config: &ProbeConfig) -> bool {
    match probe(config).await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("health check against {} failed: {e}", config.url);
            false
        }
    }
}

/// Send a single GET to `config.url` and require a `200 OK`.
///
/// Redirects are followed and the final status is the one checked. The body
/// is never read.
///
/// # Errors
///
/// Returns [`Error::Client`] if the HTTP client cannot be built,
/// [`Error::Request`] if no response arrives within `config.timeout`, and
/// [`Error::UnexpectedStatus`] for any status other than 200.
pub async fn probe(config: &ProbeConfig) -> Result<(), Error> {
    // Target is loopback; never route it through an env-configured proxy.
    let client = Client::builder()
        .timeout(config.timeout)
        .no_proxy()
        .build()
        .map_err(Error::Client)?;

    tracing::debug!("sending health check request to {}", config.url);
    let resp = client
        .get(&config.url)
        .send()
        .await
        .map_err(Error::Request)?;

    let status = resp.status();
    tracing::debug!("health endpoint responded with {status}");

    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus(status));
    }

    Ok(())
}
