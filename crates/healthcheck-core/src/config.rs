use std::time::Duration;

/// Health endpoint of the local application.
pub const HEALTH_URL: &str = "http://localhost:3000/api/health";

/// Upper bound on a single probe, connect through response headers.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Where to probe and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub url: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(HEALTH_URL, REQUEST_TIMEOUT)
    }
}
