use reqwest::StatusCode;

/// Why a probe did not come back healthy.
///
/// Only [`crate::probe`] exposes this. The `check_health*` functions fold every
/// variant into `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}
