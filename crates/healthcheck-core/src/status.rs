use std::fmt;

/// Outcome of a health check as reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    /// The single line printed for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Healthy => "✅ Application is healthy",
            Self::Unhealthy => "❌ Application health check failed",
        }
    }

    /// Process exit code: 0 when healthy, 1 otherwise.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 1,
        }
    }
}

impl From<bool> for HealthStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_maps_to_success() {
        let status = HealthStatus::from(true);
        assert_eq!(status, HealthStatus::Healthy);
        assert_eq!(status.exit_code(), 0);
        assert_eq!(status.to_string(), "✅ Application is healthy");
    }

    #[test]
    fn unhealthy_maps_to_failure() {
        let status = HealthStatus::from(false);
        assert_eq!(status, HealthStatus::Unhealthy);
        assert_eq!(status.exit_code(), 1);
        assert_eq!(status.to_string(), "❌ Application health check failed");
    }

    #[test]
    fn messages_are_single_lines() {
        for status in [HealthStatus::Healthy, HealthStatus::Unhealthy] {
            assert!(!status.message().contains('\n'));
        }
    }
}
