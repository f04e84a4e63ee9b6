use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only service identity reported by both health endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub version: String,
    pub environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyHealth {
    pub status: HealthStatus,
    pub message: String,
}

impl DependencyHealth {
    pub const CONNECTED: &'static str = "Connected successfully";

    pub fn connected() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: Self::CONNECTED.to_owned(),
        }
    }

    /// Wrap a probe failure; the error's display text is reported as-is.
    pub fn failed(error: &anyhow::Error) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: error.to_string(),
        }
    }
}

/// Result of a deep health check.
///
/// `status` is always [`HealthStatus::Healthy`]; dependency failures only show
/// up inside `dependencies`.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub info: ServiceInfo,
    pub timestamp: DateTime<Utc>,
    /// Seconds spent probing dependencies, not process uptime.
    pub uptime: f64,
    pub dependencies: BTreeMap<String, DependencyHealth>,
    pub system_info: BTreeMap<String, String>,
}

/// Result of the shallow liveness check.
#[derive(Debug, Clone)]
pub struct PingReport {
    pub status: HealthStatus,
    pub info: ServiceInfo,
    pub timestamp: DateTime<Utc>,
}
