use std::collections::BTreeMap;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::port::DatabaseProbe;
use crate::domain::types::{DependencyHealth, HealthReport, HealthStatus, PingReport};
use crate::state::AppState;

// ── GET /health/ ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub version: String,
    pub environment: String,
    #[serde(serialize_with = "pulse_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
    pub dependencies: BTreeMap<String, DependencyHealth>,
    pub system_info: BTreeMap<String, String>,
}

impl From<HealthReport> for HealthCheckResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status,
            version: report.info.version,
            environment: report.info.environment,
            timestamp: report.timestamp,
            uptime: report.uptime,
            dependencies: report.dependencies,
            system_info: report.system_info,
        }
    }
}

/// Deep check: probes the database. Always 200; a database failure is only
/// visible in `dependencies.database`.
pub async fn health_check<P>(State(state): State<AppState<P>>) -> Json<HealthCheckResponse>
where
    P: DatabaseProbe + Clone + 'static,
{
    let report = state.health_check().execute().await;
    Json(report.into())
}

// ── GET /health/ping ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: HealthStatus,
    pub version: String,
    pub environment: String,
    #[serde(serialize_with = "pulse_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<PingReport> for PingResponse {
    fn from(report: PingReport) -> Self {
        Self {
            status: report.status,
            version: report.info.version,
            environment: report.info.environment,
            timestamp: report.timestamp,
        }
    }
}

/// Liveness check: no I/O, answers even while the database is down.
pub async fn ping<P>(State(state): State<AppState<P>>) -> Json<PingResponse>
where
    P: Clone + Send + Sync + 'static,
{
    Json(state.ping().execute().into())
}
