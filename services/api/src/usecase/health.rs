use std::collections::BTreeMap;
use std::env::consts;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::port::{Clock, DatabaseProbe};
use crate::domain::types::{DependencyHealth, HealthReport, HealthStatus, PingReport, ServiceInfo};

pub const DATABASE_DEPENDENCY: &str = "database";

/// Runtime descriptors attached to every deep health report.
pub fn system_info() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "rust_version".to_owned(),
            env!("CARGO_PKG_RUST_VERSION").to_owned(),
        ),
        (
            "platform".to_owned(),
            format!("{}-{}", consts::OS, consts::ARCH),
        ),
        ("os_family".to_owned(), consts::FAMILY.to_owned()),
    ])
}

// ── HealthCheck ──────────────────────────────────────────────────────────────

pub struct HealthCheckUseCase<P: DatabaseProbe, C: Clock> {
    pub probe: P,
    pub clock: C,
    pub info: ServiceInfo,
}

impl<P: DatabaseProbe, C: Clock> HealthCheckUseCase<P, C> {
    /// Probe the database and assemble the report. Never fails: a probe error
    /// becomes an unhealthy dependency entry.
    pub async fn execute(&self) -> HealthReport {
        let started = Instant::now();

        let database = match self.probe.execute_trivial_query().await {
            Ok(()) => {
                info!("database health check passed");
                DependencyHealth::connected()
            }
            Err(e) => {
                warn!(error = %e, "database health check failed");
                DependencyHealth::failed(&e)
            }
        };

        let uptime = started.elapsed().as_secs_f64();

        HealthReport {
            // Not derived from `dependencies`; callers read the per-dependency entry.
            status: HealthStatus::Healthy,
            info: self.info.clone(),
            timestamp: self.clock.now(),
            uptime,
            dependencies: BTreeMap::from([(DATABASE_DEPENDENCY.to_owned(), database)]),
            system_info: system_info(),
        }
    }
}

// ── Ping ─────────────────────────────────────────────────────────────────────

pub struct PingUseCase<C: Clock> {
    pub clock: C,
    pub info: ServiceInfo,
}

impl<C: Clock> PingUseCase<C> {
    pub fn execute(&self) -> PingReport {
        PingReport {
            status: HealthStatus::Healthy,
            info: self.info.clone(),
            timestamp: self.clock.now(),
        }
    }
}
