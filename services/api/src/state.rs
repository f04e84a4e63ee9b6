use std::sync::Arc;

use crate::domain::port::{Clock, DatabaseProbe, SystemClock};
use crate::domain::types::ServiceInfo;
use crate::infra::db::DbDatabaseProbe;
use crate::usecase::health::{HealthCheckUseCase, PingUseCase};

/// Shared application state passed to every handler via axum `State`.
///
/// Holds no mutable data; each request builds its use case from a clone.
#[derive(Clone)]
pub struct AppState<P = DbDatabaseProbe> {
    pub probe: P,
    pub clock: Arc<dyn Clock>,
    pub info: ServiceInfo,
}

impl<P> AppState<P> {
    pub fn new(probe: P, info: ServiceInfo) -> Self {
        Self {
            probe,
            clock: Arc::new(SystemClock),
            info,
        }
    }

    pub fn ping(&self) -> PingUseCase<Arc<dyn Clock>> {
        PingUseCase {
            clock: Arc::clone(&self.clock),
            info: self.info.clone(),
        }
    }
}

impl<P: DatabaseProbe + Clone> AppState<P> {
    pub fn health_check(&self) -> HealthCheckUseCase<P, Arc<dyn Clock>> {
        HealthCheckUseCase {
            probe: self.probe.clone(),
            clock: Arc::clone(&self.clock),
            info: self.info.clone(),
        }
    }
}
