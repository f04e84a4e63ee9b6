use std::future::Future;

use chrono::{DateTime, Utc};

/// Round-trips a no-op query to confirm the database is reachable.
pub trait DatabaseProbe: Send + Sync {
    fn execute_trivial_query(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Wall-clock source for response timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
