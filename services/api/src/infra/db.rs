use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use crate::config::ApiConfig;
use crate::domain::port::DatabaseProbe;

/// Build the connection pool without dialing the database.
///
/// Connections are opened on first use so the service still starts, and
/// `/health/ping` still answers, while the database is unreachable.
pub async fn connect(config: &ApiConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy(true)
        .sqlx_logging(false);
    Database::connect(options).await
}

// ── Database probe ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDatabaseProbe {
    pub db: DatabaseConnection,
}

impl DatabaseProbe for DbDatabaseProbe {
    /// Checks a connection out of the pool for one `SELECT 1`; it goes back to
    /// the pool when the query finishes, fails or is dropped.
    async fn execute_trivial_query(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        self.db
            .query_one(Statement::from_string(backend, "SELECT 1"))
            .await?;
        Ok(())
    }
}
