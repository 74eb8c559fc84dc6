use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Handle to the Postgres pool, passed to handlers through `AppState`.
///
/// The pool connects lazily, so nothing dials the server until a query runs.
/// No handler issues one yet.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn init(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(16)
            .connect_lazy(database_url)?;

        info!("Database pool ready (EAR enabled)");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
