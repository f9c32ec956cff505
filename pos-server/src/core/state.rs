use sqlx::SqlitePool;

use crate::core::Config;
use crate::db;
use crate::utils::AppError;

/// Server state — the explicitly constructed handle every request and
/// background task works through
///
/// Holds the configuration and the SQLite pool. Cloning is cheap (the pool
/// is internally reference-counted); there are no hidden singletons — the
/// pool is opened once in [`ServerState::initialize`] and closed in
/// [`ServerState::shutdown`].
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database and build the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let pool = db::connect(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool,
        })
    }

    /// State backed by an in-memory database (tests)
    #[doc(hidden)]
    pub async fn for_testing() -> Result<Self, AppError> {
        let pool = db::connect_in_memory().await?;
        Ok(Self {
            config: Config::from_env(),
            pool,
        })
    }

    /// Close the pool; called once at process shutdown
    pub async fn shutdown(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
