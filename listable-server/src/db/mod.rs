//! Database Module
//!
//! Owns the SurrealDB client handle shared by every repository.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;

use crate::core::config::DatabaseConfig;
use repository::RepoResult;

/// Database service, owns the document store client
///
/// Clones share one connection. The handle exists before it is connected;
/// until [`DbService::connect`] succeeds every query fails with a
/// database error, which the API reports as a 500.
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Any>,
}

impl DbService {
    /// Create an unconnected client handle
    pub fn new() -> Self {
        Self {
            db: Surreal::init(),
        }
    }

    /// Open the connection, sign in and select namespace/database
    pub async fn connect(&self, config: &DatabaseConfig) -> RepoResult<()> {
        self.db.connect(config.url.as_str()).await?;

        if let Some(creds) = &config.credentials {
            self.db
                .signin(Root {
                    username: &creds.username,
                    password: &creds.password,
                })
                .await?;
        }

        self.db
            .use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );
        Ok(())
    }

    /// Connect an in-memory store (tests)
    pub async fn in_memory() -> RepoResult<Self> {
        let service = Self::new();
        service.connect(&DatabaseConfig::in_memory()).await?;
        Ok(service)
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }

    /// End the store session. Remaining clones see an unauthenticated client.
    pub async fn shutdown(self) {
        if let Err(e) = self.db.invalidate().await {
            tracing::warn!(error = %e, "Failed to invalidate database session");
        }
        tracing::info!("Database session closed");
    }
}

impl Default for DbService {
    fn default() -> Self {
        Self::new()
    }
}
