//! Repository Module
//!
//! CRUD operations over SurrealDB tables.

pub mod task;

pub use task::TaskRepository;

use shared::error::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Store failures are logged verbatim here and reach the client only as a
/// generic database error.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Store query error");
                AppError::new(shared::error::ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 记录 ID 为 (table, key)，key 即对外暴露的 24 位十六进制 TaskId：
//   - CRUD: db.select((TABLE, key)) / db.update(..) / db.delete(..)
//   - 查询结果用 record::id(id) AS _id 还原为纯 key
// 对外 JSON 不带 "tasks:" 前缀

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
