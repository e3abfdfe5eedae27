//! Store abstraction over the `users` table.
//!
//! # Design
//! Each operation maps to a single parameterized SQL statement; there is no
//! multi-statement composition and no caching. `update` and `delete` report
//! whether a row matched so handlers can distinguish "the operation ran" from
//! "the target existed" and answer 404 instead of acknowledging a no-op.
//!
//! The trait is object-safe so the router can be built over `Arc<dyn
//! UserStore>`: the binary injects `MySqlStore`, the test suites inject
//! `MemoryStore`, and the handlers cannot tell the difference.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{User, UserInput};

/// Failure talking to the backing store.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct StoreError(#[from] sqlx::Error);

/// The four operations the HTTP surface needs.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every record, in store-defined order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a record and return the id the store assigned.
    async fn create(&self, input: &UserInput) -> Result<i64, StoreError>;

    /// Replace all non-id fields of the record with the given id.
    /// Returns `false` when no row matched.
    async fn update(&self, id: i64, input: &UserInput) -> Result<bool, StoreError>;

    /// Remove the record with the given id. Returns `false` when no row
    /// matched.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// MySQL-backed store over a shared `sqlx` connection pool.
///
/// The `users` table (auto-increment `id`, `name`, `email`, `age`) is
/// provisioned externally; this store only ever issues DML against it.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, input: &UserInput) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO users (name, email, age) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i64)
    }

    async fn update(&self, id: i64, input: &UserInput) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// In-memory store with the same observable behavior as `MySqlStore`.
///
/// Ids come from a monotonically increasing counter starting at 1 and are
/// never reused. The ordered map keeps listing order stable across calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn create(&self, input: &UserInput) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id,
                name: input.name.clone(),
                email: input.email.clone(),
                age: input.age,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, input: &UserInput) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.name = input.name.clone();
                row.email = input.email.clone();
                row.age = input.age;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}
