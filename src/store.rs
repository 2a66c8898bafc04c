use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::error::AppError;
use crate::models::user::{NewUser, User};
use crate::schema;

/// Persistence the bootstrapper needs from the backing store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts every row in one transaction and commits.
    async fn insert_users(&self, users: &[NewUser]) -> Result<(), AppError>;
}

/// Postgres-backed store. Owns the pool for the lifetime of the run.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        for stmt in schema::statements() {
            sqlx::query(stmt)
                .execute(&self.pool)
                .await
                .map_err(AppError::Schema)?;
        }
        debug!("schema ensured");
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, full_name, password_hash, role, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_users(&self, users: &[NewUser]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (username, full_name, password_hash, role)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&user.username)
            .bind(&user.full_name)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .execute(&mut *tx)
            .await
            .map_err(AppError::from_insert)?;
        }

        tx.commit().await?;
        Ok(())
    }
}
