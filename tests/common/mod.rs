use railqr_seed::store::PgUserStore;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;

/// A `PgUserStore` bound to a freshly recreated schema.
///
/// Returns `None` when `TEST_DATABASE_URL` is unset so the suite still runs
/// without a Postgres server.
pub async fn pg_store(schema: &str) -> Option<PgUserStore> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("TEST_DATABASE_URL not set, skipping Postgres test");
            return None;
        }
    };

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("failed to connect to test database");
    sqlx::query(&format!("DROP SCHEMA IF EXISTS {schema} CASCADE"))
        .execute(&admin)
        .await
        .expect("failed to drop test schema");
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&admin)
        .await
        .expect("failed to create test schema");
    admin.close().await;

    let options = PgConnectOptions::from_str(&url)
        .expect("invalid TEST_DATABASE_URL")
        .options([("search_path", schema)]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("failed to connect to test schema");

    Some(PgUserStore::new(pool))
}

pub async fn count_users(store: &PgUserStore, username: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(store.pool())
        .await
        .expect("count query failed");
    count
}
