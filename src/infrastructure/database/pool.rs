use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Connection acquisition is bounded so a saturated pool fails a request
/// instead of parking it indefinitely.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;
    Ok(pool)
}
