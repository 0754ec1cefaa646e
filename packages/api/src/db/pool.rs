use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::{server_config, ConfigError};

static POOL: OnceCell<PgPool> = OnceCell::const_new();

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        let config = server_config()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok::<_, DbError>(pool)
    })
    .await
}
