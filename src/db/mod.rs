use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Reference schema for the three tables the handlers query.
#[cfg(test)]
pub const SCHEMA: &str = include_str!("schema.sql");

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!("Connected to the database (max {} connections)", config.max_connections);
    Ok(pool)
}
