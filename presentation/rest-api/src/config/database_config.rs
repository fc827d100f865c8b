use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::{required_var, var_or};

/// Initialize the database connection pool and apply pending migrations.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = required_var("DATABASE_URL")?;
    let max_connections: u32 = var_or("DATABASE_MAX_CONNECTIONS", 5)?;
    let migrations_path = var_or("MIGRATIONS_PATH", "./migrations".to_string())?;

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;

    tracing::info!(max_connections, %migrations_path, "database ready");
    Ok(pool)
}
