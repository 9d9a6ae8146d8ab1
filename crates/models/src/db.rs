use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::{debug, info};

/// Idle timeout and lifetime for the single in-memory connection. Recycling it
/// would drop the database, so both are set far beyond any process lifetime.
const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Pool options for the configured database.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is capped at one connection that is never reaped.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_in_memory() {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_KEEPALIVE)
            .max_lifetime(IN_MEMORY_KEEPALIVE);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

/// Open a pooled connection using the configured limits.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    debug!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// Connect and, unless disabled, bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_keeps_its_only_connection() {
        let opt = connect_options(&DatabaseConfig::in_memory());
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_max_lifetime(), Some(IN_MEMORY_KEEPALIVE));
        assert_eq!(opt.get_idle_timeout(), Some(IN_MEMORY_KEEPALIVE));
    }

    #[test]
    fn file_backed_pool_uses_configured_limits() {
        let cfg = DatabaseConfig {
            url: "sqlite://cars.db?mode=rwc".into(),
            max_connections: 7,
            idle_timeout_secs: 60,
            max_lifetime_secs: 120,
            ..DatabaseConfig::default()
        };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(60)));
        assert_eq!(opt.get_max_lifetime(), Some(Duration::from_secs(120)));
    }
}
