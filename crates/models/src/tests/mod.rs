use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db::connect_and_migrate;


/// Relationship and cascade-on-delete tests
pub mod relation_tests;

/// Fresh in-memory database with the schema applied.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    Ok(db)
}
