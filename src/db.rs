use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

const PRAGMAS: [&str; 3] =
    ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA foreign_keys=ON"];

/// Opens the pool, brings the schema up to date and applies the SQLite
/// pragmas. Safe to call against an already-initialised database.
pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(max_connections).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await?;

    Migrator::up(&db, None).await?;

    // The SQLite migrator switches foreign_keys off while it runs.
    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    tracing::debug!(url = %database_url, "database ready");
    Ok(db)
}
