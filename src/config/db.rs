//! SQLite connection pool and embedded migrations.

use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type Connection = SqliteConnection;
pub type Pool = r2d2::Pool<ConnectionManager<Connection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Builds the connection pool for the given database path/URL.
///
/// Pool construction failure is a fatal startup error.
pub fn init_db_pool(url: &str) -> Pool {
    log::info!("Initialising database connection pool");
    let manager = ConnectionManager::<Connection>::new(url);
    r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create database connection pool")
}

pub fn run_migration(
    conn: &mut Connection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}
