// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Raw SQL is limited to PRAGMA statements and `last_insert_rowid()`, neither
//! of which Diesel exposes through its DSL.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModePragma {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Returns the rowid assigned by the most recent insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Fails unless `PRAGMA foreign_keys` reports enforcement as active.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` if enforcement
/// is off, or a database error if the PRAGMA cannot be read.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeysPragma>(conn)?
        .foreign_keys;

    if foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Applies every pending embedded migration.
///
/// # Errors
///
/// Returns `PersistenceError::MigrationFailed` if any migration fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    info!(count = applied.len(), "Applied SQLite migrations");
    Ok(())
}

/// Opens a connection, turns on foreign keys and migrates the schema.
///
/// # Arguments
///
/// * `database_url` - A file path or an `SQLite` URI such as `file:x?mode=memory`
///
/// # Errors
///
/// Returns an error if the connection, the PRAGMA or a migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Initializing SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    // Per-connection setting; must precede any statement touching the schema.
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn)?;

    Ok(conn)
}

/// Switches a file-backed database to write-ahead logging.
///
/// # Errors
///
/// Returns an error if the PRAGMA fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let mode: String = diesel::sql_query("PRAGMA journal_mode = WAL")
        .get_result::<JournalModePragma>(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?
        .journal_mode;
    debug!(journal_mode = %mode, "SQLite journal mode set");
    Ok(())
}
