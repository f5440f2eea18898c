// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the ShareIt booking backend.
//!
//! Users, items and bookings live in `SQLite`, accessed through Diesel.
//! Booking operations run through [`Persistence::transaction`], which hands a
//! [`SqliteStore`] implementing the core storage ports to a closure and
//! commits only if the closure succeeds.
//!
//! ## Databases
//!
//! - In-memory (`new_in_memory`): one uniquely named shared-cache database per
//!   call, used by tests and by the server when no file is given
//! - File (`new_with_file`): WAL journal mode
//!
//! Both run the embedded migrations and refuse to start unless foreign keys
//! are enforced.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::{Connection, SqliteConnection};
use shareit::CoreError;
use shareit_domain::{Item, ItemId, Page, User, UserId};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use store::SqliteStore;

/// Sequence for naming in-memory databases, one per `new_in_memory` call.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Failure inside [`Persistence::transaction`].
///
/// Diesel requires the closure error to absorb its own errors; this keeps the
/// caller's `CoreError` intact through the rollback.
enum TransactionError {
    Core(CoreError),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

/// Persistence adapter owning a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:shareit_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a database file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not valid UTF-8 or the database cannot
    /// be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is still enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Runs `operation` inside one database transaction.
    ///
    /// The transaction commits if `operation` returns `Ok` and rolls back
    /// otherwise. Errors from the transaction itself surface as
    /// `CoreError::Internal`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `operation`, or an internal error if the
    /// transaction cannot begin or commit.
    pub fn transaction<T, F>(&mut self, operation: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut SqliteStore<'_>) -> Result<T, CoreError>,
    {
        self.conn
            .transaction::<T, TransactionError, _>(|conn| {
                let mut store = SqliteStore::new(conn);
                operation(&mut store).map_err(TransactionError::Core)
            })
            .map_err(|err| match err {
                TransactionError::Core(core) => core,
                TransactionError::Database(db) => PersistenceError::from(db).into(),
            })
    }

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the email is taken.
    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User, PersistenceError> {
        mutations::directory::create_user(&mut self.conn, name, email)
    }

    /// Lists an item for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the owner is not registered.
    pub fn create_item(
        &mut self,
        owner_id: UserId,
        name: &str,
        description: &str,
        available: bool,
    ) -> Result<Item, PersistenceError> {
        mutations::directory::create_item(&mut self.conn, owner_id, name, description, available)
    }

    /// Looks up a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, PersistenceError> {
        queries::directory::find_user(&mut self.conn, user_id)
    }

    /// Lists every registered user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(&mut self) -> Result<Vec<User>, PersistenceError> {
        queries::directory::list_users(&mut self.conn)
    }

    /// Replaces a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the user does not exist, or
    /// `PersistenceError::UniqueViolation` if another user has the email.
    pub fn update_user(
        &mut self,
        user_id: UserId,
        name: &str,
        email: &str,
    ) -> Result<User, PersistenceError> {
        mutations::directory::update_user(&mut self.conn, user_id, name, email)
    }

    /// Removes a user that no item or booking references.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the user does not exist, or
    /// `PersistenceError::ForeignKeyViolation` if the user is still referenced.
    pub fn delete_user(&mut self, user_id: UserId) -> Result<(), PersistenceError> {
        mutations::directory::delete_user(&mut self.conn, user_id)
    }

    /// Looks up an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_item(&mut self, item_id: ItemId) -> Result<Option<Item>, PersistenceError> {
        queries::directory::find_item(&mut self.conn, item_id)
    }

    /// Lists one page of the items listed by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_items_by_owner(
        &mut self,
        owner_id: UserId,
        page: Page,
    ) -> Result<Vec<Item>, PersistenceError> {
        queries::directory::list_items_by_owner(&mut self.conn, owner_id, page)
    }

    /// Replaces an item's name, description and availability.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the item does not exist.
    pub fn update_item(
        &mut self,
        item_id: ItemId,
        name: &str,
        description: &str,
        available: bool,
    ) -> Result<Item, PersistenceError> {
        mutations::directory::update_item(&mut self.conn, item_id, name, description, available)
    }
}
