//! SQLite persistence.
//!
//! Every operation opens its own connection, runs inside one transaction and
//! drops the connection before returning. A transaction that is dropped
//! without `commit` rolls back, so an early `?` never leaves half a change
//! behind. Writes take the database lock up front (`BEGIN IMMEDIATE`), which
//! makes "check for a duplicate, then insert" atomic against other writers.
//!
//! Calls block; async callers run them on a blocking thread.

mod flavors;
mod ingredients;
mod suggestions;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use thiserror::Error;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS seasonal_flavors (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      flavor TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS ingredient_inventory (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      ingredient TEXT NOT NULL UNIQUE,
      stock INTEGER NOT NULL CHECK(stock >= 0)
    );

    CREATE TABLE IF NOT EXISTS customer_suggestions (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL,
      flavor TEXT NOT NULL,
      allergy_concerns TEXT
    );
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Another row already uses the name.
    #[error("name already taken")]
    Duplicate,

    /// No row has the requested id.
    #[error("unknown id")]
    UnknownId,
}

/// Handle to the shop database. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and bootstraps the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self { path: Arc::new(path) };
        store.connect()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    /// Cheapest possible round trip, used by the readiness check.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.connect()?.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(self.path.as_path())?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Runs `f` in a write transaction and commits if it returns `Ok`.
    fn write<T>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Runs `f` in a read transaction.
    fn read<T>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
        f(&tx)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Store;
    use tempfile::TempDir;

    /// A store in a fresh temp directory. Keep the `TempDir` alive for the
    /// duration of the test.
    pub(crate) fn temp_store() -> (TempDir, Store) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = Store::open(dir.path().join("scoop.db")).expect("open store");
        (dir, store)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::temp_store;
    use super::*;

    #[test]
    fn open_is_idempotent() {
        let (dir, store) = temp_store();
        store.flavor_add("Mint").expect("add");

        let reopened = Store::open(dir.path().join("scoop.db")).expect("reopen");
        assert_eq!(reopened.flavor_list().expect("list").len(), 1);
    }

    #[test]
    fn open_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("deeper").join("scoop.db");
        let store = Store::open(&path).expect("open store");
        assert!(path.exists());
        store.ping().expect("ping");
    }

    #[test]
    fn stock_check_constraint_backs_up_validation() {
        let (_dir, store) = temp_store();
        let err = store
            .write(|tx| {
                tx.execute(
                    "INSERT INTO ingredient_inventory (ingredient, stock) VALUES ('Milk', -1)",
                    [],
                )?;
                Ok(())
            })
            .expect_err("negative stock must violate CHECK");
        assert!(matches!(err, StoreError::Sql(_)));
        assert!(store.ingredient_list().expect("list").is_empty());
    }
}
