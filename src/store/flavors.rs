use rusqlite::{OptionalExtension, Transaction, params};

use super::{Store, StoreError};
use crate::model::Flavor;

impl Store {
    pub fn flavor_add(&self, name: &str) -> Result<Flavor, StoreError> {
        self.write(|tx| {
            if flavor_name_taken_tx(tx, name, None)? {
                return Err(StoreError::Duplicate);
            }
            tx.execute("INSERT INTO seasonal_flavors (flavor) VALUES (?1)", params![name])?;
            Ok(Flavor { id: tx.last_insert_rowid(), name: name.to_owned() })
        })
    }

    /// All flavors in the order they were added.
    pub fn flavor_list(&self) -> Result<Vec<Flavor>, StoreError> {
        self.read(|tx| {
            let mut stmt = tx.prepare("SELECT id, flavor FROM seasonal_flavors ORDER BY id")?;
            let rows = stmt.query_map([], |row| Ok(Flavor { id: row.get(0)?, name: row.get(1)? }))?;
            Ok(rows.collect::<Result<_, _>>()?)
        })
    }

    pub fn flavor_get(&self, id: i64) -> Result<Option<Flavor>, StoreError> {
        self.read(|tx| {
            let flavor = tx
                .query_row(
                    "SELECT id, flavor FROM seasonal_flavors WHERE id = ?1",
                    params![id],
                    |row| Ok(Flavor { id: row.get(0)?, name: row.get(1)? }),
                )
                .optional()?;
            Ok(flavor)
        })
    }

    /// Renames flavor `id`. Keeping its current name is allowed.
    pub fn flavor_rename(&self, id: i64, name: &str) -> Result<Flavor, StoreError> {
        self.write(|tx| {
            if !flavor_exists_tx(tx, id)? {
                return Err(StoreError::UnknownId);
            }
            if flavor_name_taken_tx(tx, name, Some(id))? {
                return Err(StoreError::Duplicate);
            }
            tx.execute("UPDATE seasonal_flavors SET flavor = ?1 WHERE id = ?2", params![name, id])?;
            Ok(Flavor { id, name: name.to_owned() })
        })
    }

    pub fn flavor_delete(&self, id: i64) -> Result<(), StoreError> {
        self.write(|tx| {
            let deleted = tx.execute("DELETE FROM seasonal_flavors WHERE id = ?1", params![id])?;
            if deleted == 0 {
                return Err(StoreError::UnknownId);
            }
            Ok(())
        })
    }
}

fn flavor_exists_tx(tx: &Transaction<'_>, id: i64) -> Result<bool, StoreError> {
    let found = tx
        .query_row("SELECT 1 FROM seasonal_flavors WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Exact, case-sensitive match, ignoring row `except` when given.
fn flavor_name_taken_tx(tx: &Transaction<'_>, name: &str, except: Option<i64>) -> Result<bool, StoreError> {
    let found = tx
        .query_row(
            "SELECT 1 FROM seasonal_flavors WHERE flavor = ?1 AND (?2 IS NULL OR id != ?2)",
            params![name, except],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use crate::model::Flavor;
    use crate::store::StoreError;
    use crate::store::test_support::temp_store;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_then_list_in_insertion_order() {
        let (_dir, store) = temp_store();
        let mint = store.flavor_add("Mint").expect("add mint");
        let lemon = store.flavor_add("Lemon").expect("add lemon");

        assert_eq!(mint, Flavor { id: 1, name: "Mint".into() });
        assert_eq!(store.flavor_list().expect("list"), vec![mint, lemon]);
    }

    #[test]
    fn duplicate_name_is_rejected_without_a_second_row() {
        let (_dir, store) = temp_store();
        store.flavor_add("Mint").expect("first add");

        assert!(matches!(store.flavor_add("Mint"), Err(StoreError::Duplicate)));
        assert_eq!(store.flavor_list().expect("list").len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let (_dir, store) = temp_store();
        store.flavor_add("Mint").expect("add");
        store.flavor_add("mint").expect("different case is a different flavor");
    }

    #[test]
    fn rename_checks_other_rows_only() {
        let (_dir, store) = temp_store();
        let mint = store.flavor_add("Mint").expect("add");
        store.flavor_add("Lemon").expect("add");

        store.flavor_rename(mint.id, "Mint").expect("own name is fine");
        assert!(matches!(store.flavor_rename(mint.id, "Lemon"), Err(StoreError::Duplicate)));

        let renamed = store.flavor_rename(mint.id, "Peppermint").expect("rename");
        assert_eq!(store.flavor_get(mint.id).expect("get"), Some(renamed));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let (_dir, store) = temp_store();
        assert_eq!(store.flavor_get(7).expect("get"), None);
        assert!(matches!(store.flavor_rename(7, "Mint"), Err(StoreError::UnknownId)));
        assert!(matches!(store.flavor_delete(7), Err(StoreError::UnknownId)));
    }

    #[test]
    fn delete_removes_the_row_once() {
        let (_dir, store) = temp_store();
        let mint = store.flavor_add("Mint").expect("add");

        store.flavor_delete(mint.id).expect("delete");
        assert!(store.flavor_list().expect("list").is_empty());
        assert!(matches!(store.flavor_delete(mint.id), Err(StoreError::UnknownId)));
    }
}
