use rusqlite::{OptionalExtension, Row, Transaction, params};

use super::{Store, StoreError};
use crate::model::{Ingredient, IngredientInput};

fn ingredient_from_row(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
    Ok(Ingredient { id: row.get(0)?, name: row.get(1)?, stock: row.get(2)? })
}

impl Store {
    pub fn ingredient_add(&self, input: &IngredientInput) -> Result<Ingredient, StoreError> {
        self.write(|tx| {
            if ingredient_name_taken_tx(tx, &input.name, None)? {
                return Err(StoreError::Duplicate);
            }
            tx.execute(
                "INSERT INTO ingredient_inventory (ingredient, stock) VALUES (?1, ?2)",
                params![input.name, input.stock],
            )?;
            Ok(Ingredient { id: tx.last_insert_rowid(), name: input.name.clone(), stock: input.stock })
        })
    }

    pub fn ingredient_list(&self) -> Result<Vec<Ingredient>, StoreError> {
        self.read(|tx| {
            let mut stmt = tx.prepare("SELECT id, ingredient, stock FROM ingredient_inventory ORDER BY id")?;
            let ingredients = stmt
                .query_map([], ingredient_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ingredients)
        })
    }

    pub fn ingredient_get(&self, id: i64) -> Result<Option<Ingredient>, StoreError> {
        self.read(|tx| {
            let ingredient = tx
                .query_row(
                    "SELECT id, ingredient, stock FROM ingredient_inventory WHERE id = ?1",
                    params![id],
                    ingredient_from_row,
                )
                .optional()?;
            Ok(ingredient)
        })
    }

    /// Replaces name and stock of ingredient `id`. The duplicate check skips
    /// the row itself, so re-stocking under the same name works.
    pub fn ingredient_update(&self, id: i64, input: &IngredientInput) -> Result<Ingredient, StoreError> {
        self.write(|tx| {
            let exists = tx
                .query_row("SELECT 1 FROM ingredient_inventory WHERE id = ?1", params![id], |_| Ok(()))
                .optional()?
                .is_some();
            if !exists {
                return Err(StoreError::UnknownId);
            }
            if ingredient_name_taken_tx(tx, &input.name, Some(id))? {
                return Err(StoreError::Duplicate);
            }
            tx.execute(
                "UPDATE ingredient_inventory SET ingredient = ?1, stock = ?2 WHERE id = ?3",
                params![input.name, input.stock, id],
            )?;
            Ok(Ingredient { id, name: input.name.clone(), stock: input.stock })
        })
    }

    pub fn ingredient_delete(&self, id: i64) -> Result<(), StoreError> {
        self.write(|tx| {
            match tx.execute("DELETE FROM ingredient_inventory WHERE id = ?1", params![id])? {
                0 => Err(StoreError::UnknownId),
                _ => Ok(()),
            }
        })
    }
}

fn ingredient_name_taken_tx(tx: &Transaction<'_>, name: &str, except: Option<i64>) -> Result<bool, StoreError> {
    let found = tx
        .query_row(
            "SELECT 1 FROM ingredient_inventory WHERE ingredient = ?1 AND (?2 IS NULL OR id != ?2)",
            params![name, except],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}
