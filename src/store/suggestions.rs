use rusqlite::params;

use super::{Store, StoreError};
use crate::model::{Suggestion, SuggestionInput};

impl Store {
    /// Suggestions are never deduplicated; the same idea may arrive twice.
    pub fn suggestion_add(&self, input: &SuggestionInput) -> Result<Suggestion, StoreError> {
        self.write(|tx| {
            tx.execute(
                "INSERT INTO customer_suggestions (name, flavor, allergy_concerns) VALUES (?1, ?2, ?3)",
                params![input.customer_name, input.suggested_flavor, input.allergy_concerns],
            )?;
            Ok(Suggestion {
                id: tx.last_insert_rowid(),
                customer_name: input.customer_name.clone(),
                suggested_flavor: input.suggested_flavor.clone(),
                allergy_concerns: input.allergy_concerns.clone(),
            })
        })
    }

    pub fn suggestion_list(&self) -> Result<Vec<Suggestion>, StoreError> {
        self.read(|tx| {
            let mut stmt = tx.prepare(
                "SELECT id, name, flavor, allergy_concerns FROM customer_suggestions ORDER BY id",
            )?;
            let suggestions = stmt
                .query_map([], |row| {
                    Ok(Suggestion {
                        id: row.get(0)?,
                        customer_name: row.get(1)?,
                        suggested_flavor: row.get(2)?,
                        allergy_concerns: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(suggestions)
        })
    }

    /// Reports [`StoreError::UnknownId`] like the other entities do.
    pub fn suggestion_delete(&self, id: i64) -> Result<(), StoreError> {
        self.write(|tx| {
            match tx.execute("DELETE FROM customer_suggestions WHERE id = ?1", params![id])? {
                0 => Err(StoreError::UnknownId),
                _ => Ok(()),
            }
        })
    }
}
