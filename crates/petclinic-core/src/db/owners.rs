//! Owner database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Owner;

fn owner_from_row(row: &Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        telephone: row.get(5)?,
    })
}

impl Database {
    /// Insert a new owner, writing the assigned ID back into `owner`.
    pub fn insert_owner(&self, owner: &mut Owner) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO owners (first_name, last_name, address, city, telephone)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                owner.first_name,
                owner.last_name,
                owner.address,
                owner.city,
                owner.telephone,
            ],
        )?;
        owner.id = self.conn.last_insert_rowid();
        Ok(owner.id)
    }

    /// Get an owner by ID.
    pub fn get_owner(&self, owner_id: i64) -> DbResult<Option<Owner>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, address, city, telephone
                FROM owners
                WHERE id = ?
                "#,
                [owner_id],
                owner_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all owners.
    pub fn list_owners(&self) -> DbResult<Vec<Owner>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, address, city, telephone
            FROM owners
            ORDER BY last_name, first_name
            "#,
        )?;

        let rows = stmt.query_map([], owner_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
