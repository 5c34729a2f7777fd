//! Vet directory database operations.

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Vet;

impl Database {
    /// Insert a new vet and its specialties, writing the assigned ID back into `vet`.
    pub fn insert_vet(&self, vet: &mut Vet) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO vets (first_name, last_name) VALUES (?1, ?2)",
            params![vet.first_name, vet.last_name],
        )?;
        vet.id = self.conn.last_insert_rowid();

        for specialty in &vet.specialties {
            self.conn.execute(
                "INSERT OR IGNORE INTO specialties (name) VALUES (?)",
                [specialty],
            )?;
            self.conn.execute(
                r#"
                INSERT OR IGNORE INTO vet_specialties (vet_id, specialty_id)
                SELECT ?1, id FROM specialties WHERE name = ?2
                "#,
                params![vet.id, specialty],
            )?;
        }

        Ok(vet.id)
    }

    /// Get a vet by ID.
    pub fn get_vet(&self, vet_id: i64) -> DbResult<Option<Vet>> {
        let vet = self
            .conn
            .query_row(
                "SELECT id, first_name, last_name FROM vets WHERE id = ?",
                [vet_id],
                |row| Ok(Vet::new(row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        match vet {
            Some(mut vet) => {
                vet.specialties = self.specialties_for(vet.id)?;
                Ok(Some(vet))
            }
            None => Ok(None),
        }
    }

    /// List every vet with its specialties, in insertion order.
    pub fn list_vets(&self) -> DbResult<Vec<Vet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name FROM vets ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok(Vet::new(row.get(0)?, row.get(1)?, row.get(2)?)))?;
        let mut vets = rows.collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            r#"
            SELECT vs.vet_id, s.name
            FROM vet_specialties vs
            JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY s.name
            "#,
        )?;
        let mut by_vet: HashMap<i64, Vec<String>> = HashMap::new();
        let pairs = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
        for pair in pairs {
            let (vet_id, name) = pair?;
            by_vet.entry(vet_id).or_default().push(name);
        }

        for vet in &mut vets {
            if let Some(specialties) = by_vet.remove(&vet.id) {
                vet.specialties = specialties;
            }
        }
        Ok(vets)
    }

    fn specialties_for(&self, vet_id: i64) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT s.name
            FROM vet_specialties vs
            JOIN specialties s ON s.id = vs.specialty_id
            WHERE vs.vet_id = ?
            ORDER BY s.name
            "#,
        )?;
        let rows = stmt.query_map([vet_id], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
