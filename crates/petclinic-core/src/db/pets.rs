//! Pet database operations.

use rusqlite::{params, OptionalExtension};

use super::{format_date, parse_date, Database, DbError, DbResult};
use crate::models::Pet;

impl Database {
    /// Insert a new pet, writing the assigned ID back into `pet`.
    ///
    /// The pet's visit history is not written; visits are saved one by one.
    pub fn insert_pet(&self, pet: &mut Pet) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO pets (name, birth_date, pet_type, owner_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                pet.name,
                pet.birth_date.as_ref().map(format_date),
                pet.pet_type,
                pet.owner_id,
            ],
        )?;
        pet.id = self.conn.last_insert_rowid();
        Ok(pet.id)
    }

    /// Get a pet by ID. The returned pet has an empty visit history.
    pub fn get_pet(&self, pet_id: i64) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, birth_date, pet_type, owner_id
                FROM pets
                WHERE id = ?
                "#,
                [pet_id],
                |row| {
                    Ok(PetRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        birth_date: row.get(2)?,
                        pet_type: row.get(3)?,
                        owner_id: row.get(4)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List the pets of one owner.
    pub fn list_pets_for_owner(&self, owner_id: i64) -> DbResult<Vec<Pet>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, birth_date, pet_type, owner_id
            FROM pets
            WHERE owner_id = ?
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([owner_id], |row| {
            Ok(PetRow {
                id: row.get(0)?,
                name: row.get(1)?,
                birth_date: row.get(2)?,
                pet_type: row.get(3)?,
                owner_id: row.get(4)?,
            })
        })?;

        let mut pets = Vec::new();
        for row in rows {
            pets.push(row?.try_into()?);
        }
        Ok(pets)
    }
}

/// Internal row representation for pets.
struct PetRow {
    id: i64,
    name: String,
    birth_date: Option<String>,
    pet_type: Option<String>,
    owner_id: i64,
}

impl TryFrom<PetRow> for Pet {
    type Error = DbError;

    fn try_from(row: PetRow) -> Result<Self, Self::Error> {
        let birth_date = row.birth_date.as_deref().map(parse_date).transpose()?;

        Ok(Pet {
            id: row.id,
            name: row.name,
            birth_date,
            pet_type: row.pet_type,
            owner_id: row.owner_id,
            visits: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;
    use chrono::NaiveDate;

    fn setup_db() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let mut owner = Owner {
            id: 0,
            first_name: "Jean".into(),
            last_name: "Coleman".into(),
            address: "105 N. Lake St.".into(),
            city: "Monona".into(),
            telephone: "6085552654".into(),
        };
        let owner_id = db.insert_owner(&mut owner).unwrap();
        (db, owner_id)
    }

    #[test]
    fn test_insert_and_get() {
        let (db, owner_id) = setup_db();

        let mut pet = Pet::new(0, "Samantha".into(), owner_id);
        pet.pet_type = Some("cat".into());
        pet.birth_date = NaiveDate::from_ymd_opt(2012, 9, 4);
        let id = db.insert_pet(&mut pet).unwrap();

        let retrieved = db.get_pet(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Samantha");
        assert_eq!(retrieved.pet_type, Some("cat".into()));
        assert_eq!(retrieved.birth_date, NaiveDate::from_ymd_opt(2012, 9, 4));
        assert_eq!(retrieved.owner_id, owner_id);
        assert!(retrieved.visits.is_empty());
    }

    #[test]
    fn test_get_missing() {
        let (db, _) = setup_db();
        assert!(db.get_pet(5).unwrap().is_none());
    }

    #[test]
    fn test_list_for_owner() {
        let (db, owner_id) = setup_db();
        db.insert_pet(&mut Pet::new(0, "Max".into(), owner_id)).unwrap();
        db.insert_pet(&mut Pet::new(0, "Samantha".into(), owner_id)).unwrap();

        let pets = db.list_pets_for_owner(owner_id).unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].name, "Max");
        assert!(db.list_pets_for_owner(owner_id + 1).unwrap().is_empty());
    }

    #[test]
    fn test_bad_stored_date() {
        let (db, owner_id) = setup_db();
        db.conn()
            .execute(
                "INSERT INTO pets (name, birth_date, owner_id) VALUES ('Iggy', 'last tuesday', ?)",
                [owner_id],
            )
            .unwrap();
        let id = db.conn().last_insert_rowid();

        assert!(matches!(db.get_pet(id), Err(DbError::InvalidRow(_))));
    }
}
