//! Visit database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{format_date, parse_date, Database, DbError, DbResult};
use crate::models::{Visit, VisitStatus};

impl Database {
    /// Insert a new visit, writing the assigned ID back into `visit`.
    pub fn insert_visit(&self, visit: &mut Visit) -> DbResult<i64> {
        let pet_id = visit
            .pet_id
            .ok_or_else(|| DbError::Constraint("visit has no pet".into()))?;

        self.conn.execute(
            r#"
            INSERT INTO visits (pet_id, description, visit_date, status, vet_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                pet_id,
                visit.description,
                format_date(&visit.date),
                visit.status.as_str(),
                visit.vet.as_ref().map(|v| v.id),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        visit.id = Some(id);
        Ok(id)
    }

    /// Update an existing visit. The owning pet is never changed.
    pub fn update_visit(&self, visit: &Visit) -> DbResult<bool> {
        let id = visit
            .id
            .ok_or_else(|| DbError::Constraint("cannot update an unsaved visit".into()))?;

        let rows_affected = self.conn.execute(
            r#"
            UPDATE visits SET
                description = ?2,
                visit_date = ?3,
                status = ?4,
                vet_id = ?5
            WHERE id = ?1
            "#,
            params![
                id,
                visit.description,
                format_date(&visit.date),
                visit.status.as_str(),
                visit.vet.as_ref().map(|v| v.id),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Insert a new visit or update a persisted one.
    pub fn save_visit(&self, visit: &mut Visit) -> DbResult<()> {
        if visit.is_new() {
            self.insert_visit(visit)?;
        } else if !self.update_visit(visit)? {
            return Err(DbError::NotFound(format!(
                "visit {}",
                visit.id.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Get a visit by ID.
    pub fn get_visit(&self, visit_id: i64) -> DbResult<Option<Visit>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT id, pet_id, description, visit_date, status, vet_id
                FROM visits
                WHERE id = ?
                "#,
                [visit_id],
                visit_row,
            )
            .optional()?;

        row.map(|row| self.hydrate_visit(row)).transpose()
    }

    /// List a pet's visits in insertion order.
    pub fn list_visits_for_pet(&self, pet_id: i64) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, pet_id, description, visit_date, status, vet_id
            FROM visits
            WHERE pet_id = ?
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([pet_id], visit_row)?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(self.hydrate_visit(row?)?);
        }
        Ok(visits)
    }

    fn hydrate_visit(&self, row: VisitRow) -> DbResult<Visit> {
        let status = VisitStatus::parse(&row.status)
            .ok_or_else(|| DbError::InvalidRow(format!("unknown visit status: {}", row.status)))?;
        let vet = match row.vet_id {
            Some(vet_id) => Some(
                self.get_vet(vet_id)?
                    .ok_or_else(|| DbError::InvalidRow(format!("dangling vet {}", vet_id)))?,
            ),
            None => None,
        };

        Ok(Visit {
            id: Some(row.id),
            pet_id: Some(row.pet_id),
            description: row.description,
            date: parse_date(&row.visit_date)?,
            status,
            vet,
        })
    }
}

/// Internal row representation for visits.
struct VisitRow {
    id: i64,
    pet_id: i64,
    description: String,
    visit_date: String,
    status: String,
    vet_id: Option<i64>,
}

fn visit_row(row: &Row<'_>) -> rusqlite::Result<VisitRow> {
    Ok(VisitRow {
        id: row.get(0)?,
        pet_id: row.get(1)?,
        description: row.get(2)?,
        visit_date: row.get(3)?,
        status: row.get(4)?,
        vet_id: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Owner, Pet, Vet};
    use chrono::NaiveDate;

    struct Fixture {
        db: Database,
        pet: Pet,
        vet: Vet,
    }

    fn setup_db() -> Fixture {
        let db = Database::open_in_memory().unwrap();
        let mut owner = Owner {
            id: 0,
            first_name: "Jean".into(),
            last_name: "Coleman".into(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
        };
        db.insert_owner(&mut owner).unwrap();
        let mut pet = Pet::new(0, "Samantha".into(), owner.id);
        db.insert_pet(&mut pet).unwrap();
        let mut vet = Vet::new(0, "James".into(), "Carter".into());
        db.insert_vet(&mut vet).unwrap();
        Fixture { db, pet, vet }
    }

    fn visit_for(pet: &Pet, description: &str) -> Visit {
        let mut visit = pet.new_visit();
        visit.description = description.into();
        visit.date = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        visit
    }

    #[test]
    fn test_insert_and_get() {
        let f = setup_db();

        let mut visit = visit_for(&f.pet, "rabies shot");
        visit.vet = Some(f.vet.clone());
        let id = f.db.insert_visit(&mut visit).unwrap();
        assert_eq!(visit.id, Some(id));

        let retrieved = f.db.get_visit(id).unwrap().unwrap();
        assert_eq!(retrieved, visit);
    }

    #[test]
    fn test_insert_without_pet_fails() {
        let f = setup_db();
        let mut visit = Visit::new();
        visit.description = "stray".into();
        assert!(matches!(
            f.db.insert_visit(&mut visit),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_update_visit() {
        let f = setup_db();

        let mut visit = visit_for(&f.pet, "rabies shot");
        f.db.insert_visit(&mut visit).unwrap();

        visit.description = "rabies booster".into();
        visit.vet = Some(f.vet.clone());
        visit.cancel();
        assert!(f.db.update_visit(&visit).unwrap());

        let retrieved = f.db.get_visit(visit.id.unwrap()).unwrap().unwrap();
        assert_eq!(retrieved.description, "rabies booster");
        assert_eq!(retrieved.status, VisitStatus::Cancelled);
        assert_eq!(retrieved.vet, Some(f.vet));
    }

    #[test]
    fn test_save_inserts_then_updates() {
        let f = setup_db();

        let mut visit = visit_for(&f.pet, "neutered");
        f.db.save_visit(&mut visit).unwrap();
        let id = visit.id.unwrap();

        visit.description = "neutered, stitches out".into();
        f.db.save_visit(&mut visit).unwrap();
        assert_eq!(visit.id, Some(id));

        let visits = f.db.list_visits_for_pet(f.pet.id).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].description, "neutered, stitches out");
    }

    #[test]
    fn test_save_missing_id_is_not_found() {
        let f = setup_db();

        let mut visit = visit_for(&f.pet, "spayed");
        visit.id = Some(99);
        assert!(matches!(
            f.db.save_visit(&mut visit),
            Err(DbError::NotFound(_))
        ));
        assert!(f.db.list_visits_for_pet(f.pet.id).unwrap().is_empty());
    }

    #[test]
    fn test_list_in_insertion_order() {
        let f = setup_db();

        let mut later = visit_for(&f.pet, "spayed");
        later.date = NaiveDate::from_ymd_opt(2013, 1, 4).unwrap();
        let mut earlier = visit_for(&f.pet, "rabies shot");
        earlier.date = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        f.db.insert_visit(&mut later).unwrap();
        f.db.insert_visit(&mut earlier).unwrap();

        let descriptions: Vec<String> = f
            .db
            .list_visits_for_pet(f.pet.id)
            .unwrap()
            .into_iter()
            .map(|v| v.description)
            .collect();
        assert_eq!(descriptions, vec!["spayed", "rabies shot"]);
    }

    #[test]
    fn test_get_missing() {
        let f = setup_db();
        assert!(f.db.get_visit(7).unwrap().is_none());
    }
}
