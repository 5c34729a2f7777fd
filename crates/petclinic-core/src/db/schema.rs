//! SQLite schema definition.

/// Complete database schema for the pet clinic.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Vets
-- ============================================================================

CREATE TABLE IF NOT EXISTS vets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,                    -- display name on visit forms
    last_name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_vets_first_name ON vets(first_name);

CREATE TABLE IF NOT EXISTS specialties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS vet_specialties (
    vet_id INTEGER NOT NULL REFERENCES vets(id),
    specialty_id INTEGER NOT NULL REFERENCES specialties(id),
    PRIMARY KEY (vet_id, specialty_id)
);

-- ============================================================================
-- Owners and Pets
-- ============================================================================

CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    city TEXT NOT NULL DEFAULT '',
    telephone TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name);

CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birth_date TEXT,                             -- YYYY-MM-DD
    pet_type TEXT,
    owner_id INTEGER NOT NULL REFERENCES owners(id)
);

CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id);

-- ============================================================================
-- Visits (never deleted, only status-transitioned)
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL REFERENCES pets(id),
    description TEXT NOT NULL CHECK (length(trim(description)) > 0),
    visit_date TEXT NOT NULL,                    -- YYYY-MM-DD
    status TEXT NOT NULL DEFAULT 'scheduled'
        CHECK (status IN ('scheduled', 'cancelled', 'completed')),
    vet_id INTEGER REFERENCES vets(id)
);

CREATE INDEX IF NOT EXISTS idx_visits_pet ON visits(pet_id);
"#;
