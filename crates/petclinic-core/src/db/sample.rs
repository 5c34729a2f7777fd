//! Sample data for demos and local development.

/// Seed rows. `INSERT OR IGNORE` keeps a second load harmless.
pub const SAMPLE_DATA: &str = r#"
INSERT OR IGNORE INTO vets (id, first_name, last_name) VALUES
    (1, 'James', 'Carter'),
    (2, 'Helen', 'Leary'),
    (3, 'Linda', 'Douglas'),
    (4, 'Rafael', 'Ortega'),
    (5, 'Henry', 'Stevens'),
    (6, 'Sharon', 'Jenkins');

INSERT OR IGNORE INTO specialties (id, name) VALUES
    (1, 'radiology'),
    (2, 'surgery'),
    (3, 'dentistry');

INSERT OR IGNORE INTO vet_specialties (vet_id, specialty_id) VALUES
    (2, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (5, 1);

INSERT OR IGNORE INTO owners (id, first_name, last_name, address, city, telephone) VALUES
    (1, 'George', 'Franklin', '110 W. Liberty St.', 'Madison', '6085551023'),
    (2, 'Betty', 'Davis', '638 Cardinal Ave.', 'Sun Prairie', '6085551749'),
    (3, 'Eduardo', 'Rodriquez', '2693 Commerce St.', 'McFarland', '6085558763'),
    (4, 'Harold', 'Davis', '563 Friendly St.', 'Windsor', '6085553198'),
    (5, 'Peter', 'McTavish', '2387 S. Fair Way', 'Madison', '6085552765'),
    (6, 'Jean', 'Coleman', '105 N. Lake St.', 'Monona', '6085552654');

INSERT OR IGNORE INTO pets (id, name, birth_date, pet_type, owner_id) VALUES
    (1, 'Leo', '2010-09-07', 'cat', 1),
    (2, 'Basil', '2012-08-06', 'hamster', 2),
    (3, 'Rosy', '2011-04-17', 'dog', 3),
    (4, 'Jewel', '2010-03-07', 'dog', 3),
    (5, 'Iggy', '2010-11-30', 'lizard', 4),
    (6, 'George', '2010-01-20', 'snake', 5),
    (7, 'Samantha', '2012-09-04', 'cat', 6),
    (8, 'Max', '2012-09-04', 'cat', 6);

INSERT OR IGNORE INTO visits (id, pet_id, description, visit_date, status, vet_id) VALUES
    (1, 7, 'rabies shot', '2013-01-01', 'completed', 1),
    (2, 8, 'rabies shot', '2013-01-02', 'completed', 1),
    (3, 8, 'neutered', '2013-01-03', 'completed', 4),
    (4, 7, 'spayed', '2013-01-04', 'completed', 3);
"#;
