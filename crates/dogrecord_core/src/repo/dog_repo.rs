//! `dogs` table operations implemented on `DogRecord`.
//!
//! # Responsibility
//! - Create/drop the `dogs` table.
//! - Insert, update and look up dog rows through a caller-owned connection.
//!
//! # Invariants
//! - Every mutating call auto-commits, except `find_or_create_by`, which
//!   runs its read and write inside one immediate transaction.
//! - Inserted ids come back from the insert itself (`RETURNING id`).
//! - Updating a row that does not exist is a silent no-op.

use crate::db::DbResult;
use crate::model::dog::{DogId, DogRecord, DogRow};
use log::{debug, warn};
use rusqlite::{params, Connection, Params, Row, TransactionBehavior};

const DOGS_TABLE: &str = "dogs";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS dogs (
    id INTEGER PRIMARY KEY,
    name TEXT,
    breed TEXT
);";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS dogs;";

const DOG_SELECT_SQL: &str = "SELECT id, name, breed FROM dogs";

impl DogRecord {
    /// Creates the `dogs` table when absent. Safe to call repeatedly.
    pub fn create_table(conn: &Connection) -> DbResult<()> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        debug!("event=table_create module=repo status=ok table={DOGS_TABLE}");
        Ok(())
    }

    /// Drops the `dogs` table and all of its rows when present.
    pub fn drop_table(conn: &Connection) -> DbResult<()> {
        conn.execute_batch(DROP_TABLE_SQL)?;
        debug!("event=table_drop module=repo status=ok table={DOGS_TABLE}");
        Ok(())
    }

    /// Inserts an unsaved record or updates a saved one.
    ///
    /// On insert the storage-generated id is assigned to `self`.
    /// Returns `self` so calls can be chained.
    pub fn save(&mut self, conn: &Connection) -> DbResult<&mut Self> {
        if self.id().is_some() {
            self.update(conn)?;
            return Ok(self);
        }

        let id = conn.query_row(
            "INSERT INTO dogs (name, breed) VALUES (?1, ?2) RETURNING id;",
            params![self.name, self.breed],
            |row| row.get::<_, DogId>(0),
        )?;
        self.assign_id(id);
        debug!("event=dog_insert module=repo status=ok id={id}");
        Ok(self)
    }

    /// Writes `name` and `breed` to the row with this record's id.
    ///
    /// Zero affected rows, including an unsaved record, is not an error.
    pub fn update(&self, conn: &Connection) -> DbResult<()> {
        let Some(id) = self.id() else {
            warn!("event=dog_update module=repo status=skipped reason=unsaved_record");
            return Ok(());
        };

        let changed = conn.execute(
            "UPDATE dogs SET name = ?1, breed = ?2 WHERE id = ?3;",
            params![self.name, self.breed, id],
        )?;

        if changed == 0 {
            warn!("event=dog_update module=repo status=noop id={id} rows=0");
        } else {
            debug!("event=dog_update module=repo status=ok id={id} rows={changed}");
        }
        Ok(())
    }

    /// Builds and inserts a new record.
    pub fn create(conn: &Connection, name: &str, breed: &str) -> DbResult<Self> {
        let mut dog = Self::new(name, breed);
        dog.save(conn)?;
        Ok(dog)
    }

    /// Returns every stored dog in the table's natural scan order.
    pub fn get_all(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("{DOG_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut dogs = Vec::new();

        while let Some(row) = rows.next()? {
            dogs.push(Self::new_from_db(read_dog_row(row)?));
        }

        Ok(dogs)
    }

    /// Returns one dog with exactly this name, if any.
    ///
    /// Which row wins among duplicates is left to storage.
    pub fn find_by_name(conn: &Connection, name: &str) -> DbResult<Option<Self>> {
        find_one(
            conn,
            &format!("{DOG_SELECT_SQL} WHERE name = ?1 LIMIT 1;"),
            [name],
        )
    }

    /// Returns the dog with this id, if any.
    pub fn find_by_id(conn: &Connection, id: DogId) -> DbResult<Option<Self>> {
        find_one(
            conn,
            &format!("{DOG_SELECT_SQL} WHERE id = ?1 LIMIT 1;"),
            [id],
        )
    }

    /// Returns the dog matching both `name` and `breed`, inserting it first
    /// when no such row exists.
    ///
    /// The lookup and insert share one `IMMEDIATE` transaction, so writers
    /// on other connections cannot slip a duplicate in between.
    pub fn find_or_create_by(conn: &mut Connection, name: &str, breed: &str) -> DbResult<Self> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = find_one(
            &tx,
            &format!("{DOG_SELECT_SQL} WHERE name = ?1 AND breed = ?2 LIMIT 1;"),
            params![name, breed],
        )?;
        let dog = match existing {
            Some(dog) => dog,
            None => Self::create(&tx, name, breed)?,
        };

        tx.commit()?;
        Ok(dog)
    }
}

fn find_one<P: Params>(conn: &Connection, sql: &str, params: P) -> DbResult<Option<DogRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    if let Some(row) = rows.next()? {
        return Ok(Some(DogRecord::new_from_db(read_dog_row(row)?)));
    }

    Ok(None)
}

/// NULL `name`/`breed` columns map to `None`.
fn read_dog_row(row: &Row<'_>) -> rusqlite::Result<DogRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}
