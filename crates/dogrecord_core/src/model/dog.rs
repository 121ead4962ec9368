//! Dog record model.
//!
//! # Responsibility
//! - Hold the `id`/`name`/`breed` fields of one dog.
//! - Map positional storage rows into records.
//!
//! # Invariants
//! - `id` is private; only constructors and the insert path assign it.
//! - Construction performs no I/O and no validation.
//! - `name`/`breed` mirror nullable `TEXT` columns; `None` is SQL NULL.

use serde::{Deserialize, Serialize};

/// Storage-assigned primary key of a dog row.
pub type DogId = i64;

/// Positional row shape `(id, name, breed)` as stored in `dogs`.
pub type DogRow = (DogId, Option<String>, Option<String>);

/// In-memory copy of one dog.
///
/// Changes to `name`/`breed` reach storage only through `save`/`update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    id: Option<DogId>,
    pub name: Option<String>,
    pub breed: Option<String>,
}

impl DogRecord {
    /// Creates an unsaved record.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            breed: Some(breed.into()),
        }
    }

    /// Creates a record that already has a storage id.
    pub fn with_id(id: DogId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            breed: Some(breed.into()),
        }
    }

    /// Maps a positional `(id, name, breed)` row into a record.
    pub fn new_from_db(row: DogRow) -> Self {
        let (id, name, breed) = row;
        Self {
            id: Some(id),
            name,
            breed,
        }
    }

    /// Storage id, `None` until the first insert.
    pub fn id(&self) -> Option<DogId> {
        self.id
    }

    /// Returns whether this record has been written to storage.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Records the id returned by the first insert. Later calls are ignored.
    pub(crate) fn assign_id(&mut self, id: DogId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }
}

impl From<DogRow> for DogRecord {
    fn from(row: DogRow) -> Self {
        Self::new_from_db(row)
    }
}

#[cfg(test)]
mod tests {
    use super::DogRecord;

    #[test]
    fn assign_id_only_sets_id_once() {
        let mut dog = DogRecord::new("Rex", "Lab");
        dog.assign_id(3);
        dog.assign_id(9);
        assert_eq!(dog.id(), Some(3));
    }

    #[test]
    fn with_id_record_keeps_its_id() {
        let mut dog = DogRecord::with_id(4, "Rex", "Lab");
        dog.assign_id(12);
        assert_eq!(dog.id(), Some(4));
    }
}
