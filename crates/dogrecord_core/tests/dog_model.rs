use dogrecord_core::{DogRecord, DogRow};

#[test]
fn new_record_is_unsaved() {
    let dog = DogRecord::new("Rex", "Lab");

    assert_eq!(dog.id(), None);
    assert!(!dog.is_persisted());
    assert_eq!(dog.name.as_deref(), Some("Rex"));
    assert_eq!(dog.breed.as_deref(), Some("Lab"));
}

#[test]
fn new_from_db_maps_positional_row() {
    let dog = DogRecord::new_from_db((7, Some("Rex".to_string()), Some("Lab".to_string())));

    assert_eq!(dog.id(), Some(7));
    assert_eq!(dog.name.as_deref(), Some("Rex"));
    assert_eq!(dog.breed.as_deref(), Some("Lab"));
    assert_eq!(dog, DogRecord::with_id(7, "Rex", "Lab"));
}

#[test]
fn from_row_matches_new_from_db() {
    let row: DogRow = (3, Some("Fido".to_string()), Some("Beagle".to_string()));
    assert_eq!(DogRecord::from(row.clone()), DogRecord::new_from_db(row));
}

#[test]
fn construction_does_not_validate() {
    let dog = DogRecord::new("", "");
    assert_eq!(dog.name.as_deref(), Some(""));
    assert_eq!(dog.breed.as_deref(), Some(""));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let dog = DogRecord::with_id(7, "Rex", "Lab");

    let json = serde_json::to_value(&dog).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Rex");
    assert_eq!(json["breed"], "Lab");

    let decoded: DogRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, dog);

    let unsaved = serde_json::to_value(DogRecord::new("Rex", "Lab")).unwrap();
    assert!(unsaved["id"].is_null());
}

#[test]
fn new_from_db_keeps_null_fields() {
    let dog = DogRecord::new_from_db((5, None, Some("Mutt".to_string())));

    assert_eq!(dog.id(), Some(5));
    assert_eq!(dog.name, None);
    assert_eq!(dog.breed.as_deref(), Some("Mutt"));

    let json = serde_json::to_value(&dog).unwrap();
    assert!(json["name"].is_null());
}
