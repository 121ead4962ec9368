use dogrecord_core::db::{close_db, open_db, open_db_in_memory, open_db_with_config};
use dogrecord_core::{DbConfig, DogRecord};
use rusqlite::Connection;
use std::time::Duration;

#[test]
fn open_does_not_create_dogs_table() {
    let conn = open_db_in_memory().unwrap();
    assert!(!table_exists(&conn, "dogs"));

    DogRecord::create_table(&conn).unwrap();
    assert!(table_exists(&conn, "dogs"));
}

#[test]
fn open_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn rows_survive_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogs.db");

    let conn = open_db(&path).unwrap();
    DogRecord::create_table(&conn).unwrap();
    let id = DogRecord::create(&conn, "Rex", "Lab").unwrap().id().unwrap();
    close_db(conn).unwrap();

    let reopened = open_db(&path).unwrap();
    let loaded = DogRecord::find_by_id(&reopened, id).unwrap().unwrap();
    assert_eq!(loaded.name.as_deref(), Some("Rex"));
    close_db(reopened).unwrap();
}

#[test]
fn open_with_config_honors_file_location_and_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.db");
    let config = DbConfig {
        busy_timeout: Duration::from_millis(250),
        ..DbConfig::file(&path)
    };

    let conn = open_db_with_config(&config).unwrap();
    let timeout: i64 = conn
        .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 250);
    close_db(conn).unwrap();
    assert!(path.exists());
}

#[test]
fn opening_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dogs.db");
    assert!(open_db(&path).is_err());
}

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )
    .unwrap()
}
