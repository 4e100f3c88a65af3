// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn version_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = heapsort_store::migrations::apply_migrations(&mut conn);
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = get_table_names(&conn);
    for expected in ["arrays", "schema_version", "sort_history", "sqlite_sequence"] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
    assert_eq!(tables.len(), 4);
}

#[test]
fn test_every_embedded_migration_is_recorded() {
    let mut conn = setup_test_db();
    heapsort_store::migrations::apply_migrations(&mut conn).unwrap();

    let expected = heapsort_store::migrations::get_migrations().len() as i64;
    assert_eq!(version_count(&conn), expected);
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    heapsort_store::migrations::apply_migrations(&mut conn).unwrap();

    let result = heapsort_store::migrations::apply_migrations(&mut conn);
    assert!(result.is_ok(), "Re-running migrations should succeed");

    let expected = heapsort_store::migrations::get_migrations().len() as i64;
    assert_eq!(version_count(&conn), expected);
}

#[test]
fn test_checksum_is_stored() {
    let mut conn = setup_test_db();
    heapsort_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            ["001_initial_schema"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_tampered_checksum_is_rejected() {
    let mut conn = setup_test_db();
    heapsort_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = ?",
        ["001_initial_schema"],
    )
    .unwrap();

    let err = heapsort_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.op(), Some("migration_checksum"));
    assert!(err.message().contains("001_initial_schema"));
}
