use fleetdeck_core::db::open_db_in_memory;
use fleetdeck_core::KvStore;

#[test]
fn missing_collection_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let store = KvStore::new(&conn);

    assert_eq!(store.get_text("ships").unwrap(), None);
}

#[test]
fn put_then_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = KvStore::new(&conn);

    store.put_text("ships", "[]").unwrap();
    assert_eq!(store.get_text("ships").unwrap().as_deref(), Some("[]"));
}

#[test]
fn put_replaces_previous_body_last_write_wins() {
    let conn = open_db_in_memory().unwrap();
    let store = KvStore::new(&conn);

    store.put_text("jobs", "[1]").unwrap();
    store.put_text("jobs", "[2]").unwrap();

    assert_eq!(store.get_text("jobs").unwrap().as_deref(), Some("[2]"));
}

#[test]
fn collections_are_independently_keyed() {
    let conn = open_db_in_memory().unwrap();
    let store = KvStore::new(&conn);

    store.put_text("ships", "[\"a\"]").unwrap();
    store.put_text("components", "[\"b\"]").unwrap();

    assert_eq!(
        store.get_text("ships").unwrap().as_deref(),
        Some("[\"a\"]")
    );
    assert_eq!(
        store.get_text("components").unwrap().as_deref(),
        Some("[\"b\"]")
    );
    assert_eq!(store.get_text("jobs").unwrap(), None);
}

#[test]
fn remove_deletes_the_named_collection_only() {
    let conn = open_db_in_memory().unwrap();
    let store = KvStore::new(&conn);

    store.put_text("ships", "[]").unwrap();
    store.put_text("jobs", "[]").unwrap();
    store.remove("ships").unwrap();

    assert_eq!(store.get_text("ships").unwrap(), None);
    assert_eq!(store.get_text("jobs").unwrap().as_deref(), Some("[]"));
}
