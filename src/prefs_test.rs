use super::*;

#[test]
fn memory_store_reads_back_written_value() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn memory_store_clones_share_backing_map() {
    let store = MemoryStore::new();
    let alias = store.clone();
    alias.set("k", "v").unwrap();
    assert_eq!(store.peek("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_default_is_available() {
    let store = MemoryStore::default();
    assert!(store.set("k", "v").is_ok());
}

#[test]
fn unavailable_store_fails_every_access() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    assert!(store.is_empty());
}

#[test]
fn read_or_none_swallows_failures() {
    let store = MemoryStore::unavailable().with("k", "v");
    assert_eq!(read_or_none(&store, "k"), None);
}

#[test]
fn write_best_effort_drops_failures() {
    let store = MemoryStore::unavailable();
    write_best_effort(&store, "k", "v");
    assert_eq!(store.peek("k"), None);
}

#[test]
fn rc_store_delegates() {
    let inner = MemoryStore::new();
    let shared = Rc::new(inner.clone());
    shared.set("k", "v").unwrap();
    assert_eq!(inner.peek("k").as_deref(), Some("v"));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "theme".into(), reason: "quota".into() };
    assert_eq!(err.to_string(), "failed to write preference theme: quota");
}
