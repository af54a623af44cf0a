use super::*;
use serde::Deserialize;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Draft {
    title: String,
}

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    // removing twice is harmless
    store.remove("k");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("a", "1");
    assert_eq!(store.len(), 1);
}

#[test]
fn save_json_writes_serialized_value() {
    let store = MemoryStore::new();
    save_json(&store, "draft", &Draft { title: "Dune".into() });
    let raw = store.get("draft").expect("value saved");
    assert_eq!(serde_json::from_str::<Draft>(&raw).expect("valid json"), Draft { title: "Dune".into() });
}
