//! End-to-end persistence tests: card store + file storage round trips.

use cartela::catalog::CartelaCatalog;
use cartela::constants::STORAGE_KEY;
use cartela::models::{Card, GRID_SIZE};
use cartela::storage::{FileStorage, StorageBackend};
use cartela::store::CardStore;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> CardStore {
    CardStore::load(
        CartelaCatalog::load_or_empty(),
        Box::new(FileStorage::new(dir.path())),
    )
}

#[test]
fn add_toggle_reload_scenario() {
    let dir = TempDir::new().unwrap();

    // Start with an empty store, add cartela 5, mark cell (0,1)
    let mut store = store_in(&dir);
    assert!(store.is_empty());

    let id = store.add_card("5").unwrap();
    store.toggle_cell(id, 0, 1);

    // Reload from the persisted snapshot
    let reloaded = store_in(&dir);
    assert_eq!(reloaded.len(), 1);

    let card = reloaded.get(id).unwrap();
    assert_eq!(card.name, "Cartela 5");
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(
                card.marked_cells.is_marked(row, col),
                (row, col) == (0, 1),
                "unexpected mark at ({row}, {col})"
            );
        }
    }
}

#[test]
fn reload_is_deep_equal() {
    let dir = TempDir::new().unwrap();

    let mut store = store_in(&dir);
    let a = store.add_card("1").unwrap();
    let b = store.add_card("42").unwrap();
    store.toggle_cell(a, 4, 4);
    store.toggle_cell(b, 1, 3);
    store.delete_card(a);

    let reloaded = store_in(&dir);
    assert_eq!(reloaded.cards(), store.cards());
}

#[test]
fn saved_blob_uses_historical_field_names() {
    let dir = TempDir::new().unwrap();

    let mut store = store_in(&dir);
    store.add_card("7");

    let storage = FileStorage::new(dir.path());
    let blob = storage.load(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();

    let card = &json.as_array().unwrap()[0];
    for field in ["id", "name", "numbers", "expanded", "markedCells"] {
        assert!(card.get(field).is_some(), "missing field {field}");
    }

    // The grid must keep the numeric-or-"FREE" union in serialized form
    let parsed: Vec<Card> = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.len(), 1);
    assert!(blob.contains("\"FREE\""));
}

#[test]
fn corrupt_blob_on_disk_starts_empty() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.save(STORAGE_KEY, "this is not json").unwrap();

    let store = store_in(&dir);
    assert!(store.is_empty());
}

#[test]
fn clear_saved_removes_the_blob() {
    let dir = TempDir::new().unwrap();

    let mut store = store_in(&dir);
    store.add_card("3");
    store.clear_saved();

    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.load(STORAGE_KEY).unwrap(), None);
    let reloaded = store_in(&dir);
    assert!(reloaded.is_empty());
}

#[test]
fn hydration_does_not_rewrite_the_file() {
    let dir = TempDir::new().unwrap();

    let mut store = store_in(&dir);
    store.add_card("9");

    let storage = FileStorage::new(dir.path());
    let before = storage.load(STORAGE_KEY).unwrap().unwrap();

    let _reloaded = store_in(&dir);
    let after = storage.load(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(after, before);
}
