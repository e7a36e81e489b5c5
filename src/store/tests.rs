use std::process;

use super::*;

fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("adaptive-quiz-test-{}-{}", process::id(), name));
    path.push(WEIGHTS_FILE);
    path
}

#[test]
fn missing_file_loads_nothing() {
    let store = FileWeightStore::new(scratch_path("missing"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn weights_survive_a_new_store() {
    let path = scratch_path("round-trip");
    FileWeightStore::new(path.clone())
        .save(&[1.0, 0.6, 1.4])
        .unwrap();

    let loaded = FileWeightStore::new(path.clone()).load().unwrap().unwrap();
    let expected = [1.0, 0.6, 1.4];
    assert_eq!(loaded.len(), expected.len());
    for (loaded, expected) in loaded.iter().zip(expected.iter()) {
        assert!((loaded - expected).abs() < 1e-9);
    }

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn save_replaces_previous_weights() {
    let path = scratch_path("replace");
    let store = FileWeightStore::new(path.clone());
    store.save(&[1.0, 1.0, 1.0]).unwrap();
    store.save(&[0.9]).unwrap();
    assert_eq!(store.load().unwrap(), Some(vec![0.9]));

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn null_entries_load_as_nan() {
    let path = scratch_path("nulls");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[0.5,null,1.5]").unwrap();

    let loaded = FileWeightStore::new(path.clone()).load().unwrap().unwrap();
    assert_eq!(loaded[0], 0.5);
    assert!(loaded[1].is_nan());
    assert_eq!(loaded[2], 1.5);

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn corrupt_file_is_an_error() {
    let path = scratch_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    assert!(FileWeightStore::new(path.clone()).load().is_err());

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn data_dir_store_uses_weights_file() {
    if let Ok(store) = FileWeightStore::in_data_dir() {
        assert!(store.path().ends_with(Path::new(APP_DIRECTORY).join(WEIGHTS_FILE)));
    }
}

#[test]
fn memory_store_shares_between_clones() {
    let store = MemoryWeightStore::new();
    assert_eq!(store.load().unwrap(), None);
    store.clone().save(&[0.3, 0.4]).unwrap();
    assert_eq!(store.load().unwrap(), Some(vec![0.3, 0.4]));
    assert_eq!(store.snapshot(), Some(vec![0.3, 0.4]));
}
