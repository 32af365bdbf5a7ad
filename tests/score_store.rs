use flagquiz::score::{ScoreStore, StoreError};
use tempfile::TempDir;

#[test]
fn missing_file_reads_zero() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::open(dir.path().join("score.toml")).unwrap();
    assert_eq!(store.get(), 0);
}

#[test]
fn set_then_get() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::open(dir.path().join("score.toml")).unwrap();
    store.set(25).unwrap();
    assert_eq!(store.get(), 25);
}

#[test]
fn score_survives_a_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.toml");

    let store = ScoreStore::open(&path).unwrap();
    store.set(15).unwrap();
    drop(store);

    let reopened = ScoreStore::open(&path).unwrap();
    assert_eq!(reopened.get(), 15);
}

#[test]
fn negative_scores_persist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.toml");

    let store = ScoreStore::open(&path).unwrap();
    store.set(-35).unwrap();

    assert_eq!(ScoreStore::open(&path).unwrap().get(), -35);
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("score.toml");
    std::fs::write(&path, "score = \"not a number\"").unwrap();

    assert!(matches!(
        ScoreStore::open(&path),
        Err(StoreError::Parse { .. })
    ));
}

#[test]
fn set_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("score.toml");

    let store = ScoreStore::open(&path).unwrap();
    store.set(3).unwrap();
    assert_eq!(ScoreStore::open(&path).unwrap().get(), 3);
}

#[test]
fn clones_share_the_same_value() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::open(dir.path().join("score.toml")).unwrap();
    let clone = store.clone();

    store.set(7).unwrap();
    assert_eq!(clone.get(), 7);
}
